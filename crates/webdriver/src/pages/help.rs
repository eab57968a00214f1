//! Contextual help sidebar, available on most admin pages.

use crate::client::WebDriverClient;
use crate::error::WebDriverError;

pub const HELP_BUTTON: &str = "#toolbar-nav a.btn-help";
pub const SIDEBAR: &str = "#right-sidebar";
pub const SIDEBAR_IFRAME: &str = "#right-sidebar iframe";
pub const CLOSE_BUTTON: &str = "#right-sidebar .quicknav-close";

/// Opens the sidebar and reports whether it became visible.
pub async fn open(client: &WebDriverClient) -> Result<bool, WebDriverError> {
    client.click_visible(HELP_BUTTON).await?;
    client.wait_for_visible(SIDEBAR).await?;
    Ok(true)
}

/// `src` of the documentation iframe, once it is set.
pub async fn document_url(client: &WebDriverClient) -> Result<String, WebDriverError> {
    client
        .wait_for("help document url", move || async move {
            let Some(frame) = client.first_visible(SIDEBAR_IFRAME).await? else {
                return Ok(None);
            };
            Ok(client
                .attribute(&frame, "src")
                .await?
                .filter(|src| !src.is_empty()))
        })
        .await
}

/// Closes the sidebar and reports whether it is hidden.
pub async fn close(client: &WebDriverClient) -> Result<bool, WebDriverError> {
    client.click_visible(CLOSE_BUTTON).await?;
    client.wait_for_hidden(SIDEBAR).await?;
    Ok(true)
}
