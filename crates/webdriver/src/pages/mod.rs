//! Back-office page objects.
//!
//! Each submodule holds the CSS selectors of one admin page and the steps that
//! drive it through a [`WebDriverClient`]. Selectors live in constants so they
//! can be aligned with the admin theme version under test in one place.

pub mod grid;
pub mod help;
pub mod login;
pub mod menu;
pub mod theme;

use tracing::debug;

use crate::client::WebDriverClient;
use crate::error::WebDriverError;

/// Hide button of the Symfony debug toolbar (debug mode only).
pub const SF_TOOLBAR_HIDE_BUTTON: &str = "a[id^='sfToolbarHideButton']";

/// Closes the Symfony debug toolbar when it is displayed.
pub async fn close_sf_toolbar(client: &WebDriverClient) -> Result<(), WebDriverError> {
    if let Some(button) = client.first_visible(SF_TOOLBAR_HIDE_BUTTON).await? {
        client.click(&button).await?;
        debug!("symfony toolbar closed");
    }
    Ok(())
}

/// Waits for a notification and returns its trimmed text.
pub async fn wait_for_message(client: &WebDriverClient, css: &str) -> Result<String, WebDriverError> {
    let element = client.wait_for_visible(css).await?;
    Ok(client.text(&element).await?.trim().to_owned())
}
