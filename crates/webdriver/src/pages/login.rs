//! Login page.

use tracing::info;

use crate::client::WebDriverClient;
use crate::error::WebDriverError;

pub const EMAIL_INPUT: &str = "#email";
pub const PASSWORD_INPUT: &str = "#passwd";
pub const SUBMIT_BUTTON: &str = "#submit_login";
pub const LOGIN_ERROR: &str = "#error";
/// Container present on every authenticated admin page.
pub const MAIN_CONTAINER: &str = "#main-div";

/// Opens the back office, submits the credentials and waits for the dashboard.
pub async fn login(
    client: &WebDriverClient,
    url: &str,
    email: &str,
    password: &str,
) -> Result<String, WebDriverError> {
    client.navigate(url).await?;
    client.fill(EMAIL_INPUT, email).await?;
    client.fill(PASSWORD_INPUT, password).await?;
    client.click_visible(SUBMIT_BUTTON).await?;

    let outcome = client
        .wait_for("login result", move || async move {
            if client.first_visible(MAIN_CONTAINER).await?.is_some() {
                return Ok(Some(Ok(())));
            }
            if let Some(error) = client.first_visible(LOGIN_ERROR).await? {
                let message = client.text(&error).await?;
                return Ok(Some(Err(message)));
            }
            Ok(None)
        })
        .await?;

    if let Err(message) = outcome {
        return Err(WebDriverError::Session(format!(
            "authentication failed: {}",
            message.trim()
        )));
    }

    let title = client.title().await?;
    info!(email, title = %title, "logged in");
    Ok(title)
}
