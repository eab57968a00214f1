//! Design > Theme & Logo page.

use tracing::info;

use crate::client::WebDriverClient;
use crate::error::WebDriverError;
use crate::pages::wait_for_message;

pub const THEME_CARDS: &str = ".theme-card-container";
pub const CONFIRM_USE_THEME: &str = "#use_theme_modal .js-submit-use-theme";
pub const SUCCESS_ALERT: &str = "#main-div .alert-success .alert-text";

/// "Use this theme" button of a theme card.
pub fn use_theme_button(theme: &str) -> String {
    format!(".theme-card-container[data-theme-name='{theme}'] .js-display-use-theme-modal")
}

/// Number of installed themes.
pub async fn number_of_themes(client: &WebDriverClient) -> Result<usize, WebDriverError> {
    Ok(client.find_elements(THEME_CARDS).await?.len())
}

/// Enables a theme and returns the notification text.
pub async fn enable_theme(client: &WebDriverClient, theme: &str) -> Result<String, WebDriverError> {
    client.click_visible(&use_theme_button(theme)).await?;
    client.click_visible(CONFIRM_USE_THEME).await?;
    let message = wait_for_message(client, SUCCESS_ALERT).await?;
    info!(theme, message = %message, "theme enabled");
    Ok(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_theme_button_targets_card() {
        assert_eq!(
            use_theme_button("hummingbird"),
            ".theme-card-container[data-theme-name='hummingbird'] .js-display-use-theme-modal"
        );
    }
}
