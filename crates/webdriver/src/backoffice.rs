//! [`BackOffice`] driven by a live browser.

use std::sync::Arc;

use boprobe_core::config::BoprobeConfig;
use boprobe_core::driver::{AdminPage, BackOffice, GridKind};
use boprobe_core::error::BoprobeError;

use crate::client::WebDriverClient;
use crate::error::WebDriverError;
use crate::grid::WebGrid;
use crate::pages::{self, help, login, menu, theme};

/// Back office driven through one WebDriver session.
///
/// Owns the session and the two stock grids that share it. Pages are reached
/// from `url` (the admin base URL, including the admin folder).
pub struct WebBackOffice {
    client: Arc<WebDriverClient>,
    url: String,
    stocks: WebGrid,
    movements: WebGrid,
}

impl WebBackOffice {
    /// Opens a browser session for the configured back office.
    pub async fn connect(config: &BoprobeConfig) -> Result<Self, WebDriverError> {
        let client = WebDriverClient::connect(&config.webdriver).await?;
        Ok(Self::new(client, &config.backoffice.url))
    }

    /// Wraps an already opened session. `url` is the admin base URL.
    pub fn new(client: WebDriverClient, url: &str) -> Self {
        let client = Arc::new(client);
        Self {
            stocks: WebGrid::new(Arc::clone(&client), &pages::grid::STOCKS),
            movements: WebGrid::new(Arc::clone(&client), &pages::grid::MOVEMENTS),
            client,
            url: url.to_owned(),
        }
    }

    /// Ends the browser session.
    pub async fn quit(self) -> Result<(), WebDriverError> {
        let Self {
            client,
            stocks,
            movements,
            ..
        } = self;
        drop(stocks);
        drop(movements);
        match Arc::try_unwrap(client) {
            Ok(client) => client.quit().await,
            Err(_) => Err(WebDriverError::Unexpected(
                "browser session is still shared".to_owned(),
            )),
        }
    }
}

impl BackOffice for WebBackOffice {
    type Grid = WebGrid;

    async fn login(&self, email: &str, password: &str) -> Result<String, BoprobeError> {
        Ok(login::login(&self.client, &self.url, email, password).await?)
    }

    async fn go_to_page(&self, page: AdminPage) -> Result<String, BoprobeError> {
        Ok(menu::go_to(&self.client, page).await?)
    }

    async fn close_sf_toolbar(&self) -> Result<(), BoprobeError> {
        Ok(pages::close_sf_toolbar(&self.client).await?)
    }

    fn grid(&self, kind: GridKind) -> &WebGrid {
        match kind {
            GridKind::Stocks => &self.stocks,
            GridKind::Movements => &self.movements,
        }
    }

    async fn filter_stocks(&self, query: &str) -> Result<(), BoprobeError> {
        Ok(self.stocks.simple_filter(query).await?)
    }

    async fn number_of_themes(&self) -> Result<usize, BoprobeError> {
        Ok(theme::number_of_themes(&self.client).await?)
    }

    async fn enable_theme(&self, theme_name: &str) -> Result<String, BoprobeError> {
        Ok(theme::enable_theme(&self.client, theme_name).await?)
    }

    async fn open_help_sidebar(&self) -> Result<bool, BoprobeError> {
        Ok(help::open(&self.client).await?)
    }

    async fn help_document_url(&self) -> Result<String, BoprobeError> {
        Ok(help::document_url(&self.client).await?)
    }

    async fn close_help_sidebar(&self) -> Result<bool, BoprobeError> {
        Ok(help::close(&self.client).await?)
    }
}
