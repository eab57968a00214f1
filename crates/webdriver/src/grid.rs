//! [`TableDriver`] over a rendered stock grid.

use std::sync::Arc;

use boprobe_core::driver::TableDriver;
use boprobe_core::error::BoprobeError;
use boprobe_core::types::SortDirection;
use serde_json::json;
use tracing::debug;

use crate::client::WebDriverClient;
use crate::error::WebDriverError;
use crate::pages::grid::{self as sel, GridSelectors};
use crate::pages::wait_for_message;

/// Header clicks needed at most to go from unsorted to descending.
const MAX_SORT_CLICKS: usize = 3;

/// One rendered back-office grid (stocks or movements) in a live session.
///
/// Cells are read through a single script call per column; sorting clicks the
/// column header until it reports the requested direction.
pub struct WebGrid {
    client: Arc<WebDriverClient>,
    selectors: &'static GridSelectors,
}

impl WebGrid {
    /// Binds a grid's selectors to a shared session.
    pub fn new(client: Arc<WebDriverClient>, selectors: &'static GridSelectors) -> Self {
        Self { client, selectors }
    }

    async fn wait_until_loaded(&self) -> Result<(), WebDriverError> {
        self.client.wait_for_hidden(sel::LOADER).await
    }

    async fn current_page(&self) -> Result<u32, WebDriverError> {
        // Pagination is hidden when everything fits on one page.
        let Some(active) = self.client.first_visible(sel::ACTIVE_PAGE).await? else {
            return Ok(1);
        };
        let label = self.client.text(&active).await?;
        label
            .trim()
            .parse()
            .map_err(|_| WebDriverError::Unexpected(format!("page indicator is not a number: {label:?}")))
    }

    async fn column_values(&self, column: &str) -> Result<Vec<String>, WebDriverError> {
        let cell = self.selectors.column(column)?.cell;
        let value = self
            .client
            .execute(sel::COLUMN_SCRIPT, vec![json!(sel::ROWS), json!(cell)])
            .await?;
        crate::protocol::string_list(&value)
    }

    async fn sort(&self, column: &str, direction: SortDirection) -> Result<(), WebDriverError> {
        let header = self.selectors.sort_header(column)?;
        for _ in 0..MAX_SORT_CLICKS {
            let element = self.client.wait_for_visible(&header).await?;
            let current = self
                .client
                .attribute(&element, sel::SORT_DIRECTION_ATTR)
                .await?;
            if current.as_deref() == Some(direction.as_str()) {
                return Ok(());
            }
            self.client.click(&element).await?;
            self.wait_until_loaded().await?;
        }
        Err(WebDriverError::Unexpected(format!(
            "{} header '{column}' never reached {direction}",
            self.selectors.name
        )))
    }

    async fn paginate(&self, page: u32) -> Result<u32, WebDriverError> {
        let clicked = self
            .client
            .execute(sel::PAGINATE_SCRIPT, vec![json!(sel::PAGINATION_LINKS), json!(page)])
            .await?;
        if clicked.as_bool() == Some(true) {
            self.wait_until_loaded().await?;
        }
        self.current_page().await
    }

    async fn bulk_edit(&self, quantity: i64) -> Result<String, WebDriverError> {
        self.client.click_visible(sel::BULK_SELECT_ALL).await?;
        self.client
            .fill(sel::BULK_QUANTITY_INPUT, &quantity.to_string())
            .await?;
        self.client.click_visible(sel::BULK_APPLY).await?;
        self.wait_until_loaded().await?;
        wait_for_message(&self.client, sel::ALERT).await
    }

    /// Applies the simple search filter of the grid.
    pub async fn simple_filter(&self, query: &str) -> Result<(), WebDriverError> {
        self.client.fill(sel::SIMPLE_FILTER_INPUT, query).await?;
        self.client.click_visible(sel::SIMPLE_FILTER_SUBMIT).await?;
        self.wait_until_loaded().await
    }
}

impl TableDriver for WebGrid {
    async fn get_all_rows_column_content(&self, column: &str) -> Result<Vec<String>, BoprobeError> {
        Ok(self.column_values(column).await?)
    }

    async fn sort_table(&self, column: &str, direction: SortDirection) -> Result<(), BoprobeError> {
        self.sort(column, direction).await?;
        debug!(grid = self.selectors.name, column, %direction, "grid sorted");
        Ok(())
    }

    async fn paginate_to(&self, page: u32) -> Result<u32, BoprobeError> {
        Ok(self.paginate(page).await?)
    }

    async fn bulk_edit_quantity_with_input(&self, quantity: i64) -> Result<String, BoprobeError> {
        Ok(self.bulk_edit(quantity).await?)
    }
}
