//! Stocks and Movements grids.
//!
//! Both grids are rendered by the same stock management app and share their
//! header, pagination and bulk-action markup. They differ in their columns.

use crate::error::WebDriverError;

pub const ROWS: &str = "#app table.table tbody tr";
pub const PAGINATION_LINKS: &str = "#app .pagination a.page-link";
pub const ACTIVE_PAGE: &str = "#app .pagination li.page-item.active";
pub const LOADER: &str = "#app .ps-loader";
pub const SORT_DIRECTION_ATTR: &str = "data-sort-direction";

pub const BULK_SELECT_ALL: &str = "#app #bulk-action";
pub const BULK_QUANTITY_INPUT: &str = "#app .bulk-qty input";
pub const BULK_APPLY: &str = "#app button.update-qty";
pub const ALERT: &str = "#app .alert-box .alert p";

pub const SIMPLE_FILTER_INPUT: &str = "#app form.search-form input.input";
pub const SIMPLE_FILTER_SUBMIT: &str = "#app form.search-form button.search-button";

/// Reads one cell per row. Inputs report their value, other cells their text.
pub const COLUMN_SCRIPT: &str = r#"
const [rowSelector, cellSelector] = arguments;
return Array.from(document.querySelectorAll(rowSelector)).map((row) => {
  const cell = row.querySelector(cellSelector);
  if (!cell) return null;
  const raw = cell instanceof HTMLInputElement ? cell.value : cell.textContent;
  return raw.trim();
});
"#;

/// Clicks the pagination link whose label is the page number.
pub const PAGINATE_SCRIPT: &str = r#"
const [linkSelector, page] = arguments;
const link = Array.from(document.querySelectorAll(linkSelector))
  .find((a) => a.textContent.trim() === String(page));
if (!link) return false;
link.click();
return true;
"#;

/// Where to read a column and which header sorts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSelector {
    pub key: &'static str,
    /// Relative to a row.
    pub cell: &'static str,
    /// `data-sort-col-name` of the header; `None` when the column cannot be sorted.
    pub sort_name: Option<&'static str>,
}

#[derive(Debug)]
pub struct GridSelectors {
    pub name: &'static str,
    pub columns: &'static [ColumnSelector],
}

impl GridSelectors {
    pub fn column(&self, key: &str) -> Result<&ColumnSelector, WebDriverError> {
        self.columns
            .iter()
            .find(|c| c.key == key)
            .ok_or_else(|| WebDriverError::ColumnNotFound(key.to_owned()))
    }

    /// Sort header of a column.
    pub fn sort_header(&self, key: &str) -> Result<String, WebDriverError> {
        let column = self.column(key)?;
        let name = column.sort_name.ok_or_else(|| {
            WebDriverError::Unexpected(format!("column '{key}' of {} is not sortable", self.name))
        })?;
        Ok(format!("#app .ps-sortable-column[data-sort-col-name='{name}']"))
    }
}

const fn col(key: &'static str, cell: &'static str, sort_name: Option<&'static str>) -> ColumnSelector {
    ColumnSelector { key, cell, sort_name }
}

pub static STOCKS: GridSelectors = GridSelectors {
    name: "stocks",
    columns: &[
        col("product_id", "td:nth-child(1) input", Some("product_id")),
        col("product_name", "td:nth-child(2) .media-body p", Some("product")),
        col("reference", "td:nth-child(2) .media-body small", Some("reference")),
        col("supplier", "td:nth-child(3)", Some("supplier")),
        col("physical", "td:nth-child(5)", Some("physical_quantity")),
        col("reserved", "td:nth-child(6)", None),
        col("available", "td:nth-child(7)", Some("available_quantity")),
    ],
};

pub static MOVEMENTS: GridSelectors = GridSelectors {
    name: "movements",
    columns: &[
        col("product_id", "td:nth-child(1) input", Some("product_id")),
        col("product_name", "td:nth-child(2) .media-body p", Some("product_name")),
        col("reference", "td:nth-child(2) .media-body small", Some("reference")),
        col("quantity", "td:nth-child(3) .qty-number", None),
        col("date_add", "td:nth-child(4)", Some("date_add")),
        col("employee", "td:nth-child(5)", None),
    ],
};
