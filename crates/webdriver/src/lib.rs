//! W3C WebDriver implementation of the boprobe driver traits.
//!
//! # Module Structure
//!
//! - [`error`]: Domain error types (`WebDriverError`)
//! - [`protocol`]: Wire types and response parsing
//! - [`client`]: HTTP client bound to one browser session (`WebDriverClient`)
//! - [`pages`]: Admin page selectors and steps
//! - [`grid`]: `TableDriver` over the stock grids (`WebGrid`)
//! - [`backoffice`]: `BackOffice` over a browser session (`WebBackOffice`)
//!
//! # Architecture
//!
//! ```text
//! campaign --BackOffice--> WebBackOffice --pages--> WebDriverClient --HTTP--> chromedriver
//!                               |
//!                          WebGrid (stocks, movements)
//! ```

pub mod backoffice;
pub mod client;
pub mod error;
pub mod grid;
pub mod pages;
pub mod protocol;

pub use backoffice::WebBackOffice;
pub use client::WebDriverClient;
pub use error::WebDriverError;
pub use grid::WebGrid;
pub use protocol::{Browser, ElementRef};
