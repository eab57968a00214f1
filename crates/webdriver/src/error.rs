//! WebDriver error types.
//!
//! [`WebDriverError`] covers every failure of the HTTP client and the page objects.
//! `From<WebDriverError> for BoprobeError` lets the `BackOffice` implementation
//! propagate with `?`.

use boprobe_core::error::{BoprobeError, ConfigError, DriverError, VerificationError};

/// WebDriver domain error
#[derive(Debug, thiserror::Error)]
pub enum WebDriverError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The HTTP request to the WebDriver endpoint failed.
    #[error("webdriver request failed: {0}")]
    Request(String),

    /// The response body was not a WebDriver envelope.
    #[error("webdriver response parse failed: {0}")]
    Parse(String),

    /// Session could not be created or is gone.
    #[error("webdriver session error: {0}")]
    Session(String),

    /// No element matched the selector.
    #[error("no such element: {selector}")]
    NoSuchElement {
        /// CSS selector
        selector: String,
    },

    /// A condition wait exceeded its bound.
    #[error("timed out after {timeout_ms}ms waiting for {what}")]
    Timeout {
        /// Awaited condition
        what: String,
        /// Bound in milliseconds
        timeout_ms: u64,
    },

    /// The endpoint returned a WebDriver error payload.
    #[error("webdriver command failed (status {status}): {error}: {message}")]
    Command {
        /// HTTP status
        status: u16,
        /// W3C error code
        error: String,
        /// Driver message
        message: String,
    },

    /// Unsupported browser name.
    #[error("unknown browser: {0} (expected: chrome, firefox)")]
    UnknownBrowser(String),

    /// The grid has no selector for this column key.
    #[error("column not found: {0}")]
    ColumnNotFound(String),

    /// The page did not look the way the page object expects.
    #[error("unexpected page state: {0}")]
    Unexpected(String),
}

impl From<WebDriverError> for BoprobeError {
    fn from(err: WebDriverError) -> Self {
        match err {
            WebDriverError::Session(msg) => DriverError::Session(msg).into(),
            WebDriverError::NoSuchElement { selector } => {
                DriverError::ElementNotFound { selector }.into()
            }
            WebDriverError::Timeout { what, timeout_ms } => {
                DriverError::Timeout { what, timeout_ms }.into()
            }
            WebDriverError::HttpClientBuild(msg) | WebDriverError::Request(msg) => {
                DriverError::Http(msg).into()
            }
            WebDriverError::ColumnNotFound(column) => {
                VerificationError::ColumnNotFound { column }.into()
            }
            WebDriverError::UnknownBrowser(name) => ConfigError::InvalidValue {
                field: "webdriver.browser".to_owned(),
                reason: format!("unknown browser: {name}"),
            }
            .into(),
            other @ (WebDriverError::Parse(_)
            | WebDriverError::Command { .. }
            | WebDriverError::Unexpected(_)) => DriverError::Protocol(other.to_string()).into(),
        }
    }
}
