//! CLI-specific error types and exit code mapping

use boprobe_campaign::CampaignError;
use boprobe_core::error::{BoprobeError, ConfigError};
use boprobe_webdriver::WebDriverError;

/// CLI-specific error type.
///
/// Each variant carries enough context for a user-friendly message.
/// The `exit_code()` method maps errors to process exit codes.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration loading or validation failure.
    #[error("configuration error: {0}")]
    Config(String),

    /// A subcommand-specific operation failed.
    #[error("{0}")]
    Command(String),

    /// A campaign step or a table check failed.
    #[error("check failed: {0}")]
    CheckFailed(String),

    /// JSON serialisation failed during output rendering.
    #[error("json output error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    /// IO error (file read, stdout write, etc.).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapped domain error from boprobe-core.
    #[error("{0}")]
    Core(#[from] BoprobeError),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                           |
    /// |------|-----------------------------------|
    /// | 0    | Success                           |
    /// | 1    | General / command error           |
    /// | 2    | Configuration error               |
    /// | 5    | Campaign step or check failed     |
    /// | 10   | IO error                          |
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Config(_) | Self::Core(BoprobeError::Config(_)) => 2,
            Self::CheckFailed(_) | Self::Core(BoprobeError::Verification(_)) => 5,
            Self::Io(_) | Self::Core(BoprobeError::Io(_)) => 10,
            Self::JsonSerialize(_) | Self::Command(_) | Self::Core(_) => 1,
        }
    }
}

impl From<WebDriverError> for CliError {
    fn from(e: WebDriverError) -> Self {
        Self::Core(e.into())
    }
}

impl From<CampaignError> for CliError {
    fn from(e: CampaignError) -> Self {
        match e {
            CampaignError::Boprobe(inner) => Self::Core(inner),
            CampaignError::UnknownCampaign(_) => Self::Command(e.to_string()),
            CampaignError::Assertion { .. } => Self::CheckFailed(e.to_string()),
        }
    }
}

impl From<ConfigError> for CliError {
    fn from(e: ConfigError) -> Self {
        Self::Core(e.into())
    }
}
