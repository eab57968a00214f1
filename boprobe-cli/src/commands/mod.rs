//! Command handlers -- one module per subcommand

pub mod config;
pub mod run;
pub mod sort;
pub mod thumbnails;
pub mod verify;

use std::path::Path;

use tracing::warn;

use boprobe_core::config::BoprobeConfig;
use boprobe_core::error::{BoprobeError, ConfigError};

use crate::error::CliError;

/// Load the effective configuration for commands that can run on defaults.
///
/// A missing file falls back to defaults plus env overrides; any other
/// load or validation failure is returned.
pub(crate) async fn load_config(config_path: &Path) -> Result<BoprobeConfig, CliError> {
    match BoprobeConfig::load(config_path).await {
        Ok(config) => Ok(config),
        Err(BoprobeError::Config(ConfigError::FileNotFound { path })) => {
            warn!(path = %path, "config file not found, using defaults");
            let mut config = BoprobeConfig::default();
            config.apply_env_overrides();
            config.validate()?;
            Ok(config)
        }
        Err(e) => Err(e.into()),
    }
}
