//! Logging initialization for the boprobe CLI.
//!
//! Configures `tracing-subscriber` based on the `[general]` section
//! of `BoprobeConfig`. Logs go to stderr so that `--output json` on
//! stdout stays machine-readable.

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use boprobe_core::config::{BoprobeConfig, GeneralConfig};

/// Logging settings from the config file, env overrides and `--log-level`.
///
/// A missing or invalid config file falls back to defaults; the command
/// itself reports the config error.
pub async fn effective_general(config_path: &std::path::Path, cli_level: Option<&str>) -> GeneralConfig {
    let mut general = match BoprobeConfig::load(config_path).await {
        Ok(config) => config.general,
        Err(_) => {
            let mut config = BoprobeConfig::default();
            config.apply_env_overrides();
            config.general
        }
    };
    if let Some(level) = cli_level {
        general.log_level = level.to_owned();
    }
    general
}

/// Initialize the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros are used.
/// `RUST_LOG` takes precedence over `log_level` unless `--log-level` was given.
///
/// # Formats
///
/// * `"json"` - Machine-parseable JSON lines
/// * `"pretty"` - Human-readable colored output
pub fn init_tracing(config: &GeneralConfig, cli_override: bool) -> Result<()> {
    let env_filter = if cli_override {
        EnvFilter::try_new(&config.log_level)?
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    match config.log_format.as_str() {
        "json" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .json()
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| {
                    anyhow::anyhow!("failed to initialize JSON tracing subscriber: {}", e)
                })?;
        }
        "pretty" => {
            tracing_subscriber::registry()
                .with(env_filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .pretty()
                        .with_writer(std::io::stderr),
                )
                .try_init()
                .map_err(|e| {
                    anyhow::anyhow!("failed to initialize pretty tracing subscriber: {}", e)
                })?;
        }
        _ => {
            return Err(anyhow::anyhow!(
                "unknown log format '{}', expected 'json' or 'pretty'",
                config.log_format
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_format_is_rejected() {
        let config = GeneralConfig {
            log_level: "info".to_owned(),
            log_format: "xml".to_owned(),
        };
        let err = init_tracing(&config, true).expect_err("xml should be rejected");
        assert!(err.to_string().contains("xml"));
    }

    #[tokio::test]
    async fn test_missing_config_uses_defaults_with_cli_level() {
        let general =
            effective_general(std::path::Path::new("/nonexistent/boprobe.toml"), Some("debug"))
                .await;
        assert_eq!(general.log_level, "debug");
    }

    #[tokio::test]
    #[serial_test::serial]
    async fn test_missing_config_keeps_env_format() {
        // SAFETY: serialized by serial_test
        unsafe { std::env::set_var("BOPROBE_GENERAL_LOG_FORMAT", "json") };
        let general =
            effective_general(std::path::Path::new("/nonexistent/boprobe.toml"), None).await;
        unsafe { std::env::remove_var("BOPROBE_GENERAL_LOG_FORMAT") };

        assert_eq!(general.log_format, "json");
        assert_eq!(general.log_level, "info");
    }
}
