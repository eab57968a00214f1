//! `boprobe config` command handler

use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use boprobe_core::config::BoprobeConfig;

use crate::cli::{ConfigAction, ConfigArgs};
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Sections accepted by `config show --section`.
const SECTIONS: [&str; 4] = ["general", "backoffice", "webdriver", "campaign"];

pub async fn execute(
    args: ConfigArgs,
    config_path: &Path,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    match args.action {
        ConfigAction::Validate => validate(config_path, writer).await,
        ConfigAction::Show { section } => show(config_path, section, writer).await,
    }
}

/// Loads the file strictly: a missing file is an error here, unlike other commands.
async fn validate(config_path: &Path, writer: &OutputWriter) -> Result<(), CliError> {
    info!(path = %config_path.display(), "validating configuration");

    let errors = match BoprobeConfig::load(config_path).await {
        Ok(_) => Vec::new(),
        Err(e) => vec![e.to_string()],
    };
    let report = ConfigValidationReport {
        source: config_path.display().to_string(),
        valid: errors.is_empty(),
        errors,
    };
    writer.render(&report)?;

    if report.valid {
        Ok(())
    } else {
        Err(CliError::Config(format!(
            "{} is invalid",
            config_path.display()
        )))
    }
}

async fn show(
    config_path: &Path,
    section: Option<String>,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let config = super::load_config(config_path).await?.redacted();
    let report = ConfigReport::build(&config, config_path, section)?;
    writer.render(&report)
}

/// Effective configuration, password redacted.
#[derive(Serialize)]
pub struct ConfigReport {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    pub config: serde_json::Value,
    /// Text form only
    #[serde(skip)]
    pub toml: String,
}

impl ConfigReport {
    fn build(
        config: &BoprobeConfig,
        config_path: &Path,
        section: Option<String>,
    ) -> Result<Self, CliError> {
        let (config_value, toml) = match section.as_deref() {
            None => encode(config)?,
            Some("general") => encode(&config.general)?,
            Some("backoffice") => encode(&config.backoffice)?,
            Some("webdriver") => encode(&config.webdriver)?,
            Some("campaign") => encode(&config.campaign)?,
            Some(other) => {
                return Err(CliError::Command(format!(
                    "unknown config section '{other}', expected one of: {}",
                    SECTIONS.join(", ")
                )));
            }
        };

        Ok(Self {
            source: config_path.display().to_string(),
            section,
            config: config_value,
            toml,
        })
    }
}

fn encode<T: Serialize>(value: &T) -> Result<(serde_json::Value, String), CliError> {
    let toml = toml::to_string_pretty(value)
        .map_err(|e| CliError::Command(format!("cannot render config as TOML: {e}")))?;
    Ok((serde_json::to_value(value)?, toml))
}

impl Render for ConfigReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        match &self.section {
            Some(section) => writeln!(w, "# {} [{}]", self.source.bold(), section)?,
            None => writeln!(w, "# {}", self.source.bold())?,
        }
        write!(w, "{}", self.toml)
    }
}

/// Result of `config validate`.
#[derive(Serialize)]
pub struct ConfigValidationReport {
    pub source: String,
    pub valid: bool,
    pub errors: Vec<String>,
}

impl Render for ConfigValidationReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        let verdict = if self.valid {
            "valid".green().bold()
        } else {
            "invalid".red().bold()
        };
        writeln!(w, "{}: {}", self.source, verdict)?;
        for error in &self.errors {
            writeln!(w, "  - {}", error.red())?;
        }
        Ok(())
    }
}
