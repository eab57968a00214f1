//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// boprobe -- PrestaShop back-office table verification.
///
/// Use `boprobe <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "boprobe", version, about, long_about = None)]
pub struct Cli {
    /// Path to the boprobe.toml configuration file.
    #[arg(short, long, global = true, default_value = "boprobe.toml")]
    pub config: PathBuf,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run a verification campaign against the back office.
    Run(RunArgs),

    /// Print the expected sorted order of a list of values.
    Sort(SortArgs),

    /// Compare an observed column against an expected one.
    Verify(VerifyArgs),

    /// List category menu thumbnails in an image directory.
    Thumbnails(ThumbnailsArgs),

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- run ----

/// Run one campaign in a fresh browser (or simulated) session.
#[derive(Args, Debug)]
pub struct RunArgs {
    /// Campaign name (sort-and-pagination, enable-hummingbird, disable-hummingbird, help-card).
    pub campaign: String,

    /// Run against the in-memory back office instead of a browser.
    #[arg(long)]
    pub simulate: bool,

    /// JSON fixture for the simulated back office (default: demo catalog).
    #[arg(long, requires = "simulate")]
    pub fixture: Option<PathBuf>,
}

// ---- sort ----

/// Compute the order a correctly sorted grid would show.
#[derive(Args, Debug)]
pub struct SortArgs {
    /// Values in displayed order.
    pub values: Vec<String>,

    /// Compare as integers (leading digits) instead of strings.
    #[arg(long)]
    pub numeric: bool,

    /// Descending order.
    #[arg(long)]
    pub desc: bool,
}

// ---- verify ----

/// Exact comparison of two comma-separated columns.
#[derive(Args, Debug)]
pub struct VerifyArgs {
    /// Observed values, comma-separated.
    #[arg(long, value_delimiter = ',')]
    pub actual: Vec<String>,

    /// Expected values, comma-separated.
    #[arg(long, value_delimiter = ',')]
    pub expected: Vec<String>,
}

// ---- thumbnails ----

/// Find `<id>-<digit?>_thumb.jpg` files anywhere under a directory.
#[derive(Args, Debug)]
pub struct ThumbnailsArgs {
    /// Category image directory (e.g. img/c).
    pub dir: PathBuf,

    /// Category ID.
    pub category_id: u32,
}

// ---- config ----

/// Manage boprobe configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration file and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, backoffice, webdriver, campaign).
        #[arg(long)]
        section: Option<String>,
    },
}
