//! boprobe -- PrestaShop back-office table verification CLI.

mod cli;
mod commands;
mod error;
mod logging;
mod output;

use clap::Parser;
use colored::Colorize;

use crate::cli::{Cli, Commands};
use crate::error::CliError;
use crate::output::OutputWriter;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let general = logging::effective_general(&cli.config, cli.log_level.as_deref()).await;
    if let Err(e) = logging::init_tracing(&general, cli.log_level.is_some()) {
        eprintln!("{} {}", "warning:".yellow().bold(), e);
    }
    boprobe_core::metrics::describe_all();

    tracing::debug!(config = %cli.config.display(), "boprobe starting");

    if let Err(e) = dispatch(cli).await {
        eprintln!("{} {}", "error:".red().bold(), e);
        std::process::exit(e.exit_code());
    }
}

async fn dispatch(cli: Cli) -> Result<(), CliError> {
    let writer = OutputWriter::new(cli.output);

    match cli.command {
        Commands::Run(args) => {
            let config = commands::load_config(&cli.config).await?;
            commands::run::execute(args, &config, &writer).await
        }
        Commands::Sort(args) => commands::sort::execute(args, &writer),
        Commands::Verify(args) => commands::verify::execute(args, &writer),
        Commands::Thumbnails(args) => commands::thumbnails::execute(args, &writer),
        Commands::Config(args) => commands::config::execute(args, &cli.config, &writer).await,
    }
}
