//! `boprobe run` command handler

use std::io::Write;

use tracing::{info, warn};

use boprobe_campaign::{Campaign, CampaignReport, StepStatus};
use boprobe_core::config::BoprobeConfig;
use boprobe_core::simulate::{BackOfficeFixture, SimulatedBackOffice};
use boprobe_webdriver::WebBackOffice;

use crate::cli::RunArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `run` command.
///
/// Returns `CliError::CheckFailed` (exit code 5) when a step fails; the
/// report is rendered first in every case.
pub async fn execute(
    args: RunArgs,
    config: &BoprobeConfig,
    writer: &OutputWriter,
) -> Result<(), CliError> {
    let campaign: Campaign = args.campaign.parse()?;

    let report = if args.simulate {
        let backoffice = match &args.fixture {
            Some(path) => {
                info!(fixture = %path.display(), "loading simulated back office");
                SimulatedBackOffice::from_fixture(BackOfficeFixture::load(path).await?).await
            }
            None => SimulatedBackOffice::demo().await,
        }
        .with_credentials(&config.backoffice.email, &config.backoffice.password)
        .with_language(&config.backoffice.language);

        boprobe_campaign::run(campaign, &backoffice, config).await
    } else {
        info!(
            endpoint = %config.webdriver.endpoint,
            url = %config.backoffice.url,
            "connecting to webdriver"
        );
        let backoffice = WebBackOffice::connect(config).await?;
        let report = boprobe_campaign::run(campaign, &backoffice, config).await;
        if let Err(e) = backoffice.quit().await {
            warn!(error = %e, "failed to end webdriver session");
        }
        report
    };

    writer.render(&report)?;

    match &report.failure {
        None => Ok(()),
        Some(failure) => Err(CliError::CheckFailed(format!(
            "{} failed at {}: {}",
            campaign, failure.test_identifier, failure.message
        ))),
    }
}

impl Render for CampaignReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(w, "Campaign: {} (run {})", self.campaign.name().bold(), self.run_id)?;
        writeln!(w, "  Context: {}", self.base_context)?;
        writeln!(w)?;

        let width = self
            .steps
            .iter()
            .map(|s| s.test_identifier.len())
            .max()
            .unwrap_or(0);

        for step in &self.steps {
            let (mark, timing) = match step.status {
                StepStatus::Passed => ("✓".green(), format!("{}ms", step.duration_ms)),
                StepStatus::Failed => ("✗".red(), format!("{}ms", step.duration_ms)),
                StepStatus::Skipped => ("-".dimmed(), "skipped".to_owned()),
            };
            writeln!(
                w,
                "  {} {:<width$}  {}",
                mark,
                step.test_identifier,
                timing.dimmed(),
                width = width
            )?;
            if let Some(detail) = &step.detail {
                writeln!(w, "      {}", detail.red())?;
            }
        }

        writeln!(w)?;
        let result = if self.passed() {
            "PASSED".green().bold()
        } else {
            "FAILED".red().bold()
        };
        writeln!(
            w,
            "Result: {} ({} passed, {} failed, {} skipped) in {}ms",
            result,
            self.count(StepStatus::Passed),
            self.count(StepStatus::Failed),
            self.count(StepStatus::Skipped),
            self.duration_ms
        )?;

        Ok(())
    }
}
