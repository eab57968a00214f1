//! `boprobe verify` command handler

use std::io::Write;

use serde::Serialize;

use boprobe_core::sort::check_order;
use boprobe_core::types::ColumnSnapshot;

use crate::cli::VerifyArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

const COLUMN: &str = "values";

/// Execute the `verify` command.
///
/// Returns `CliError::CheckFailed` (exit code 5) when the columns differ.
pub fn execute(args: VerifyArgs, writer: &OutputWriter) -> Result<(), CliError> {
    let report = build_report(args);
    writer.render(&report)?;

    match &report.mismatch {
        None => Ok(()),
        Some(reason) => Err(CliError::CheckFailed(reason.clone())),
    }
}

fn build_report(args: VerifyArgs) -> VerifyReport {
    let actual = ColumnSnapshot::new(COLUMN, args.actual);
    let expected = ColumnSnapshot::new(COLUMN, args.expected);
    let mismatch = check_order(&actual, &expected).err().map(|e| e.to_string());

    VerifyReport {
        matches: mismatch.is_none(),
        mismatch,
        actual: actual.into_values(),
        expected: expected.into_values(),
    }
}

/// Result of an exact column comparison.
#[derive(Serialize)]
pub struct VerifyReport {
    pub matches: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mismatch: Option<String>,
    pub actual: Vec<String>,
    pub expected: Vec<String>,
}

impl Render for VerifyReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        if self.matches {
            writeln!(w, "Verify: {}", "MATCH".green().bold())?;
        } else {
            writeln!(w, "Verify: {}", "MISMATCH".red().bold())?;
        }
        writeln!(w, "  Actual:   {}", self.actual.join(", "))?;
        writeln!(w, "  Expected: {}", self.expected.join(", "))?;
        if let Some(reason) = &self.mismatch {
            writeln!(w, "  {}", reason.red())?;
        }
        Ok(())
    }
}
