//! Rendering of command results.
//!
//! Every command builds a serializable report and hands it to [`OutputWriter`],
//! which prints either the report's text form or pretty JSON. Command handlers
//! never branch on `--output` themselves.

use std::io::Write;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Writes command reports in the format chosen with `--output`.
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(format: OutputFormat) -> Self {
        if format == OutputFormat::Json {
            // no ANSI escapes in JSON output
            colored::control::set_override(false);
        }
        Self { format }
    }

    /// Prints `report` to stdout.
    pub fn render<R: Render + Serialize>(&self, report: &R) -> Result<(), CliError> {
        let mut stdout = std::io::stdout().lock();
        self.render_to(report, &mut stdout)?;
        stdout.flush()?;
        Ok(())
    }

    /// Prints `report` to `out`.
    pub fn render_to<R: Render + Serialize>(
        &self,
        report: &R,
        out: &mut dyn Write,
    ) -> Result<(), CliError> {
        if self.format == OutputFormat::Json {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        } else {
            report.render_text(out)?;
        }
        Ok(())
    }
}

/// Human-readable form of a report.
pub trait Render {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct StepLine {
        test_identifier: &'static str,
        passed: bool,
    }

    impl Render for StepLine {
        fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
            let mark = if self.passed { "ok" } else { "FAILED" };
            writeln!(w, "{} ... {}", self.test_identifier, mark)
        }
    }

    fn render(format: OutputFormat, line: &StepLine) -> String {
        let mut buffer = Vec::new();
        OutputWriter::new(format)
            .render_to(line, &mut buffer)
            .expect("rendering should succeed");
        String::from_utf8(buffer).expect("valid UTF-8")
    }

    #[test]
    fn test_text_uses_render_impl() {
        let line = StepLine {
            test_identifier: "sortByDateDesc",
            passed: false,
        };
        assert_eq!(render(OutputFormat::Text, &line), "sortByDateDesc ... FAILED\n");
    }

    #[test]
    fn test_json_is_pretty_and_parseable() {
        let line = StepLine {
            test_identifier: "goToNextPage",
            passed: true,
        };
        let output = render(OutputFormat::Json, &line);

        assert!(output.lines().count() > 1, "pretty JSON spans several lines");
        let parsed: serde_json::Value = serde_json::from_str(&output).expect("valid JSON");
        assert_eq!(parsed["test_identifier"], "goToNextPage");
        assert_eq!(parsed["passed"], true);
    }
}
