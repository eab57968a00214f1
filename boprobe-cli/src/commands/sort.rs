//! `boprobe sort` command handler

use std::io::Write;

use serde::Serialize;

use boprobe_core::sort::expected_for;
use boprobe_core::types::{ColumnSnapshot, SortDirection, SortSpec, ValueKind};

use crate::cli::SortArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Column key used for ad-hoc value lists.
const COLUMN: &str = "values";

/// Execute the `sort` command.
pub fn execute(args: SortArgs, writer: &OutputWriter) -> Result<(), CliError> {
    let report = build_report(args);
    writer.render(&report)
}

fn build_report(args: SortArgs) -> SortReport {
    let direction = if args.desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    let spec = if args.numeric {
        SortSpec::numeric(COLUMN, direction)
    } else {
        SortSpec::string(COLUMN, direction)
    };

    let snapshot = ColumnSnapshot::new(COLUMN, args.values);
    let expected = expected_for(&snapshot, &spec);

    SortReport {
        direction: spec.direction,
        value_kind: spec.value_kind,
        input: snapshot.into_values(),
        expected: expected.into_values(),
    }
}

/// Expected order of a value list.
#[derive(Serialize)]
pub struct SortReport {
    pub direction: SortDirection,
    pub value_kind: ValueKind,
    pub input: Vec<String>,
    pub expected: Vec<String>,
}

impl Render for SortReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(w, "Sort: {} ({})", self.direction.as_str().bold(), self.value_kind)?;
        writeln!(w, "  Input:    {}", self.input.join(", "))?;
        writeln!(w, "  Expected: {}", self.expected.join(", ").green())?;
        Ok(())
    }
}
