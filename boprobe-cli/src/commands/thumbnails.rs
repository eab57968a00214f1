//! `boprobe thumbnails` command handler

use std::io::Write;

use serde::Serialize;
use tracing::info;

use boprobe_core::finder::find_menu_thumbnails;

use crate::cli::ThumbnailsArgs;
use crate::error::CliError;
use crate::output::{OutputWriter, Render};

/// Execute the `thumbnails` command.
pub fn execute(args: ThumbnailsArgs, writer: &OutputWriter) -> Result<(), CliError> {
    info!(dir = %args.dir.display(), category_id = args.category_id, "searching menu thumbnails");

    let files = find_menu_thumbnails(&args.dir, args.category_id)?
        .into_iter()
        .map(|p| p.display().to_string())
        .collect();

    writer.render(&ThumbnailsReport {
        dir: args.dir.display().to_string(),
        category_id: args.category_id,
        files,
    })
}

/// Menu thumbnails found for a category.
#[derive(Serialize)]
pub struct ThumbnailsReport {
    pub dir: String,
    pub category_id: u32,
    pub files: Vec<String>,
}

impl Render for ThumbnailsReport {
    fn render_text(&self, w: &mut dyn Write) -> std::io::Result<()> {
        use colored::Colorize;

        writeln!(
            w,
            "Menu thumbnails for category {} in {}",
            self.category_id.to_string().bold(),
            self.dir
        )?;
        if self.files.is_empty() {
            writeln!(w, "  {}", "(none)".dimmed())?;
        }
        for file in &self.files {
            writeln!(w, "  {}", file)?;
        }
        Ok(())
    }
}
