mod json;
mod markdown;
mod summary;

pub use json::write_report;
pub use markdown::{render_markdown, write_markdown};
pub use summary::{format_summary, print_summary};

use crate::report::Report;
use anyhow::Result;
use clap::ValueEnum;
use std::path::Path;

/// Report file format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Markdown,
    Json,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Markdown => "md",
            OutputFormat::Json => "json",
        }
    }

    /// Write `report` to `path` in this format
    pub fn write(&self, report: &Report, path: &Path) -> Result<()> {
        match self {
            OutputFormat::Markdown => write_markdown(report, path),
            OutputFormat::Json => write_report(report, path),
        }
    }
}

/// Report file name for a repository path, e.g. `report_src_Main.java.md`
pub fn report_file_name(source_path: &str, format: OutputFormat) -> String {
    format!(
        "report_{}.{}",
        source_path.replace('/', "_"),
        format.extension()
    )
}
