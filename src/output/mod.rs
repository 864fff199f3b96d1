//! Output formatting for analysis results.
//!
//! This module renders a [`Report`] as text:
//! - [`terminal`] - colored table
//! - [`csv`] - quoted CSV rows
//! - [`json`] - pretty JSON

mod csv;
mod json;
mod terminal;

use crate::processing::Report;
use clap::ValueEnum;

pub use csv::{csv_field, format_csv};
pub use json::format_json;
pub use terminal::{
    copper_bar, format_error, format_header, format_prompt, format_report, format_row,
    DEFAULT_WIDTH, MAX_WIDTH,
};

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Colored table for humans
    #[default]
    Table,
    /// Quoted CSV rows
    Csv,
    /// JSON document for machine parsing
    Json,
}

/// Render a report in the chosen format.
pub fn render(
    report: &Report,
    format: OutputFormat,
    width: usize,
) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Table => Ok(format_report(report, width)),
        OutputFormat::Csv => Ok(format_csv(report)),
        OutputFormat::Json => format_json(report),
    }
}
