//! Terminal output with colors.
//!
//! Labels are yellow, values green, binary digits magenta. The header sits
//! between two gradient bars.

use crate::processing::{Report, ReportRow};
use colored::Colorize;

/// Default line width of the table.
pub const DEFAULT_WIDTH: usize = 80;
/// Widest table the gradient bars are drawn for.
pub const MAX_WIDTH: usize = 1000;

const LABEL_WIDTH: usize = 20;
const VALUE_WIDTH: usize = 20;
const MAX_COLOR: usize = 255;

/// A full-width bar shading from green to red, with blue peaking at the edges.
///
/// Widths are clamped to `1..=MAX_WIDTH`.
pub fn copper_bar(width: usize) -> String {
    let width = width.clamp(1, MAX_WIDTH);
    (0..width)
        .map(|i| {
            let r = (i * MAX_COLOR / width).min(MAX_COLOR);
            let g = ((width - i) * MAX_COLOR / width).min(MAX_COLOR);
            let b = (width / 2).abs_diff(i) * 2 * MAX_COLOR / width;
            "█"
                .truecolor(r as u8, g as u8, b.min(MAX_COLOR) as u8)
                .to_string()
        })
        .collect()
}

/// Centered bold header between two bars.
pub fn format_header(text: &str, width: usize) -> String {
    format!(
        "{bar}\n{title}\n{bar}",
        bar = copper_bar(width),
        title = format!("{text:^width$}").bold().white()
    )
}

/// Format a row as a left-aligned label, the value, and binary digits if any.
///
/// # Arguments
/// * `row` - The row to format
///
/// # Returns
/// A single line, without trailing newline
pub fn format_row(row: &ReportRow) -> String {
    let label = format!("{:<LABEL_WIDTH$}", row.label).yellow();
    match &row.binary {
        Some(binary) => format!(
            "{label}{value}{binary}",
            value = format!("{:<VALUE_WIDTH$}", row.value).green(),
            binary = binary.magenta()
        ),
        None => format!("{label}{value}", value = row.value.green()),
    }
}

/// The whole result table.
pub fn format_report(report: &Report, width: usize) -> String {
    let mut lines = vec![format_header("IP Analysis Results", width)];
    lines.extend(report.rows().iter().map(format_row));
    lines.push(copper_bar(width));
    lines.join("\n")
}

pub fn format_prompt() -> String {
    "Enter IP address with CIDR (e.g., 192.168.0.1/24): "
        .cyan()
        .bold()
        .to_string()
}

pub fn format_error(message: &str) -> String {
    format!("Error: {message}").red().bold().to_string()
}
