//! CSV output formatting for analysis results.

use crate::processing::{Report, ReportRow};

/// Quote a CSV field, doubling any embedded double quotes.
pub fn csv_field<T: ToString>(value: T) -> String {
    let escaped = value.to_string().replace('"', "\"\"");
    format!("\"{escaped}\"")
}

fn csv_row(row: &ReportRow) -> String {
    [
        csv_field(row.label),
        csv_field(&row.value),
        csv_field(row.binary.as_deref().unwrap_or("")),
    ]
    .join(",")
}

/// Header plus one `"field","value","binary"` line per row.
pub fn format_csv(report: &Report) -> String {
    let mut lines = vec![r#""field","value","binary""#.to_string()];
    lines.extend(report.rows().iter().map(csv_row));
    lines.join("\n")
}
