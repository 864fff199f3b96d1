//! JSON output of analysis results.

use crate::processing::Report;

/// Pretty-printed JSON document for a report.
pub fn format_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}
