//! JSON output formatting for pms-tracker.

use serde_json::json;

use crate::entry::Entry;
use crate::error::TrackerError;
use crate::report::ExportSummary;

/// Format the export summary and its entries as JSON
///
/// # Errors
///
/// Returns `TrackerError::Parse` if JSON serialization fails.
pub fn format_summary_json(
    summary: &ExportSummary,
    entries: &[Entry],
) -> Result<String, TrackerError> {
    let output = json!({
        "report": summary,
        "count": entries.len(),
        "items": entries
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
