//! Output formatting for pms-tracker.
//!
//! Formats the end-of-session summary either for people or for scripts.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::entry::Entry;
use crate::error::TrackerError;
use crate::report::ExportSummary;

pub use json::format_summary_json;
pub use pretty::{format_entries_pretty, format_summary_pretty};

/// Format the export summary based on output format
///
/// # Errors
///
/// Returns `TrackerError::Parse` if JSON serialization fails.
pub fn format_summary(
    summary: &ExportSummary,
    entries: &[Entry],
    format: OutputFormat,
) -> Result<String, TrackerError> {
    match format {
        OutputFormat::Pretty => Ok(format_summary_pretty(summary, entries)),
        OutputFormat::Json => format_summary_json(summary, entries),
    }
}
