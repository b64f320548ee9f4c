//! Date parsing for log entries.
//!
//! Entry dates are accepted in a single fixed format. Unlike free-form date
//! input elsewhere, no relative words like `today` are recognised.

use chrono::{Datelike, NaiveDate};

/// The `chrono` format string every entry date must match.
pub const ENTRY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Earliest year a spreadsheet date cell can hold.
pub const MIN_ENTRY_YEAR: i32 = 1900;
/// Latest year a spreadsheet date cell can hold.
pub const MAX_ENTRY_YEAR: i32 = 9999;

/// Whether `date` can be stored in the report's date column.
#[must_use]
pub fn is_supported_date(date: NaiveDate) -> bool {
    (MIN_ENTRY_YEAR..=MAX_ENTRY_YEAR).contains(&date.year())
}

/// Parse an entry date in `YYYY-MM-DD` form.
///
/// Surrounding whitespace is ignored. Returns `None` for anything else,
/// including impossible calendar dates such as `2024-02-30`.
#[must_use]
pub fn parse_entry_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), ENTRY_DATE_FORMAT).ok()
}

/// Format a date as ISO 8601 (`YYYY-MM-DD`).
#[must_use]
pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ENTRY_DATE_FORMAT).to_string()
}
