//! Error types for pms-tracker.

use thiserror::Error;

/// Errors that can end a tracking session.
///
/// Malformed dates and integers typed at a prompt never show up here; the
/// prompt loops recover from them by asking again.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// Reading from or writing to the console failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input ended while a prompt was still waiting for an answer.
    #[error("input closed before the entry was complete")]
    InputClosed,

    /// A value fell outside its allowed range.
    #[error("{field} must be between {min} and {max}, got {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: i64,
        /// Inclusive lower bound.
        min: i64,
        /// Inclusive upper bound.
        max: i64,
    },

    /// A date lies outside what the report's date column can hold.
    #[error("date {0} is outside the supported range 1900-01-01 to 9999-12-31")]
    DateOutOfRange(String),

    /// The configuration file could not be read or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Writing the spreadsheet failed.
    #[error("Export failed: {0}")]
    Export(#[from] rust_xlsxwriter::XlsxError),

    /// Serializing output failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
