//! Core abstractions for pms-tracker.
//!
//! Shared date handling and the rating scale used across features.

mod datetime;
mod scale;

pub use datetime::{
    format_iso_date, is_supported_date, parse_entry_date, ENTRY_DATE_FORMAT, MAX_ENTRY_YEAR,
    MIN_ENTRY_YEAR,
};
pub use scale::{RatingScale, DEFAULT_MAX_RATING, DEFAULT_MIN_RATING};
