//! Command-line interface for pms-tracker.

pub mod args;
