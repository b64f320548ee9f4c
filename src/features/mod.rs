//! Feature implementations for pms-tracker.
//!
//! - Interactive entry collection

pub mod collect;
