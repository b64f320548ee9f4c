//! pms-tracker - an interactive PMS symptom logger
//!
//! Collects one validated entry per day from the console and exports the
//! session as an `.xlsx` report with a mood-swings chart.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod entry;
pub mod error;
pub mod features;
pub mod output;
pub mod report;

pub use cli::args::{Cli, OutputFormat};
pub use entry::{Entry, Table};
pub use error::TrackerError;
pub use features::collect::{EntryCollector, Prompter};
pub use report::{ChartRange, ExportSummary, ReportExporter};
