//! Spreadsheet export of a tracking session.
//!
//! One sheet, "Daily Log", holds the table. A line chart of mood swings over
//! time sits beside it.

mod chart;
mod exporter;

pub use chart::{column_name, ChartRange, SeriesRange, FIXED_LAST_ROW};
pub use exporter::{ExportSummary, ReportExporter, SHEET_NAME};
