//! Workbook construction and saving.

use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use rust_xlsxwriter::{Chart, ChartType, ExcelDateTime, Format, Workbook, Worksheet};
use serde::Serialize;

use super::chart::{ChartRange, SeriesRange};
use crate::config::ReportConfig;
use crate::core::format_iso_date;
use crate::entry::{Cell, Column, Table};
use crate::error::TrackerError;

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Daily Log";

const DATE_NUM_FORMAT: &str = "yyyy-mm-dd";
const DATE_COLUMN_WIDTH: f64 = 15.0;
const CHART_TITLE: &str = "Mood Swings Over Time";
const CHART_SERIES: Column = Column::MoodSwings;
// K2
const CHART_ANCHOR: (u32, u16) = (1, 10);

/// What an export wrote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportSummary {
    pub path: PathBuf,
    pub entries: usize,
    pub chart_range: ChartRange,
    /// A1 reference of the chart's date axis.
    pub categories: String,
    /// A1 reference of the plotted mood values.
    pub values: String,
}

/// Renders a [`Table`] into an `.xlsx` workbook.
#[derive(Debug, Clone, Default)]
pub struct ReportExporter {
    config: ReportConfig,
}

impl ReportExporter {
    #[must_use]
    pub const fn new(config: ReportConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ReportConfig {
        &self.config
    }

    /// Write the report to the configured output file.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Export` if the workbook cannot be built or saved.
    pub fn export_default(&self, table: &Table) -> Result<ExportSummary, TrackerError> {
        let path = self.config.output_file.clone();
        self.export(table, &path)
    }

    /// Write the report to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Export` if the workbook cannot be built or saved.
    pub fn export(&self, table: &Table, path: &Path) -> Result<ExportSummary, TrackerError> {
        let mut workbook = self.build_workbook(table)?;
        workbook.save(path)?;

        let summary = self.summary(table, path);
        tracing::info!(
            path = %path.display(),
            entries = summary.entries,
            chart = %summary.values,
            "report written"
        );
        Ok(summary)
    }

    /// Build the report in memory and return the file bytes.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Export` if the workbook cannot be built.
    pub fn to_buffer(&self, table: &Table) -> Result<Vec<u8>, TrackerError> {
        let mut workbook = self.build_workbook(table)?;
        Ok(workbook.save_to_buffer()?)
    }

    /// Describe what [`Self::export`] writes for `table`.
    #[must_use]
    pub fn summary(&self, table: &Table, path: &Path) -> ExportSummary {
        let range = self.series_range(table);
        ExportSummary {
            path: path.to_path_buf(),
            entries: table.len(),
            chart_range: self.config.chart_range,
            categories: range.to_a1(SHEET_NAME, Column::Date.index()),
            values: range.to_a1(SHEET_NAME, CHART_SERIES.index()),
        }
    }

    fn series_range(&self, table: &Table) -> SeriesRange {
        SeriesRange::for_entries(self.config.chart_range, table.len())
    }

    fn build_workbook(&self, table: &Table) -> Result<Workbook, TrackerError> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();
        let date_format = Format::new().set_num_format(DATE_NUM_FORMAT);

        let worksheet = workbook.add_worksheet();
        worksheet.set_name(SHEET_NAME)?;

        for column in Column::ALL {
            worksheet.write_string_with_format(0, column.index(), column.header(), &header_format)?;
        }
        worksheet.set_column_width(Column::Date.index(), DATE_COLUMN_WIDTH)?;

        for (row_num, row) in (1u32..).zip(table.rows()) {
            for (column, cell) in Column::ALL.iter().zip(row) {
                write_cell(worksheet, row_num, column.index(), cell, &date_format)?;
            }
        }

        let chart = mood_chart(self.series_range(table));
        worksheet.insert_chart(CHART_ANCHOR.0, CHART_ANCHOR.1, &chart)?;

        Ok(workbook)
    }
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    cell: &Cell,
    date_format: &Format,
) -> Result<(), TrackerError> {
    match cell {
        Cell::Date(date) => {
            worksheet.write_datetime_with_format(row, col, &excel_date(*date)?, date_format)?;
        }
        Cell::Number(n) => {
            worksheet.write_number(row, col, f64::from(*n))?;
        }
        Cell::Text(Some(text)) => {
            worksheet.write_string(row, col, text.as_str())?;
        }
        Cell::Text(None) => {}
    }
    Ok(())
}

fn mood_chart(range: SeriesRange) -> Chart {
    let date_col = Column::Date.index();
    let value_col = CHART_SERIES.index();

    let mut chart = Chart::new(ChartType::Line);
    chart
        .add_series()
        .set_name(CHART_SERIES.header())
        .set_categories((SHEET_NAME, range.first_row, date_col, range.last_row, date_col))
        .set_values((SHEET_NAME, range.first_row, value_col, range.last_row, value_col));
    chart.title().set_name(CHART_TITLE);
    chart.x_axis().set_name(Column::Date.header());
    chart.y_axis().set_name("Severity");
    chart
}

/// Convert `date` for a spreadsheet date cell.
///
/// Years outside 1900..=9999 cannot be stored and are rejected.
fn excel_date(date: NaiveDate) -> Result<ExcelDateTime, TrackerError> {
    let out_of_range = || TrackerError::DateOutOfRange(format_iso_date(date));
    let year = u16::try_from(date.year()).map_err(|_| out_of_range())?;
    let month = u8::try_from(date.month()).map_err(|_| out_of_range())?;
    let day = u8::try_from(date.day()).map_err(|_| out_of_range())?;
    ExcelDateTime::from_ymd(year, month, day).map_err(|_| out_of_range())
}
