//! Rows covered by the mood chart.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Last worksheet row (zero-based) covered by [`ChartRange::Fixed`], which
/// is spreadsheet row 91.
pub const FIXED_LAST_ROW: u32 = 90;

/// First data row (zero-based). Row 0 holds the header.
const FIRST_DATA_ROW: u32 = 1;

/// How the chart's series range is chosen.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartRange {
    /// Cover exactly the rows that hold entries.
    #[default]
    Dynamic,
    /// Always cover spreadsheet rows 2 to 91, whatever the entry count.
    Fixed,
}

impl std::fmt::Display for ChartRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dynamic => write!(f, "dynamic"),
            Self::Fixed => write!(f, "fixed"),
        }
    }
}

/// Inclusive, zero-based row span of a chart series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesRange {
    pub first_row: u32,
    pub last_row: u32,
}

impl SeriesRange {
    /// Series span for a table with `entries` data rows.
    ///
    /// A dynamic range over zero entries still points at the first data
    /// row, which is empty, so the chart stays valid.
    #[must_use]
    pub fn for_entries(mode: ChartRange, entries: usize) -> Self {
        let last_row = match mode {
            ChartRange::Fixed => FIXED_LAST_ROW,
            ChartRange::Dynamic => u32::try_from(entries)
                .unwrap_or(u32::MAX)
                .max(FIRST_DATA_ROW),
        };
        Self {
            first_row: FIRST_DATA_ROW,
            last_row,
        }
    }

    /// Number of rows in the span.
    #[must_use]
    pub const fn row_count(&self) -> u32 {
        self.last_row - self.first_row + 1
    }

    /// Absolute A1 reference for `col` on `sheet`, e.g. `'Daily Log'!$A$2:$A$91`.
    ///
    /// A single-row span is written as one cell, `'Daily Log'!$A$2`.
    #[must_use]
    pub fn to_a1(&self, sheet: &str, col: u16) -> String {
        let name = column_name(col);
        let sheet = quote_sheet(sheet);
        if self.first_row == self.last_row {
            format!("{sheet}!${name}${}", self.first_row + 1)
        } else {
            format!(
                "{sheet}!${name}${}:${name}${}",
                self.first_row + 1,
                self.last_row + 1
            )
        }
    }
}

/// Spreadsheet letters for a zero-based column index (`0` is `A`, `26` is `AA`).
#[must_use]
pub fn column_name(col: u16) -> String {
    let mut n = u32::from(col) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from_u32('A' as u32 + rem).unwrap_or('A'));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

fn quote_sheet(sheet: &str) -> String {
    if sheet.chars().all(char::is_alphanumeric) {
        sheet.to_string()
    } else {
        format!("'{}'", sheet.replace('\'', "''"))
    }
}
