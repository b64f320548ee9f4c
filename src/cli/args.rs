use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::report::ChartRange;

#[derive(Parser, Debug)]
#[command(name = "pms-tracker")]
#[command(about = "Log daily PMS symptoms and export them to a spreadsheet with a chart")]
#[command(long_about = "pms-tracker - an interactive PMS symptom logger

Asks for one entry per day: the date, the day of your cycle, severity
ratings (0-5 by default) for mood swings, cramps, bloating, headaches, fatigue and
stress, plus optional notes. When you are done it writes a spreadsheet
with a 'Daily Log' sheet and a chart of mood swings over time.

QUICK START:
  pms-tracker                       Ask how many days, then log them
  pms-tracker --days 3              Log three days
  pms-tracker -o cycle.xlsx         Write to a different file

Blank answers to ratings count as 0. Invalid answers are asked again.")]
#[command(version)]
pub struct Cli {
    /// Spreadsheet to write (overwritten if it exists)
    ///
    /// Defaults to the config's `report.output_file`, which is
    /// PMS_Tracking.xlsx in the current directory.
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Number of days to log; asked interactively when omitted
    #[arg(short = 'n', long, value_name = "N")]
    pub days: Option<u32>,

    /// YAML configuration file
    ///
    /// Sets the rating scale and report defaults. Without it the built-in
    /// defaults are used.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Rows covered by the mood chart
    ///
    /// 'dynamic' follows the number of entries; 'fixed' always covers
    /// spreadsheet rows 2-91.
    #[arg(long, value_enum)]
    pub chart_range: Option<ChartRange>,

    /// Format of the summary printed after export
    #[arg(short, long, value_enum, default_value = "pretty")]
    pub format: OutputFormat,

    /// Log debug information to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Apply command-line overrides on top of a loaded config.
    #[must_use]
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(output) = &self.output {
            config.report.output_file.clone_from(output);
        }
        if let Some(range) = self.chart_range {
            config.report.chart_range = range;
        }
        config
    }
}

/// Output format for the session summary.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}
