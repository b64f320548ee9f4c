//! Configuration settings for pms-tracker.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::core::RatingScale;
use crate::error::TrackerError;
use crate::report::ChartRange;

/// File written when neither the config nor the command line names one.
pub const DEFAULT_OUTPUT_FILE: &str = "PMS_Tracking.xlsx";

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Bounds every severity rating must fall in.
    pub ratings: RatingScale,
    /// Spreadsheet report settings.
    pub report: ReportConfig,
}

/// Spreadsheet report settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ReportConfig {
    /// Where the workbook is written. Existing files are overwritten.
    #[serde(default = "default_output_file")]
    pub output_file: PathBuf,
    /// How many rows the mood chart covers.
    #[serde(default)]
    pub chart_range: ChartRange,
}

fn default_output_file() -> PathBuf {
    PathBuf::from(DEFAULT_OUTPUT_FILE)
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
            chart_range: ChartRange::default(),
        }
    }
}

impl Config {
    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, parsed, or
    /// holds an empty rating range.
    pub fn load_from_path(path: &Path) -> Result<Self, TrackerError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            TrackerError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            TrackerError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;

        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), TrackerError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| TrackerError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            TrackerError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Check that the settings are usable.
    ///
    /// # Errors
    ///
    /// Returns `TrackerError::Config` if the rating minimum exceeds the maximum.
    pub fn validate(&self) -> Result<(), TrackerError> {
        if !self.ratings.is_valid() {
            return Err(TrackerError::Config(format!(
                "ratings.min ({}) must not exceed ratings.max ({})",
                self.ratings.min, self.ratings.max
            )));
        }
        Ok(())
    }
}
