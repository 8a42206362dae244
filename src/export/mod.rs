//! Export formatters for the history screen
//!
//! Build the CSV file and the shareable text summary. Writing files and
//! opening the share sheet is done by the platform layer.

mod csv_export;
mod summary;

pub use csv_export::{csv_file_name, to_csv, CSV_HEADER};
pub use summary::{summary_file_name, to_summary_text};

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::InsightsError;

/// Timestamp formats used in exported text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ExportFormat {
    /// chrono format for the CSV date column and summary header
    pub date_format: String,
    /// chrono format for the CSV time column
    pub time_format: String,
    /// chrono format for timestamps in the summary
    pub datetime_format: String,
    /// Detections listed in the summary
    pub recent_limit: usize,
}

impl Default for ExportFormat {
    fn default() -> Self {
        Self {
            date_format: "%Y-%m-%d".to_string(),
            time_format: "%H:%M:%S".to_string(),
            datetime_format: "%Y-%m-%d %H:%M:%S".to_string(),
            recent_limit: 5,
        }
    }
}

impl ExportFormat {
    /// Rejects patterns chrono cannot format
    pub fn validate(&self) -> Result<(), InsightsError> {
        check_strftime("export.date_format", &self.date_format)?;
        check_strftime("export.time_format", &self.time_format)?;
        check_strftime("export.datetime_format", &self.datetime_format)
    }
}

/// Fails on patterns containing an unknown or malformed specifier
fn check_strftime(name: &str, pattern: &str) -> Result<(), InsightsError> {
    if StrftimeItems::new(pattern).any(|item| matches!(item, Item::Error)) {
        return Err(InsightsError::invalid_config(format!(
            "{} is not a valid strftime pattern: {}",
            name, pattern
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests;
