//! Insights configuration
//!
//! Window lengths, thresholds, chart layouts and export formats, read from
//! `insights.yaml` in the app data directory. A missing or unreadable file
//! falls back to the built-in defaults.

use chrono::{FixedOffset, Offset, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::analytics::{DashboardConfig, StatsConfig};
use crate::charts::ChartConfig;
use crate::error::InsightsError;
use crate::export::ExportFormat;

/// Config file name
const CONFIG_FILENAME: &str = "insights.yaml";

/// Largest accepted display offset (±18h, chrono's limit is just under 24h)
const MAX_OFFSET_MINUTES: i32 = 18 * 60;

/// Time zone used for hour-of-day charts and exported timestamps
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DisplayConfig {
    /// Offset from UTC in minutes (e.g. 330 for UTC+05:30)
    pub utc_offset_minutes: i32,
}

impl DisplayConfig {
    /// Offset as a chrono `FixedOffset`, UTC if out of range
    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_minutes * 60).unwrap_or_else(|| Utc.fix())
    }
}

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct InsightsConfig {
    pub stats: StatsConfig,
    pub dashboard: DashboardConfig,
    pub charts: ChartConfig,
    pub export: ExportFormat,
    pub display: DisplayConfig,
}

impl InsightsConfig {
    /// Loads the config from the config directory
    ///
    /// # Arguments
    /// * `config_dir` - Config directory (app_data_dir)
    ///
    /// # Returns
    /// The stored config, or defaults if the file is missing or invalid
    pub fn load(config_dir: &Path) -> Self {
        let config_path = config_dir.join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Self::default();
        }

        let loaded = fs::read_to_string(&config_path)
            .map_err(InsightsError::from)
            .and_then(|content| Self::from_yaml(&content));

        match loaded {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(
                    "[config] ignoring {}: {}",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Parses and validates YAML content
    pub fn from_yaml(content: &str) -> Result<Self, InsightsError> {
        let config: Self = serde_yaml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves the config to the config directory
    ///
    /// # Arguments
    /// * `config_dir` - Config directory (app_data_dir)
    pub fn save(&self, config_dir: &Path) -> Result<(), InsightsError> {
        self.validate()?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_yaml::to_string(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        tracing::debug!("[config] saved to {}", config_dir.display());
        Ok(())
    }

    /// Full path of the config file
    pub fn get_config_path(config_dir: &Path) -> PathBuf {
        config_dir.join(CONFIG_FILENAME)
    }

    /// Rejects values the calculators would silently degrade on
    pub fn validate(&self) -> Result<(), InsightsError> {
        if self.stats.window_minutes == 0 {
            return Err(InsightsError::invalid_config("stats.window_minutes must be > 0"));
        }
        if self.stats.bucket_count == 0 {
            return Err(InsightsError::invalid_config("stats.bucket_count must be > 0"));
        }
        if self.stats.confidence_bucket_count == 0 {
            return Err(InsightsError::invalid_config(
                "stats.confidence_bucket_count must be > 0",
            ));
        }
        if self.dashboard.rate_window_minutes == 0 || self.dashboard.sparkline_buckets == 0 {
            return Err(InsightsError::invalid_config(
                "dashboard rate window and sparkline buckets must be > 0",
            ));
        }
        if self.charts.timeline.bins == 0 {
            return Err(InsightsError::invalid_config("charts.timeline.bins must be > 0"));
        }
        if !(0.0..1.0).contains(&self.charts.donut.inner_ratio) {
            return Err(InsightsError::invalid_config(
                "charts.donut.inner_ratio must be in [0, 1)",
            ));
        }
        if self.display.utc_offset_minutes.abs() > MAX_OFFSET_MINUTES {
            return Err(InsightsError::invalid_config(format!(
                "display.utc_offset_minutes must be within ±{}",
                MAX_OFFSET_MINUTES
            )));
        }

        self.export.validate()
    }
}

#[cfg(test)]
mod config_tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = InsightsConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.stats.window_minutes, 30);
        assert_eq!(config.charts.stacked.top_categories, 4);
        assert_eq!(config.display.offset(), Utc.fix());
    }

    #[test]
    fn test_load_nonexistent_config() {
        let dir = tempdir().unwrap();
        let config = InsightsConfig::load(dir.path());
        assert_eq!(config, InsightsConfig::default());
    }

    #[test]
    fn test_save_and_load_config() {
        let dir = tempdir().unwrap();
        let mut config = InsightsConfig::default();
        config.stats.window_minutes = 60;
        config.display.utc_offset_minutes = 330;

        config.save(dir.path()).unwrap();

        let loaded = InsightsConfig::load(dir.path());
        assert_eq!(loaded.stats.window_minutes, 60);
        assert_eq!(loaded.display.offset(), FixedOffset::east_opt(330 * 60).unwrap());
    }

    #[test]
    fn test_save_creates_directory() {
        let dir = tempdir().unwrap();
        let nested = dir.path().join("a").join("b");

        InsightsConfig::default().save(&nested).unwrap();
        assert!(InsightsConfig::get_config_path(&nested).exists());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = InsightsConfig::from_yaml("stats:\n  rarity_threshold: 5\n").unwrap();
        assert_eq!(config.stats.rarity_threshold, 5);
        assert_eq!(config.stats.confidence_sample_limit, 200);
        assert_eq!(config.charts.donut.legend_limit, 5);
    }

    #[test]
    fn test_invalid_yaml_falls_back_to_default() {
        let dir = tempdir().unwrap();
        fs::write(
            InsightsConfig::get_config_path(dir.path()),
            "stats: [this is not a map",
        )
        .unwrap();

        let config = InsightsConfig::load(dir.path());
        assert_eq!(config, InsightsConfig::default());
    }

    #[test]
    fn test_validate_rejects_zero_window() {
        let err = InsightsConfig::from_yaml("stats:\n  window_minutes: 0\n").unwrap_err();
        assert_eq!(err.code(), "INVALID_CONFIG");
    }

    #[test]
    fn test_validate_rejects_bad_format() {
        let mut config = InsightsConfig::default();
        config.export.time_format = "%Q".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_bad_offset() {
        let mut config = InsightsConfig::default();
        config.display.utc_offset_minutes = 20 * 60;
        assert!(config.validate().is_err());

        let dir = tempdir().unwrap();
        assert!(config.save(dir.path()).is_err());
    }
}
