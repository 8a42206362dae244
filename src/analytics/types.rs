//! Analytics type definitions
//!
//! Contains the derived aggregates shown on the history and home screens
//! and the tuning constants used to compute them.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::models::SoundType;

/// Legacy numeric stand-in for an unbounded surge
pub const SURGE_UNBOUNDED_SENTINEL: i64 = 999;

/// Relative change in detection rate between the recent sub-window and
/// the baseline before it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Surge {
    /// Signed percentage change
    Percent(i64),
    /// Baseline was empty while recent activity was not
    Unbounded,
}

impl Default for Surge {
    fn default() -> Self {
        Surge::Percent(0)
    }
}

impl Surge {
    /// Numeric form used by older clients (999 for unbounded)
    pub fn legacy_value(&self) -> i64 {
        match self {
            Surge::Percent(p) => *p,
            Surge::Unbounded => SURGE_UNBOUNDED_SENTINEL,
        }
    }

    /// True when the change exceeds `threshold_percent` (alert coloring)
    pub fn exceeds(&self, threshold_percent: i64) -> bool {
        match self {
            Surge::Percent(p) => *p > threshold_percent,
            Surge::Unbounded => true,
        }
    }
}

impl fmt::Display for Surge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Surge::Percent(p) => write!(f, "{}%", p),
            Surge::Unbounded => write!(f, "New"),
        }
    }
}

/// Tuning for the advanced statistics panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct StatsConfig {
    /// Trailing window for rate series and entropy
    pub window_minutes: u32,

    /// Number of buckets across the window
    pub bucket_count: usize,

    /// Trailing buckets treated as "recent" for surge detection
    pub surge_recent_buckets: usize,

    /// Categories seen at most this many times are rare
    pub rarity_threshold: u32,

    /// Number of equal-width confidence buckets
    pub confidence_bucket_count: usize,

    /// Most recent records considered for confidence buckets
    pub confidence_sample_limit: usize,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            window_minutes: 30,
            bucket_count: 30,
            surge_recent_buckets: 5,
            rarity_threshold: 2,
            confidence_bucket_count: 5,
            confidence_sample_limit: 200,
        }
    }
}

/// Derived aggregate for the history screen's advanced panel
///
/// Recomputed from scratch on every request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct AdvancedStats {
    /// Per-bucket counts, oldest first
    pub rate_series: Vec<u32>,

    /// Shannon entropy (bits) of categories within the window
    pub entropy: f64,

    /// Distinct categories at or below the rarity threshold (lifetime)
    pub rare_count: u32,

    /// Counts per equal-width confidence range
    pub confidence_buckets: Vec<u32>,

    /// Recent vs baseline rate change
    pub surge: Surge,

    /// Records inside the entropy window
    pub window_detections: u32,
}

impl Default for AdvancedStats {
    fn default() -> Self {
        Self {
            rate_series: Vec::new(),
            entropy: 0.0,
            rare_count: 0,
            confidence_buckets: Vec::new(),
            surge: Surge::default(),
            window_detections: 0,
        }
    }
}

/// Headline numbers for the history screen and the shared summary
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HistoryStats {
    pub total_detections: u32,

    /// Mean confidence in [0, 1], 0 when empty
    pub avg_confidence: f64,

    /// Most frequent category, None when empty
    pub most_common: Option<SoundType>,
}

impl Default for HistoryStats {
    fn default() -> Self {
        Self {
            total_detections: 0,
            avg_confidence: 0.0,
            most_common: None,
        }
    }
}

/// Home dashboard summary
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DashboardStats {
    /// Detections on the same calendar day as now
    pub today_detections: u32,

    /// Detections in the trailing 7 days
    pub weekly_detections: u32,

    pub most_common: Option<SoundType>,

    /// Rounded mean confidence percent
    pub accuracy_percent: u32,
}

/// Tuning for the home dashboard cards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DashboardConfig {
    /// Window for the detections-per-minute figure and sparkline
    pub rate_window_minutes: u32,

    /// Sparkline bar count
    pub sparkline_buckets: usize,

    /// Recent records averaged for the confidence trend
    pub confidence_trend_sample: usize,

    /// Entries in the top sounds card
    pub top_sounds_limit: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            rate_window_minutes: 5,
            sparkline_buckets: 12,
            confidence_trend_sample: 10,
            top_sounds_limit: 3,
        }
    }
}

/// Short-window activity bars on the dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Sparkline {
    /// Counts per bucket, oldest first
    pub counts: Vec<u32>,

    /// Bar heights in points, `min(36, 4 + 8 * count)`
    pub bar_heights: Vec<f64>,
}

/// Category with its occurrence count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CategoryCount {
    pub sound_type: SoundType,
    pub count: u32,
}
