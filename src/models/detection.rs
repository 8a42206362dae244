//! Detection record model
//!
//! A `DetectionRecord` is one timestamped, categorized, confidence-scored
//! sound-classification event. Records are produced and persisted by the
//! detection subsystem; this crate only reads them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::InsightsError;
use crate::utils::round_half_up;

/// Sound category label, e.g. `dog_barking_speech`.
///
/// Kept as a String so labels outside the canonical vocabulary (new model
/// versions) still aggregate as their own category.
pub type SoundType = String;

/// One sound-classification event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRecord {
    /// Stable unique identifier
    pub id: String,

    /// Category label
    pub sound_type: SoundType,

    /// Model probability in [0, 1]
    pub confidence: f64,

    /// Clip duration in seconds
    #[serde(default)]
    pub duration: f64,

    /// When the detection happened
    pub timestamp: DateTime<Utc>,
}

impl DetectionRecord {
    /// Creates a record with a fresh v4 id
    pub fn new(
        sound_type: impl Into<SoundType>,
        confidence: f64,
        duration: f64,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            sound_type: sound_type.into(),
            confidence,
            duration,
            timestamp,
        }
    }

    /// Confidence as a rounded integer percentage, clamped to [0, 100].
    ///
    /// NaN is reported as 0.
    pub fn confidence_percent(&self) -> u32 {
        confidence_to_percent(self.confidence)
    }

    /// Display label for the category (`dog_barking_speech` -> `dog barking speech`)
    pub fn display_label(&self) -> String {
        humanize_sound_type(&self.sound_type)
    }

    /// Milliseconds elapsed between the detection and `now`.
    ///
    /// Negative when the record lies in the future (clock skew).
    pub fn age_ms(&self, now: DateTime<Utc>) -> i64 {
        (now - self.timestamp).num_milliseconds()
    }
}

/// Converts a [0, 1] confidence into a rounded integer percentage
pub fn confidence_to_percent(confidence: f64) -> u32 {
    if confidence.is_nan() {
        return 0;
    }
    round_half_up(confidence * 100.0).clamp(0.0, 100.0) as u32
}

/// Replaces underscores with spaces for display
pub fn humanize_sound_type(sound_type: &str) -> String {
    sound_type.replace('_', " ")
}

/// Confidence tier used to color detections in lists
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfidenceTier {
    /// >= 0.8, rendered with the success color
    High,
    /// >= 0.6, rendered with the warning color
    Medium,
    /// Everything else, rendered with the error color
    Low,
}

impl ConfidenceTier {
    /// High confidence threshold
    pub const HIGH_THRESHOLD: f64 = 0.8;
    /// Medium confidence threshold
    pub const MEDIUM_THRESHOLD: f64 = 0.6;

    /// Classifies a confidence value
    pub fn from_confidence(confidence: f64) -> Self {
        if confidence >= Self::HIGH_THRESHOLD {
            Self::High
        } else if confidence >= Self::MEDIUM_THRESHOLD {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// Parses the persisted detection history (a JSON array of records)
pub fn load_history_json(json: &str) -> Result<Vec<DetectionRecord>, InsightsError> {
    let records: Vec<DetectionRecord> = serde_json::from_str(json)?;
    tracing::debug!("[history] loaded {} detection records", records.len());
    Ok(records)
}
