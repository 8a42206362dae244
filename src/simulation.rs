//! Simulated live preview for the home dashboard
//!
//! When there is nothing to show, the dashboard cycles through the model
//! classes with a made-up confidence so the card does not look dead. The
//! values are deliberately a different type from `DetectionRecord`: they
//! cannot reach the statistics, charts or exports.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;

use crate::analytics::calculator::filter_by_sound_type;
use crate::models::{humanize_sound_type, DetectionRecord, MODEL_CLASSES};
use crate::utils::round_half_up;

/// Confidence shown before the first tick
const INITIAL_CONFIDENCE: f64 = 0.72;
const CONFIDENCE_MIN: f64 = 0.45;
const CONFIDENCE_SPAN: f64 = 0.5;

/// Fake detection for display only
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SimulatedPreview {
    pub sound_type: &'static str,
    /// Two decimals in [0.45, 0.95]
    pub confidence: f64,
    /// Always true, lets the UI badge the card
    pub simulated: bool,
}

impl SimulatedPreview {
    /// `dog barking speech` / `72% confidence`
    pub fn caption(&self) -> (String, String) {
        (
            humanize_sound_type(self.sound_type),
            format!("{}% confidence", round_half_up(self.confidence * 100.0)),
        )
    }
}

/// Cycles through the vocabulary producing previews
pub struct SimulatedPreviewSource<R: Rng> {
    rng: R,
    index: usize,
    confidence: f64,
}

impl SimulatedPreviewSource<StdRng> {
    /// Source seeded from the OS
    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }

    /// Deterministic source
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SimulatedPreviewSource<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng,
            index: 0,
            confidence: INITIAL_CONFIDENCE,
        }
    }

    /// Preview currently on screen
    pub fn current(&self) -> SimulatedPreview {
        SimulatedPreview {
            sound_type: MODEL_CLASSES[self.index],
            confidence: self.confidence,
            simulated: true,
        }
    }

    /// Advances to the next class with a fresh confidence
    pub fn tick(&mut self) -> SimulatedPreview {
        self.index = (self.index + 1) % MODEL_CLASSES.len();
        let raw = CONFIDENCE_MIN + self.rng.gen::<f64>() * CONFIDENCE_SPAN;
        self.confidence = round_half_up(raw * 100.0) / 100.0;
        self.current()
    }
}

/// True when the dashboard has no real detection to show for the current
/// class filter
pub fn preview_needed(records: &[DetectionRecord], selected_class: Option<&str>) -> bool {
    filter_by_sound_type(records, selected_class).is_empty()
}
