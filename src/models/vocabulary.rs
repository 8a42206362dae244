//! Canonical sound-class vocabulary of the on-device model
//!
//! Twelve sound sources, each with a `_no_speech` and `_speech` variant.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Known sound class constants
pub mod sound_classes {
    pub const APPLAUSE_NO_SPEECH: &str = "applause_no_speech";
    pub const APPLAUSE_SPEECH: &str = "applause_speech";
    pub const CAT_MEOWING_NO_SPEECH: &str = "cat_meowing_no_speech";
    pub const CAT_MEOWING_SPEECH: &str = "cat_meowing_speech";
    pub const COUGH_NO_SPEECH: &str = "cough_no_speech";
    pub const COUGH_SPEECH: &str = "cough_speech";
    pub const CRYING_NO_SPEECH: &str = "crying_no_speech";
    pub const CRYING_SPEECH: &str = "crying_speech";
    pub const DISHES_POT_PAN_NO_SPEECH: &str = "dishes_pot_pan_no_speech";
    pub const DISHES_POT_PAN_SPEECH: &str = "dishes_pot_pan_speech";
    pub const DOG_BARKING_NO_SPEECH: &str = "dog_barking_no_speech";
    pub const DOG_BARKING_SPEECH: &str = "dog_barking_speech";
    pub const DOORBELL_NO_SPEECH: &str = "doorbell_no_speech";
    pub const DOORBELL_SPEECH: &str = "doorbell_speech";
    pub const DRILL_NO_SPEECH: &str = "drill_no_speech";
    pub const DRILL_SPEECH: &str = "drill_speech";
    pub const GLASS_BREAKING_NO_SPEECH: &str = "glass_breaking_no_speech";
    pub const GLASS_BREAKING_SPEECH: &str = "glass_breaking_speech";
    pub const GUN_SHOT_NO_SPEECH: &str = "gun_shot_no_speech";
    pub const GUN_SHOT_SPEECH: &str = "gun_shot_speech";
    pub const SLAM_NO_SPEECH: &str = "slam_no_speech";
    pub const SLAM_SPEECH: &str = "slam_speech";
    pub const TOILET_FLUSH_NO_SPEECH: &str = "toilet_flush_no_speech";
    pub const TOILET_FLUSH_SPEECH: &str = "toilet_flush_speech";
}

use sound_classes::*;

/// All model classes in model output order
pub const MODEL_CLASSES: [&str; 24] = [
    APPLAUSE_NO_SPEECH,
    APPLAUSE_SPEECH,
    CAT_MEOWING_NO_SPEECH,
    CAT_MEOWING_SPEECH,
    COUGH_NO_SPEECH,
    COUGH_SPEECH,
    CRYING_NO_SPEECH,
    CRYING_SPEECH,
    DISHES_POT_PAN_NO_SPEECH,
    DISHES_POT_PAN_SPEECH,
    DOG_BARKING_NO_SPEECH,
    DOG_BARKING_SPEECH,
    DOORBELL_NO_SPEECH,
    DOORBELL_SPEECH,
    DRILL_NO_SPEECH,
    DRILL_SPEECH,
    GLASS_BREAKING_NO_SPEECH,
    GLASS_BREAKING_SPEECH,
    GUN_SHOT_NO_SPEECH,
    GUN_SHOT_SPEECH,
    SLAM_NO_SPEECH,
    SLAM_SPEECH,
    TOILET_FLUSH_NO_SPEECH,
    TOILET_FLUSH_SPEECH,
];

static KNOWN_CLASSES: Lazy<HashSet<&'static str>> =
    Lazy::new(|| MODEL_CLASSES.iter().copied().collect());

/// Returns true if the label belongs to the canonical vocabulary
pub fn is_known_sound_class(label: &str) -> bool {
    KNOWN_CLASSES.contains(label)
}

/// Returns the sound source without its speech suffix
///
/// `dog_barking_speech` and `dog_barking_no_speech` both map to `dog_barking`.
pub fn base_sound_source(label: &str) -> &str {
    label
        .strip_suffix("_no_speech")
        .or_else(|| label.strip_suffix("_speech"))
        .unwrap_or(label)
}
