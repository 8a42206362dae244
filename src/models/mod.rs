//! SoundAware detection data models
//!
//! Read-only view of the detection records owned by the detection subsystem,
//! plus the canonical sound-class vocabulary.

pub mod detection;
pub mod vocabulary;

pub use detection::*;
pub use vocabulary::*;
