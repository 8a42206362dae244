//! Analytics module for detection statistics
//!
//! Derives the numbers shown on the history and home screens from a
//! snapshot of detection records.
//!
//! ## Architecture
//!
//! - **Advanced stats**: rate series, entropy, rarity, confidence buckets and
//!   surge, computed together by [`calculator::compute_advanced_stats`]
//! - **History stats**: totals, mean confidence and most common category
//! - **Dashboard stats**: today/week counts, detection rate, sparkline,
//!   confidence trend and top sounds
//!
//! Nothing is cached: every call recomputes from the slice it is given.

mod types;

#[cfg(test)]
mod types_tests;

pub use types::*;

/// Calculator module for statistics computation
pub mod calculator;
