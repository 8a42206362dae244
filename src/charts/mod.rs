//! Chart geometry for the notifications and history screens
//!
//! Renderers turn a detection snapshot into resolution-independent
//! primitives (paths, rectangles, labels, palette slots). Drawing them is
//! left to the UI layer.

mod donut;
mod stacked;
mod timeline;
pub mod types;

pub use donut::{render_donut, DonutChart, DonutData, DonutSlice, LegendEntry};
pub use stacked::{render_stacked_hourly, BarSegment, HourBar, StackKey, StackedHourlyChart};
pub use timeline::{hourly_bins, render_timeline, TimelineChart};
pub use types::*;
