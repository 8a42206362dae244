//! Timeline area chart
//!
//! Histogram of detections by hour of day drawn as a line with a filled
//! area underneath. All calendar days fold onto one 24-hour cycle.

use chrono::{FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::models::DetectionRecord;

use super::types::{PaletteColor, PathData, Point, TimelineLayout, ViewBox};

/// Geometry of the timeline area chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimelineChart {
    pub view_box: ViewBox,

    /// Detections per hour-of-day bin
    pub bins: Vec<u32>,

    /// Normalization ceiling, at least 1
    pub max: u32,

    /// One point per bin, left to right
    pub points: Vec<Point>,

    /// Stroke path through the points
    pub line: PathData,

    /// Line closed along the bottom edge, for the fill
    pub area: PathData,

    pub area_opacity: f64,
    pub color: PaletteColor,
}

/// Counts detections per hour-of-day bin in the display offset
pub fn hourly_bins(records: &[DetectionRecord], bins: usize, offset: FixedOffset) -> Vec<u32> {
    let bins = bins.max(1);
    let mut counts = vec![0u32; bins];

    for record in records {
        let hour = record.timestamp.with_timezone(&offset).hour() as usize;
        counts[(hour * bins / 24) % bins] += 1;
    }

    counts
}

/// Builds the timeline area chart
pub fn render_timeline(
    records: &[DetectionRecord],
    layout: &TimelineLayout,
    offset: FixedOffset,
) -> TimelineChart {
    let bins = hourly_bins(records, layout.bins, offset);
    let max = bins.iter().copied().max().unwrap_or(0).max(1);

    let w = layout.width;
    let h = layout.height;
    let step = w / (bins.len().saturating_sub(1).max(1)) as f64;
    let plot_height = h - layout.top_padding - layout.baseline_inset;

    let points: Vec<Point> = bins
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let x = i as f64 * step;
            let y = h - (f64::from(count) / f64::from(max)) * plot_height - layout.baseline_inset;
            Point::new(x, y)
        })
        .collect();

    let line = points
        .iter()
        .enumerate()
        .fold(PathData::new(), |path, (i, &p)| {
            if i == 0 {
                path.move_to(p)
            } else {
                path.line_to(p)
            }
        });

    let area = PathData {
        commands: line.commands.clone(),
    }
    .line_to(Point::new(w, h))
    .line_to(Point::new(0.0, h))
    .close();

    TimelineChart {
        view_box: ViewBox {
            width: w,
            height: h,
        },
        bins,
        max,
        points,
        line,
        area,
        area_opacity: layout.area_opacity,
        color: PaletteColor::Accent,
    }
}
