//! Stacked hourly bar chart
//!
//! One bar per hour of day, stacked by the most frequent categories with
//! everything else folded into an "other" segment on top.

use chrono::{FixedOffset, Timelike};
use serde::{Deserialize, Serialize};

use crate::analytics::calculator::ranked_categories;
use crate::models::{DetectionRecord, SoundType};

use super::types::{Point, Rect, StackedBarLayout, TextLabel, ViewBox, STACK_PALETTE};

const HOURS: usize = 24;

/// Stack member
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StackKey {
    Category(SoundType),
    /// Everything outside the top categories
    Other,
}

impl StackKey {
    pub fn label(&self) -> &str {
        match self {
            StackKey::Category(sound_type) => sound_type,
            StackKey::Other => "other",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct BarSegment {
    pub key: StackKey,
    pub count: u32,
    pub rect: Rect,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct HourBar {
    pub hour: u32,
    /// Bottom to top; zero counts are omitted
    pub segments: Vec<BarSegment>,
    pub label: TextLabel,
}

impl HourBar {
    /// Combined height of the stack
    pub fn stack_height(&self) -> f64 {
        self.segments.iter().map(|s| s.rect.height).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct StackedHourlyChart {
    pub view_box: ViewBox,
    /// Stack order, bottom first; `Other` is always last
    pub keys: Vec<StackKey>,
    /// `counts[hour][key_index]`
    pub counts: Vec<Vec<u32>>,
    /// Largest per-hour total, at least 1
    pub max_stack: u32,
    pub bars: Vec<HourBar>,
}

/// Builds the stacked hourly bar chart
pub fn render_stacked_hourly(
    records: &[DetectionRecord],
    layout: &StackedBarLayout,
    offset: FixedOffset,
) -> StackedHourlyChart {
    let mut keys: Vec<StackKey> = ranked_categories(records)
        .into_iter()
        .take(layout.top_categories)
        .map(|c| StackKey::Category(c.sound_type))
        .collect();
    keys.push(StackKey::Other);
    let other_idx = keys.len() - 1;

    let mut counts = vec![vec![0u32; keys.len()]; HOURS];
    for record in records {
        let hour = record.timestamp.with_timezone(&offset).hour() as usize;
        let idx = keys[..other_idx]
            .iter()
            .position(|k| matches!(k, StackKey::Category(t) if *t == record.sound_type))
            .unwrap_or(other_idx);
        counts[hour][idx] += 1;
    }

    let max_stack = counts
        .iter()
        .map(|hour| hour.iter().sum::<u32>())
        .max()
        .unwrap_or(0)
        .max(1);

    let h = layout.height;
    let plot_height = (h - layout.label_band).max(0.0);
    let bar_width = layout.width / HOURS as f64;
    let rect_width = (bar_width - 2.0 * layout.bar_gap).max(0.0);

    let bars = counts
        .iter()
        .enumerate()
        .map(|(hour, hour_counts)| {
            let x = hour as f64 * bar_width + layout.bar_gap;
            let mut y_acc = h;
            let segments = hour_counts
                .iter()
                .enumerate()
                .filter(|&(_, &count)| count > 0)
                .map(|(si, &count)| {
                    let height = f64::from(count) / f64::from(max_stack) * plot_height;
                    y_acc -= height;
                    BarSegment {
                        key: keys[si].clone(),
                        count,
                        rect: Rect {
                            x,
                            y: y_acc,
                            width: rect_width,
                            height,
                            color: STACK_PALETTE[si % STACK_PALETTE.len()],
                        },
                    }
                })
                .collect();

            HourBar {
                hour: hour as u32,
                segments,
                label: TextLabel {
                    position: Point::new(hour as f64 * bar_width + bar_width / 2.0, h - 2.0),
                    text: hour.to_string(),
                    font_size: layout.label_font_size,
                },
            }
        })
        .collect();

    StackedHourlyChart {
        view_box: ViewBox {
            width: layout.width,
            height: h,
        },
        keys,
        counts,
        max_stack,
        bars,
    }
}
