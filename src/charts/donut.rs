//! Donut chart of the category distribution
//!
//! Slices start at 12 o'clock and run clockwise, largest category first.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use crate::analytics::calculator::ranked_categories;
use crate::models::{humanize_sound_type, DetectionRecord, SoundType};
use crate::utils::round_half_up;

use super::types::{DonutLayout, PaletteColor, PathData, Point, ViewBox, DONUT_PALETTE};

/// Angle of the first slice edge (12 o'clock)
const START_ANGLE_DEG: f64 = -90.0;

/// One ring segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DonutSlice {
    pub sound_type: SoundType,
    pub count: u32,
    /// Degrees, 0 = 3 o'clock, clockwise positive
    pub start_angle_deg: f64,
    pub sweep_angle_deg: f64,
    pub color: PaletteColor,
    pub path: PathData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct LegendEntry {
    pub sound_type: SoundType,
    /// `dog barking speech (67%)`
    pub label: String,
    pub percent: u32,
    pub count: u32,
    pub color: PaletteColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct DonutData {
    pub view_box: ViewBox,
    pub center: Point,
    pub outer_radius: f64,
    pub inner_radius: f64,
    pub total: u32,
    /// Caption under the total in the hole
    pub total_caption: String,
    pub slices: Vec<DonutSlice>,
    pub legend: Vec<LegendEntry>,
}

/// Donut chart or its empty-state placeholder
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DonutChart {
    NoData { view_box: ViewBox, message: String },
    Chart(DonutData),
}

impl DonutChart {
    pub fn slices(&self) -> &[DonutSlice] {
        match self {
            DonutChart::NoData { .. } => &[],
            DonutChart::Chart(data) => &data.slices,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        matches!(self, DonutChart::NoData { .. })
    }
}

fn polar(center: Point, radius: f64, angle_deg: f64) -> Point {
    let rad = angle_deg * PI / 180.0;
    Point::new(center.x + radius * rad.cos(), center.y + radius * rad.sin())
}

/// Ring segment between two angles
fn segment_path(center: Point, outer: f64, inner: f64, start_deg: f64, sweep_deg: f64) -> PathData {
    let end_deg = start_deg + sweep_deg;
    let large = sweep_deg > 180.0;

    PathData::new()
        .move_to(polar(center, outer, start_deg))
        .arc_to(outer, large, true, polar(center, outer, end_deg))
        .line_to(polar(center, inner, end_deg))
        .arc_to(inner, large, false, polar(center, inner, start_deg))
        .close()
}

/// Full ring as two half arcs per edge; a single 360° arc has identical
/// endpoints and would not draw
fn full_ring_path(center: Point, outer: f64, inner: f64) -> PathData {
    let top = START_ANGLE_DEG;
    let bottom = START_ANGLE_DEG + 180.0;

    PathData::new()
        .move_to(polar(center, outer, top))
        .arc_to(outer, false, true, polar(center, outer, bottom))
        .arc_to(outer, false, true, polar(center, outer, top))
        .close()
        .move_to(polar(center, inner, top))
        .arc_to(inner, false, false, polar(center, inner, bottom))
        .arc_to(inner, false, false, polar(center, inner, top))
        .close()
}

/// Builds the donut chart
pub fn render_donut(records: &[DetectionRecord], layout: &DonutLayout) -> DonutChart {
    let view_box = ViewBox {
        width: layout.size,
        height: layout.size,
    };

    let ranked = ranked_categories(records);
    if ranked.is_empty() {
        return DonutChart::NoData {
            view_box,
            message: "No data".to_string(),
        };
    }

    let total: u32 = ranked.iter().map(|c| c.count).sum();
    let palette_size = layout.palette_size.clamp(1, DONUT_PALETTE.len());
    let center = Point::new(layout.size / 2.0, layout.size / 2.0);
    let outer = (layout.size / 2.0 - layout.ring_inset).max(0.0);
    let inner = outer * layout.inner_ratio;

    let mut start = START_ANGLE_DEG;
    let slices: Vec<DonutSlice> = ranked
        .into_iter()
        .enumerate()
        .map(|(rank, c)| {
            let sweep = f64::from(c.count) / f64::from(total) * 360.0;
            let path = if c.count == total {
                full_ring_path(center, outer, inner)
            } else {
                segment_path(center, outer, inner, start, sweep)
            };
            let slice = DonutSlice {
                sound_type: c.sound_type,
                count: c.count,
                start_angle_deg: start,
                sweep_angle_deg: sweep,
                color: DONUT_PALETTE[rank % palette_size],
                path,
            };
            start += sweep;
            slice
        })
        .collect();

    let legend = slices
        .iter()
        .take(layout.legend_limit)
        .map(|s| {
            let percent = round_half_up(f64::from(s.count) / f64::from(total) * 100.0) as u32;
            LegendEntry {
                sound_type: s.sound_type.clone(),
                label: format!("{} ({}%)", humanize_sound_type(&s.sound_type), percent),
                percent,
                count: s.count,
                color: s.color,
            }
        })
        .collect();

    DonutChart::Chart(DonutData {
        view_box,
        center,
        outer_radius: outer,
        inner_radius: inner,
        total,
        total_caption: "Total".to_string(),
        slices,
        legend,
    })
}
