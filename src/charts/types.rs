//! Drawable primitives and chart layouts
//!
//! Coordinates live in a virtual view box; the rendering layer scales it to
//! the output size. Colors are palette slots resolved by the active theme.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme palette slot
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteColor {
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Error,
}

/// Slice colors of the donut chart, by rank
pub const DONUT_PALETTE: [PaletteColor; 6] = [
    PaletteColor::Primary,
    PaletteColor::Secondary,
    PaletteColor::Accent,
    PaletteColor::Success,
    PaletteColor::Warning,
    PaletteColor::Error,
];

/// Segment colors of the stacked bar chart, by stack position
pub const STACK_PALETTE: [PaletteColor; 5] = [
    PaletteColor::Primary,
    PaletteColor::Secondary,
    PaletteColor::Accent,
    PaletteColor::Success,
    PaletteColor::Warning,
];

/// Virtual coordinate space of a chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub width: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One path command, SVG semantics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "cmd", rename_all = "snake_case")]
pub enum PathCommand {
    MoveTo { to: Point },
    LineTo { to: Point },
    /// Elliptical arc with zero x-axis rotation
    Arc {
        rx: f64,
        ry: f64,
        large_arc: bool,
        /// true = clockwise in screen coordinates
        sweep: bool,
        to: Point,
    },
    Close,
}

/// Ordered list of path commands
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn move_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::MoveTo { to });
        self
    }

    pub fn line_to(mut self, to: Point) -> Self {
        self.commands.push(PathCommand::LineTo { to });
        self
    }

    pub fn arc_to(mut self, radius: f64, large_arc: bool, sweep: bool, to: Point) -> Self {
        self.commands.push(PathCommand::Arc {
            rx: radius,
            ry: radius,
            large_arc,
            sweep,
            to,
        });
        self
    }

    pub fn close(mut self) -> Self {
        self.commands.push(PathCommand::Close);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// SVG `d` attribute
    pub fn to_svg(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            match cmd {
                PathCommand::MoveTo { to } => write!(f, "M {} {}", to.x, to.y)?,
                PathCommand::LineTo { to } => write!(f, "L {} {}", to.x, to.y)?,
                PathCommand::Arc {
                    rx,
                    ry,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    f,
                    "A {} {} 0 {} {} {} {}",
                    rx,
                    ry,
                    u8::from(*large_arc),
                    u8::from(*sweep),
                    to.x,
                    to.y
                )?,
                PathCommand::Close => write!(f, "Z")?,
            }
        }
        Ok(())
    }
}

/// Filled rectangle
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub color: PaletteColor,
}

/// Text anchored at a point
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLabel {
    pub position: Point,
    pub text: String,
    pub font_size: f64,
}

/// Timeline area chart layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct TimelineLayout {
    pub width: f64,
    pub height: f64,
    /// Hour-of-day bins across the chart
    pub bins: usize,
    /// Gap between the tallest point and the top edge
    pub top_padding: f64,
    /// Distance of the zero line above the bottom edge
    pub baseline_inset: f64,
    pub area_opacity: f64,
}

impl Default for TimelineLayout {
    fn default() -> Self {
        Self {
            width: 600.0,
            height: 80.0,
            bins: 24,
            top_padding: 6.0,
            baseline_inset: 2.0,
            area_opacity: 0.12,
        }
    }
}

/// Donut chart layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct DonutLayout {
    /// Width and height of the square view box
    pub size: f64,
    /// Gap between the outer ring and the view box edge
    pub ring_inset: f64,
    /// Inner radius as a fraction of the outer radius
    pub inner_ratio: f64,
    /// Number of palette colors cycled through (1..=6)
    pub palette_size: usize,
    pub legend_limit: usize,
}

impl Default for DonutLayout {
    fn default() -> Self {
        Self {
            size: 120.0,
            ring_inset: 6.0,
            inner_ratio: 0.6,
            palette_size: DONUT_PALETTE.len(),
            legend_limit: 5,
        }
    }
}

/// Stacked hourly bar chart layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct StackedBarLayout {
    pub width: f64,
    pub height: f64,
    /// Categories stacked individually; the rest fold into "other"
    pub top_categories: usize,
    /// Vertical space reserved for hour labels
    pub label_band: f64,
    /// Horizontal gap on each side of a bar
    pub bar_gap: f64,
    pub label_font_size: f64,
}

impl Default for StackedBarLayout {
    fn default() -> Self {
        Self {
            width: 700.0,
            height: 120.0,
            top_categories: 4,
            label_band: 20.0,
            bar_gap: 2.0,
            label_font_size: 8.0,
        }
    }
}

/// Chart layouts grouped for configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ChartConfig {
    pub timeline: TimelineLayout,
    pub donut: DonutLayout,
    pub stacked: StackedBarLayout,
}
