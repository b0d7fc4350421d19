//! Frame geometry: margins, plot bounds and legend placement.
//!
//! Margins are sticky. They start at the configured values and only ever
//! grow when a measured label does not fit, so the plot area stops jumping
//! around once the widest label has been seen. The grown margins live in a
//! [`LayoutState`] that the caller threads from one frame to the next.

use glam::Vec2;
use serde::{Deserialize, Serialize};
use stripchart_core::Color;

use crate::config::ChartConfig;
use crate::graphable::Graphable;
use crate::mapper::CoordinateMapper;
use crate::rect::Rect;
use crate::text::{FontSpec, TextMeasurer};

/// Gap between a label and the thing it annotates.
pub const LABEL_PADDING: f32 = 5.0;

/// Distance of the legend box from the plot's top-left corner.
pub const LEGEND_OFFSET: f32 = 2.0;
/// Padding between the legend box and its text.
pub const LEGEND_MARGIN: f32 = 2.0;
/// Extra vertical space added to each legend line.
pub const LEGEND_VSPACE: f32 = 5.0;

/// Space reserved around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 70.0,
            right: 20.0,
            top: 10.0,
            bottom: 20.0,
        }
    }
}

impl Margins {
    pub fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn uniform(padding: f32) -> Self {
        Self::new(padding, padding, padding, padding)
    }

    /// Grow the bottom margin to at least `required`. Returns true if it grew.
    pub fn grow_bottom(&mut self, required: f32) -> bool {
        if self.bottom < required {
            self.bottom = required;
            true
        } else {
            false
        }
    }

    /// Grow the left margin to at least `required`. Returns true if it grew.
    pub fn grow_left(&mut self, required: f32) -> bool {
        if self.left < required {
            self.left = required;
            true
        } else {
            false
        }
    }

    /// True if every side is at least as large as the same side of `other`.
    pub fn covers(&self, other: &Margins) -> bool {
        self.left >= other.left
            && self.right >= other.right
            && self.top >= other.top
            && self.bottom >= other.bottom
    }
}

/// Layout carried between frames.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct LayoutState {
    pub margins: Margins,
}

impl LayoutState {
    pub fn new(margins: Margins) -> Self {
        Self { margins }
    }
}

/// Size of the drawable surface in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Edges of the data area inside the margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl PlotArea {
    pub fn new(viewport: Viewport, margins: &Margins) -> Self {
        Self {
            left: margins.left,
            right: viewport.width - margins.right,
            top: margins.top,
            bottom: viewport.height - margins.bottom,
        }
    }

    pub fn body_width(&self) -> f32 {
        self.right - self.left
    }

    pub fn body_height(&self) -> f32 {
        self.bottom - self.top
    }

    /// A plot with no positive area cannot be drawn into.
    pub fn is_degenerate(&self) -> bool {
        self.rect().is_empty()
    }

    pub fn rect(&self) -> Rect {
        Rect::from_edges(self.left, self.top, self.right, self.bottom)
    }
}

/// Everything derived from the viewport and margins for a single frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameGeometry {
    pub viewport: Viewport,
    pub margins: Margins,
    pub plot: PlotArea,
    /// Frame timestamp, seconds.
    pub now: f64,
}

impl FrameGeometry {
    pub fn compute(viewport: Viewport, margins: Margins, now: f64) -> Self {
        Self {
            viewport,
            margins,
            plot: PlotArea::new(viewport, &margins),
            now,
        }
    }

    pub fn mapper(&self, config: &ChartConfig) -> CoordinateMapper {
        CoordinateMapper::new(
            &self.plot,
            config.min_scale,
            config.max_scale,
            config.time_scale,
            self.now,
        )
    }
}

/// One line of the legend.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: Color,
    /// Top-left corner of the text.
    pub origin: Vec2,
}

/// Legend box and the positions of its entries.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendLayout {
    pub frame: Rect,
    pub entries: Vec<LegendEntry>,
}

impl LegendLayout {
    /// Stack one line per source in the plot's top-left corner.
    ///
    /// Hidden sources still get a line.
    pub fn compute(
        sources: &[&dyn Graphable],
        plot: &PlotArea,
        measurer: &dyn TextMeasurer,
        font: &FontSpec,
    ) -> Self {
        let text_x = plot.left + LEGEND_OFFSET + LEGEND_MARGIN;
        let mut y = plot.top + LEGEND_OFFSET + LEGEND_MARGIN;
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        let mut entries = Vec::with_capacity(sources.len());

        for source in sources {
            let extent = measurer.measure(source.name(), font);
            let line_height = extent.height + LEGEND_VSPACE;
            entries.push(LegendEntry {
                label: source.name().to_owned(),
                color: source.color(),
                origin: Vec2::new(text_x, y),
            });
            width = width.max(extent.width);
            height += line_height;
            y += line_height;
        }

        Self {
            frame: Rect::new(
                plot.left + LEGEND_OFFSET,
                plot.top + LEGEND_OFFSET,
                width + 2.0 * LEGEND_MARGIN,
                height + 2.0 * LEGEND_MARGIN,
            ),
            entries,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
