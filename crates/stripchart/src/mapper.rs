//! Conversions between data space and canvas pixels.

use crate::layout::PlotArea;

/// Maps values to y and timestamps to x for one frame.
///
/// The newest instant (`now`) sits on the right edge of the plot; older
/// samples scroll off to the left at `time_scale` pixels per second. The
/// value range fills the plot height with `min_scale` on the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    top: f32,
    body_height: f32,
    right: f32,
    min_scale: f32,
    max_scale: f32,
    time_scale: f64,
    now: f64,
}

impl CoordinateMapper {
    /// `max_scale` must be greater than `min_scale`; [`ChartConfig`](crate::ChartConfig)
    /// validation guarantees this for chart-built mappers.
    pub fn new(
        plot: &PlotArea,
        min_scale: f32,
        max_scale: f32,
        time_scale: f64,
        now: f64,
    ) -> Self {
        Self {
            top: plot.top,
            body_height: plot.body_height(),
            right: plot.right,
            min_scale,
            max_scale,
            time_scale,
            now,
        }
    }

    pub fn now(&self) -> f64 {
        self.now
    }

    /// Vertical pixels per value unit.
    pub fn pixels_per_unit(&self) -> f32 {
        self.body_height / (self.max_scale - self.min_scale)
    }

    /// Pixel y for a data value. Higher values map to smaller y.
    pub fn value_to_position(&self, value: f32) -> f32 {
        let fraction = (value - self.min_scale) / (self.max_scale - self.min_scale);
        self.top + self.body_height - fraction * self.body_height
    }

    /// Pixel x for a timestamp. `now` maps to the right edge.
    pub fn time_to_position(&self, time: f64) -> f32 {
        (self.right as f64 - (self.now - time) * self.time_scale) as f32
    }

    /// Data value under pixel row `y`.
    pub fn position_to_value(&self, y: f32) -> f32 {
        let fraction = (self.top + self.body_height - y) / self.body_height;
        self.min_scale + fraction * (self.max_scale - self.min_scale)
    }

    /// Timestamp under pixel column `x`.
    pub fn position_to_time(&self, x: f32) -> f64 {
        self.now - (self.right as f64 - x as f64) / self.time_scale
    }
}
