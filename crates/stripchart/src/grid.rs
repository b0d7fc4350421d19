//! Gridline placement and axis label text.
//!
//! Vertical gridlines march left from `now` every `time_tick` seconds and are
//! labelled with the elapsed time. Horizontal gridlines sit at every
//! `scale_bump` above `min_scale` and are labelled with the scaled value and
//! units.

use crate::config::ChartConfig;
use crate::layout::PlotArea;
use crate::mapper::CoordinateMapper;
use crate::text::{FontSpec, TextExtent, TextMeasurer};

/// Hard cap on gridlines per axis, for absurd tick/scale combinations.
pub const MAX_GRIDLINES: usize = 1024;

const SECONDS_PER_HOUR: u64 = 3600;
const SECONDS_PER_DAY: u64 = 86_400;

/// Line dash pattern: alternating on/off lengths. Empty means solid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashPattern {
    pub segments: Vec<f32>,
    pub offset: f32,
}

impl DashPattern {
    /// Solid line (no dashes).
    pub const SOLID: DashPattern = DashPattern {
        segments: Vec::new(),
        offset: 0.0,
    };

    /// Equal on and off runs of `size` pixels.
    pub fn dotted(size: f32) -> Self {
        Self {
            segments: vec![size],
            offset: 0.0,
        }
    }

    pub fn dashed(dash: f32, gap: f32) -> Self {
        Self {
            segments: vec![dash, gap],
            offset: 0.0,
        }
    }

    pub fn is_solid(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Snap a coordinate onto a pixel centre so 1px lines stay crisp.
pub fn snap(position: f32) -> f32 {
    position.floor() + 0.5
}

/// A vertical gridline for one time step.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGridline {
    /// Seconds before `now`.
    pub elapsed: f64,
    pub x: f32,
    pub label: String,
    pub extent: TextExtent,
}

/// A horizontal gridline for one value step.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueGridline {
    pub value: f32,
    pub y: f32,
    pub label: String,
    pub extent: TextExtent,
}

/// Vertical gridlines from the right edge leftwards until they leave the plot.
///
/// The first line is always at `now`, i.e. on the right edge.
pub fn time_gridlines(
    mapper: &CoordinateMapper,
    plot: &PlotArea,
    time_tick: f64,
    measurer: &dyn TextMeasurer,
    font: &FontSpec,
) -> Vec<TimeGridline> {
    let mut lines = Vec::new();
    for i in 0..MAX_GRIDLINES {
        let elapsed = i as f64 * time_tick;
        let x = mapper.time_to_position(mapper.now() - elapsed);
        if x <= plot.left {
            return lines;
        }

        let label = format_elapsed(elapsed, time_tick);
        let extent = measurer.measure(&label, font);
        lines.push(TimeGridline {
            elapsed,
            x,
            label,
            extent,
        });
    }

    tracing::debug!(
        "Time axis truncated at {} gridlines (time_tick = {})",
        MAX_GRIDLINES,
        time_tick
    );
    lines
}

/// Horizontal gridlines at `min_scale + i * scale_bump` for `i >= 1`, up to
/// and including `max_scale`.
pub fn value_gridlines(
    mapper: &CoordinateMapper,
    config: &ChartConfig,
    measurer: &dyn TextMeasurer,
) -> Vec<ValueGridline> {
    let epsilon = config.scale_bump * 1e-4;
    let mut lines = Vec::new();
    for i in 1..=MAX_GRIDLINES {
        let value = config.min_scale + i as f32 * config.scale_bump;
        if value > config.max_scale + epsilon {
            return lines;
        }

        let label = format_value(value, config.unit_scale, &config.units);
        let extent = measurer.measure(&label, &config.font);
        lines.push(ValueGridline {
            value,
            y: mapper.value_to_position(value),
            label,
            extent,
        });
    }

    tracing::debug!(
        "Value axis truncated at {} gridlines (scale_bump = {})",
        MAX_GRIDLINES,
        config.scale_bump
    );
    lines
}

/// Format an elapsed time for the time axis.
///
/// The unit is picked from the tick spacing, not the value: `m:ss` below an
/// hour, `h:mm` below a day, whole days beyond that.
///
/// ```
/// use stripchart::grid::format_elapsed;
///
/// assert_eq!(format_elapsed(70.0, 10.0), "1:10");
/// assert_eq!(format_elapsed(5400.0, 1800.0), "90:00");
/// assert_eq!(format_elapsed(5400.0, 3600.0), "1:30");
/// assert_eq!(format_elapsed(172_800.0, 86_400.0), "2");
/// ```
pub fn format_elapsed(elapsed: f64, time_tick: f64) -> String {
    let seconds = elapsed.max(0.0).round() as u64;
    if time_tick < SECONDS_PER_HOUR as f64 {
        format!("{}:{:02}", seconds / 60, seconds % 60)
    } else if time_tick < SECONDS_PER_DAY as f64 {
        format!(
            "{}:{:02}",
            seconds / SECONDS_PER_HOUR,
            (seconds % SECONDS_PER_HOUR) / 60
        )
    } else {
        format!("{}", seconds / SECONDS_PER_DAY)
    }
}

/// Decimal places needed to show `unit_scale`-scaled values.
pub fn value_decimals(unit_scale: f32) -> usize {
    if unit_scale <= 0.001 {
        3
    } else if unit_scale <= 0.01 {
        2
    } else if unit_scale <= 0.1 {
        1
    } else {
        0
    }
}

/// Format a value-axis label as `"<value * unit_scale> <units>"`.
///
/// ```
/// use stripchart::grid::format_value;
///
/// assert_eq!(format_value(50.0, 1.0, "%"), "50 %");
/// assert_eq!(format_value(1500.0, 0.001, "kB"), "1.500 kB");
/// assert_eq!(format_value(20.0, 1.0, ""), "20");
/// ```
pub fn format_value(value: f32, unit_scale: f32, units: &str) -> String {
    let decimals = value_decimals(unit_scale);
    let scaled = value * unit_scale;
    if units.is_empty() {
        format!("{:.*}", decimals, scaled)
    } else {
        format!("{:.*} {}", decimals, scaled, units)
    }
}
