//! Chart configuration.
//!
//! A [`ChartConfig`] can be built in code with the `with_*` builders or loaded
//! from TOML. Missing keys fall back to the defaults, so a file only has to
//! mention what it changes:
//!
//! ```toml
//! min_scale = 0.0
//! max_scale = 80.0
//! scale_bump = 20.0
//! units = "C"
//! max_redline = 70.0
//! font = "sans bold 9"
//! series_name = "temperature"
//!
//! [initial_margins]
//! left = 80.0
//! right = 20.0
//! top = 10.0
//! bottom = 20.0
//! ```

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::layout::Margins;
use crate::text::FontSpec;

/// Display settings for a strip chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Value at the bottom edge of the plot.
    pub min_scale: f32,
    /// Value at the top edge of the plot.
    pub max_scale: f32,
    /// Value step between horizontal gridlines.
    pub scale_bump: f32,
    /// Suffix appended to value labels.
    pub units: String,
    /// Multiplier applied to values before they are labelled.
    pub unit_scale: f32,
    /// Horizontal pixels per second.
    pub time_scale: f64,
    /// Seconds between vertical gridlines.
    pub time_tick: f64,
    /// Values below this are shaded. Set at or below `min_scale` to disable.
    pub min_redline: f32,
    /// Values above this are shaded. Set at or above `max_scale` to disable.
    pub max_redline: f32,
    pub line_width: f32,
    pub font: FontSpec,
    /// Rotated title drawn left of the value labels.
    pub y_axis_title: String,
    /// Which sub-series of each source is plotted.
    pub series_name: String,
    pub draw_legend: bool,
    /// Redraw period for [`RefreshDriver`](crate::RefreshDriver).
    pub update_interval_ms: u64,
    /// Margins the first frame starts from.
    pub initial_margins: Margins,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            min_scale: 0.0,
            max_scale: 100.0,
            scale_bump: 10.0,
            units: "%".to_owned(),
            unit_scale: 1.0,
            time_scale: 10.0,
            time_tick: 10.0,
            min_redline: -1.0,
            max_redline: 101.0,
            line_width: 1.0,
            font: FontSpec::default(),
            y_axis_title: String::new(),
            series_name: String::new(),
            draw_legend: true,
            update_interval_ms: 250,
            initial_margins: Margins::default(),
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse and validate a TOML document.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        let config: ChartConfig = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!("Loaded chart config from {}", path.display());
        Ok(config)
    }

    /// Check the invariants the layout math relies on.
    ///
    /// Comparisons are written so that NaN fails them; infinities are
    /// rejected explicitly.
    pub fn validate(&self) -> Result<()> {
        if !(self.max_scale > self.min_scale
            && self.min_scale.is_finite()
            && self.max_scale.is_finite())
        {
            return Err(ConfigError::InvalidScale {
                min: self.min_scale,
                max: self.max_scale,
            });
        }
        if !(self.scale_bump > 0.0 && self.scale_bump.is_finite()) {
            return Err(ConfigError::InvalidScaleBump(self.scale_bump));
        }
        if !(self.unit_scale > 0.0 && self.unit_scale.is_finite()) {
            return Err(ConfigError::InvalidUnitScale(self.unit_scale));
        }
        if !(self.time_scale > 0.0 && self.time_scale.is_finite()) {
            return Err(ConfigError::InvalidTimeScale(self.time_scale));
        }
        if !(self.time_tick > 0.0 && self.time_tick.is_finite()) {
            return Err(ConfigError::InvalidTimeTick(self.time_tick));
        }
        if !(self.line_width > 0.0 && self.line_width.is_finite()) {
            return Err(ConfigError::InvalidLineWidth(self.line_width));
        }
        if self.update_interval_ms == 0 {
            return Err(ConfigError::InvalidUpdateInterval);
        }
        if !(self.font.size > 0.0 && self.font.size.is_finite()) {
            return Err(ConfigError::InvalidFont(self.font.to_string()));
        }
        Ok(())
    }

    /// Whether the band below `min_redline` is drawn.
    pub fn min_redline_enabled(&self) -> bool {
        self.min_redline > self.min_scale
    }

    /// Whether the band above `max_redline` is drawn.
    pub fn max_redline_enabled(&self) -> bool {
        self.max_redline < self.max_scale
    }

    pub fn update_interval(&self) -> Duration {
        Duration::from_millis(self.update_interval_ms)
    }

    pub fn with_scale(mut self, min: f32, max: f32, bump: f32) -> Self {
        self.min_scale = min;
        self.max_scale = max;
        self.scale_bump = bump;
        self
    }

    pub fn with_units(mut self, units: impl Into<String>, unit_scale: f32) -> Self {
        self.units = units.into();
        self.unit_scale = unit_scale;
        self
    }

    pub fn with_time_axis(mut self, time_scale: f64, time_tick: f64) -> Self {
        self.time_scale = time_scale;
        self.time_tick = time_tick;
        self
    }

    pub fn with_redlines(mut self, min: f32, max: f32) -> Self {
        self.min_redline = min;
        self.max_redline = max;
        self
    }

    pub fn with_line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn with_font(mut self, font: FontSpec) -> Self {
        self.font = font;
        self
    }

    pub fn with_y_axis_title(mut self, title: impl Into<String>) -> Self {
        self.y_axis_title = title.into();
        self
    }

    pub fn with_series_name(mut self, name: impl Into<String>) -> Self {
        self.series_name = name.into();
        self
    }

    pub fn with_draw_legend(mut self, draw_legend: bool) -> Self {
        self.draw_legend = draw_legend;
        self
    }

    pub fn with_update_interval(mut self, interval: Duration) -> Self {
        self.update_interval_ms = interval.as_millis().min(u64::MAX as u128) as u64;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.initial_margins = margins;
        self
    }
}
