//! Frame rendering.
//!
//! [`StripChart::render_frame`] turns the chart configuration, the current
//! time, the viewport and a set of sources into a [`DrawList`]. It does not
//! touch any toolkit state. The sticky margins go in as a [`LayoutState`] and
//! come back out, grown if any label overflowed them. Growth only takes
//! effect on the next frame.

use glam::Vec2;
use stripchart_core::Color;
use stripchart_core::profiling::profile_scope;

use crate::config::ChartConfig;
use crate::draw::{Canvas, DrawList};
use crate::error::Result;
use crate::graphable::Graphable;
use crate::grid::{self, DashPattern, snap};
use crate::layout::{
    FrameGeometry, LABEL_PADDING, LayoutState, LegendLayout, Margins, PlotArea, Viewport,
};
use crate::mapper::CoordinateMapper;
use crate::rect::Rect;
use crate::series::Series;
use crate::text::{FontSpec, TextMeasurer};

pub const BACKGROUND_COLOR: Color = Color::WHITE;
pub const REDLINE_COLOR: Color = Color::rgb(1.0, 0.8, 0.8);
pub const AXIS_COLOR: Color = Color::BLACK;
pub const AXIS_LINE_WIDTH: f32 = 1.0;
pub const GRID_LINE_WIDTH: f32 = 0.5;

/// Horizontal position of the rotated value-axis title.
pub const TITLE_X: f32 = 10.0;
/// How far left of its gridline a time label starts.
pub const TIME_LABEL_SHIFT: f32 = 20.0;
/// Value labels are never allowed to start left of this.
pub const MIN_LABEL_X: f32 = 5.0;

/// Output of one render pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub commands: DrawList,
    /// Layout to feed into the next frame.
    pub layout: LayoutState,
}

impl Frame {
    fn skipped(layout: LayoutState) -> Self {
        Self {
            commands: DrawList::new(),
            layout,
        }
    }

    /// True when nothing was drawn.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

/// A scrolling time-series chart.
///
/// # Example
///
/// ```
/// use stripchart::{
///     ChartConfig, Graphable, MonospaceMeasurer, StripChart, TelemetrySource, Viewport,
/// };
/// use stripchart_core::Color;
///
/// let chart = StripChart::new(ChartConfig::default().with_series_name("load"))?;
///
/// let mut cpu = TelemetrySource::new("cpu", Color::RED);
/// for t in 0..30 {
///     cpu.record("load", t as f64, (t * 3) as f32);
/// }
///
/// let sources: [&dyn Graphable; 1] = [&cpu];
/// let frame = chart.render_frame(
///     chart.initial_layout(),
///     30.0,
///     Some(Viewport::new(400.0, 300.0)),
///     &sources,
///     &MonospaceMeasurer::default(),
/// );
/// assert!(!frame.commands.is_empty());
/// # Ok::<(), stripchart::ConfigError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct StripChart {
    config: ChartConfig,
}

impl StripChart {
    pub fn new(config: ChartConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// Layout for the very first frame.
    pub fn initial_layout(&self) -> LayoutState {
        LayoutState::new(self.config.initial_margins)
    }

    pub fn set_config(&mut self, config: ChartConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    /// Apply `change` to a copy of the config and keep it only if it validates.
    fn update(&mut self, change: impl FnOnce(&mut ChartConfig)) -> Result<()> {
        let mut next = self.config.clone();
        change(&mut next);
        self.set_config(next)
    }

    pub fn set_scale(&mut self, min: f32, max: f32, bump: f32) -> Result<()> {
        self.update(|c| {
            c.min_scale = min;
            c.max_scale = max;
            c.scale_bump = bump;
        })
    }

    pub fn set_units(&mut self, units: impl Into<String>, unit_scale: f32) -> Result<()> {
        let units = units.into();
        self.update(|c| {
            c.units = units;
            c.unit_scale = unit_scale;
        })
    }

    pub fn set_time_axis(&mut self, time_scale: f64, time_tick: f64) -> Result<()> {
        self.update(|c| {
            c.time_scale = time_scale;
            c.time_tick = time_tick;
        })
    }

    pub fn set_line_width(&mut self, width: f32) -> Result<()> {
        self.update(|c| c.line_width = width)
    }

    pub fn set_font(&mut self, font: FontSpec) -> Result<()> {
        self.update(|c| c.font = font)
    }

    /// Redlines need no validation: an off-scale value just disables its band.
    pub fn set_redlines(&mut self, min: f32, max: f32) {
        self.config.min_redline = min;
        self.config.max_redline = max;
    }

    pub fn set_y_axis_title(&mut self, title: impl Into<String>) {
        self.config.y_axis_title = title.into();
    }

    pub fn set_series_name(&mut self, name: impl Into<String>) {
        self.config.series_name = name.into();
    }

    pub fn set_draw_legend(&mut self, draw_legend: bool) {
        self.config.draw_legend = draw_legend;
    }

    /// Build the draw list for one frame.
    ///
    /// Returns an empty frame, with `layout` unchanged, when there is no
    /// viewport yet or the margins leave no room for a plot.
    pub fn render_frame(
        &self,
        layout: LayoutState,
        now: f64,
        viewport: Option<Viewport>,
        sources: &[&dyn Graphable],
        measurer: &dyn TextMeasurer,
    ) -> Frame {
        profile_scope!("strip_chart_frame");

        let Some(viewport) = viewport else {
            tracing::trace!("No viewport available; skipping frame");
            return Frame::skipped(layout);
        };

        let geometry = FrameGeometry::compute(viewport, layout.margins, now);
        if geometry.plot.is_degenerate() {
            tracing::debug!(
                "Plot area {}x{} is empty; skipping frame",
                geometry.plot.body_width(),
                geometry.plot.body_height()
            );
            return Frame::skipped(layout);
        }

        let mapper = geometry.mapper(&self.config);
        let mut margins = layout.margins;
        let mut list = DrawList::new();

        list.save();
        list.rectangle(viewport.rect());
        list.clip();

        {
            profile_scope!("draw_background");
            self.draw_background(&mut list, &geometry.plot);
            self.draw_redlines(&mut list, &geometry.plot, &mapper);
            self.draw_axes(&mut list, &geometry.plot);
        }

        {
            profile_scope!("draw_grid");
            self.draw_time_grid(&mut list, &geometry, &mapper, measurer, &mut margins);
            self.draw_value_grid(&mut list, &geometry, &mapper, measurer, &mut margins);
            self.draw_title(&mut list, &geometry, measurer);
        }

        {
            profile_scope!("draw_series");
            self.draw_sources(&mut list, &geometry.plot, &mapper, sources);
        }

        if self.config.draw_legend {
            profile_scope!("draw_legend");
            self.draw_legend(&mut list, &geometry.plot, sources, measurer);
        }

        list.restore();

        if margins != layout.margins {
            tracing::debug!(
                "Margins grew from {:?} to {:?}; applying next frame",
                layout.margins,
                margins
            );
        }

        Frame {
            commands: list,
            layout: LayoutState::new(margins),
        }
    }

    /// Render a frame and replay it straight onto `canvas`.
    ///
    /// Returns the layout for the next frame.
    pub fn render_to<C: Canvas + ?Sized>(
        &self,
        canvas: &mut C,
        layout: LayoutState,
        now: f64,
        viewport: Option<Viewport>,
        sources: &[&dyn Graphable],
        measurer: &dyn TextMeasurer,
    ) -> LayoutState {
        let frame = self.render_frame(layout, now, viewport, sources, measurer);
        frame.commands.replay(canvas);
        frame.layout
    }

    fn draw_background(&self, canvas: &mut impl Canvas, plot: &PlotArea) {
        canvas.set_color(BACKGROUND_COLOR);
        canvas.rectangle(plot.rect());
        canvas.fill();
    }

    fn draw_redlines(&self, canvas: &mut impl Canvas, plot: &PlotArea, mapper: &CoordinateMapper) {
        canvas.set_color(REDLINE_COLOR);

        if self.config.min_redline_enabled() {
            let y = mapper
                .value_to_position(self.config.min_redline)
                .clamp(plot.top, plot.bottom);
            canvas.rectangle(Rect::from_edges(plot.left, y, plot.right, plot.bottom));
            canvas.fill();
        }

        if self.config.max_redline_enabled() {
            let y = mapper
                .value_to_position(self.config.max_redline)
                .clamp(plot.top, plot.bottom);
            canvas.rectangle(Rect::from_edges(plot.left, plot.top, plot.right, y));
            canvas.fill();
        }
    }

    fn draw_axes(&self, canvas: &mut impl Canvas, plot: &PlotArea) {
        canvas.set_line_width(AXIS_LINE_WIDTH);
        canvas.set_color(AXIS_COLOR);
        canvas.move_to(Vec2::new(plot.left + 0.5, plot.top));
        canvas.line_to(Vec2::new(plot.left + 0.5, plot.bottom + 0.5));
        canvas.line_to(Vec2::new(plot.right + 0.5, plot.bottom + 0.5));
        canvas.stroke();
    }

    fn draw_time_grid(
        &self,
        canvas: &mut impl Canvas,
        geometry: &FrameGeometry,
        mapper: &CoordinateMapper,
        measurer: &dyn TextMeasurer,
        margins: &mut Margins,
    ) {
        let plot = &geometry.plot;
        let lines = grid::time_gridlines(
            mapper,
            plot,
            self.config.time_tick,
            measurer,
            &self.config.font,
        );

        for line in &lines {
            let x = snap(line.x);
            Self::stroke_gridline(
                canvas,
                Vec2::new(x, plot.bottom + 0.5),
                Vec2::new(x, plot.top),
            );

            canvas.draw_text(
                Vec2::new(line.x - TIME_LABEL_SHIFT, plot.bottom + LABEL_PADDING),
                &line.label,
                &self.config.font,
            );

            margins.grow_bottom(line.extent.height + LABEL_PADDING);
        }
    }

    fn draw_value_grid(
        &self,
        canvas: &mut impl Canvas,
        geometry: &FrameGeometry,
        mapper: &CoordinateMapper,
        measurer: &dyn TextMeasurer,
        margins: &mut Margins,
    ) {
        let plot = &geometry.plot;
        let lines = grid::value_gridlines(mapper, &self.config, measurer);

        for line in &lines {
            let y = snap(line.y);
            Self::stroke_gridline(canvas, Vec2::new(plot.left, y), Vec2::new(plot.right, y));

            let label_x = plot.left - line.extent.width - LABEL_PADDING;
            canvas.draw_text(
                Vec2::new(label_x, line.y - LABEL_PADDING),
                &line.label,
                &self.config.font,
            );

            if label_x < MIN_LABEL_X {
                margins.grow_left(line.extent.width + LABEL_PADDING + MIN_LABEL_X);
            }
        }
    }

    fn stroke_gridline(canvas: &mut impl Canvas, from: Vec2, to: Vec2) {
        canvas.save();
        canvas.set_dash(&DashPattern::dotted(1.0));
        canvas.set_line_width(GRID_LINE_WIDTH);
        canvas.move_to(from);
        canvas.line_to(to);
        canvas.stroke();
        canvas.restore();
    }

    fn draw_title(&self, canvas: &mut impl Canvas, geometry: &FrameGeometry, measurer: &dyn TextMeasurer) {
        let title = &self.config.y_axis_title;
        if title.is_empty() {
            return;
        }

        let extent = measurer.measure(title, &self.config.font);
        let y = geometry.plot.body_height() / 2.0 + extent.width / 2.0;
        canvas.draw_text_vertical(Vec2::new(TITLE_X, y), title, &self.config.font);
    }

    fn draw_sources(
        &self,
        canvas: &mut impl Canvas,
        plot: &PlotArea,
        mapper: &CoordinateMapper,
        sources: &[&dyn Graphable],
    ) {
        for source in sources {
            if !source.visible() {
                continue;
            }
            let Some(series) = source.series(&self.config.series_name) else {
                tracing::trace!(
                    "Source '{}' has no sub-series '{}'",
                    source.name(),
                    self.config.series_name
                );
                continue;
            };
            if series.len() < 2 {
                continue;
            }

            canvas.save();
            canvas.rectangle(plot.rect());
            canvas.clip();
            canvas.set_line_width(self.config.line_width);
            canvas.set_color(source.color());
            let segments = trace_series(canvas, series, mapper);
            canvas.stroke();
            canvas.restore();

            tracing::trace!(
                "Series '{}': {} samples, {} segments",
                source.name(),
                series.len(),
                segments
            );
        }
    }

    fn draw_legend(
        &self,
        canvas: &mut impl Canvas,
        plot: &PlotArea,
        sources: &[&dyn Graphable],
        measurer: &dyn TextMeasurer,
    ) {
        let legend = LegendLayout::compute(sources, plot, measurer, &self.config.font);
        if legend.is_empty() {
            return;
        }

        canvas.set_color(BACKGROUND_COLOR);
        canvas.rectangle(legend.frame);
        canvas.fill();

        for entry in &legend.entries {
            canvas.set_color(entry.color);
            canvas.draw_text(entry.origin, &entry.label, &self.config.font);
        }
    }
}

/// Append the smoothed path of `series` to the canvas's current path.
///
/// Each point after the first is drawn at the mean of its own y and the two
/// previous raw y values. Points left of the canvas origin break the line
/// with a move to `x = 0` and leave the smoothing history alone. Returns the
/// number of line segments added.
pub fn trace_series<C: Canvas + ?Sized>(
    canvas: &mut C,
    series: &Series,
    mapper: &CoordinateMapper,
) -> usize {
    let mut samples = series.iter();
    let Some(first) = samples.next() else {
        return 0;
    };

    let mut y_prev1 = mapper.value_to_position(first.value);
    let mut y_prev2 = y_prev1;
    canvas.move_to(Vec2::new(mapper.time_to_position(first.time), y_prev1));

    let mut segments = 0;
    for sample in samples {
        let x = mapper.time_to_position(sample.time);
        let y = mapper.value_to_position(sample.value);
        if x < 0.0 {
            canvas.move_to(Vec2::new(0.0, y));
            continue;
        }

        let smoothed = (y + y_prev1 + y_prev2) / 3.0;
        canvas.line_to(Vec2::new(x, smoothed));
        segments += 1;

        y_prev2 = y_prev1;
        y_prev1 = y;
    }
    segments
}
