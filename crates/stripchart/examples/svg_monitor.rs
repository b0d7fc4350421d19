//! Headless Telemetry Monitor
//!
//! This example demonstrates:
//! - Recording synthetic CPU and temperature feeds into telemetry sources
//! - Driving redraws from a `RefreshDriver` on a plain thread
//! - Threading the sticky layout from one frame to the next
//! - Implementing `Canvas` for a custom backend (SVG)
//!
//! Simulated time advances one second per tick so a couple of minutes of
//! history are produced in a few seconds.
//!
//! Run with: cargo run -p stripchart --example svg_monitor -- [out.svg] [chart.toml]

use std::fmt::Write as _;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use glam::Vec2;
use stripchart::{
    Canvas, ChartConfig, Clock, DashPattern, FontSpec, Graphable, ManualClock, MonospaceMeasurer,
    Rect, RefreshDriver, StripChart, TelemetrySource, Viewport,
};
use stripchart_core::Color;
use stripchart_core::logging;
use stripchart_core::profiling::{ProfilingBackend, init_profiling, new_frame};

const TICKS: u64 = 150;

#[derive(Debug, Clone)]
struct SvgState {
    color: Color,
    line_width: f32,
    dash: Vec<f32>,
    clip: Option<usize>,
}

/// Writes canvas calls out as SVG elements.
struct SvgCanvas {
    viewport: Viewport,
    defs: String,
    body: String,
    path: String,
    path_rect: Option<Rect>,
    state: SvgState,
    stack: Vec<SvgState>,
    clips: usize,
}

impl SvgCanvas {
    fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            defs: String::new(),
            body: String::new(),
            path: String::new(),
            path_rect: None,
            state: SvgState {
                color: Color::BLACK,
                line_width: 1.0,
                dash: Vec::new(),
                clip: None,
            },
            stack: Vec::new(),
            clips: 0,
        }
    }

    fn rgb(color: Color) -> String {
        let [r, g, b] = color.to_rgb_array().map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    fn clip_attr(&self) -> String {
        self.state
            .clip
            .map(|id| format!(" clip-path=\"url(#clip{})\"", id))
            .unwrap_or_default()
    }

    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    fn finish(self) -> String {
        format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{}\" height=\"{}\">\n<defs>\n{}</defs>\n{}</svg>\n",
            self.viewport.width, self.viewport.height, self.defs, self.body
        )
    }
}

impl Canvas for SvgCanvas {
    fn save(&mut self) {
        self.stack.push(self.state.clone());
    }

    fn restore(&mut self) {
        if let Some(state) = self.stack.pop() {
            self.state = state;
        }
    }

    fn rectangle(&mut self, rect: Rect) {
        let _ = write!(
            self.path,
            "M{} {}h{}v{}h{}Z",
            rect.x, rect.y, rect.width, rect.height, -rect.width
        );
        self.path_rect = Some(rect);
    }

    fn clip(&mut self) {
        // only rectangular clips are produced by the chart
        if let Some(rect) = self.path_rect.take() {
            self.clips += 1;
            let _ = writeln!(
                self.defs,
                "<clipPath id=\"clip{}\"><rect x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"/></clipPath>",
                self.clips, rect.x, rect.y, rect.width, rect.height
            );
            self.state.clip = Some(self.clips);
        }
        self.path.clear();
    }

    fn move_to(&mut self, point: Vec2) {
        let _ = write!(self.path, "M{} {}", point.x, point.y);
    }

    fn line_to(&mut self, point: Vec2) {
        let _ = write!(self.path, "L{} {}", point.x, point.y);
    }

    fn close_path(&mut self) {
        self.path.push('Z');
    }

    fn stroke(&mut self) {
        let dash = if self.state.dash.is_empty() {
            String::new()
        } else {
            let parts: Vec<String> = self.state.dash.iter().map(|d| d.to_string()).collect();
            format!(" stroke-dasharray=\"{}\"", parts.join(","))
        };
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"{}{}/>",
            self.path,
            Self::rgb(self.state.color),
            self.state.line_width,
            dash,
            self.clip_attr()
        );
        self.path.clear();
        self.path_rect = None;
    }

    fn fill(&mut self) {
        let _ = writeln!(
            self.body,
            "<path d=\"{}\" fill=\"{}\"{}/>",
            self.path,
            Self::rgb(self.state.color),
            self.clip_attr()
        );
        self.path.clear();
        self.path_rect = None;
    }

    fn set_color(&mut self, color: Color) {
        self.state.color = color;
    }

    fn set_line_width(&mut self, width: f32) {
        self.state.line_width = width;
    }

    fn set_dash(&mut self, dash: &DashPattern) {
        self.state.dash = dash.segments.clone();
    }

    fn draw_text(&mut self, origin: Vec2, text: &str, font: &FontSpec) {
        let _ = writeln!(
            self.body,
            "<text x=\"{}\" y=\"{}\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\" dominant-baseline=\"hanging\"{}>{}</text>",
            origin.x,
            origin.y,
            font.family,
            font.size,
            Self::rgb(self.state.color),
            self.clip_attr(),
            Self::escape(text)
        );
    }

    fn draw_text_vertical(&mut self, origin: Vec2, text: &str, font: &FontSpec) {
        let _ = writeln!(
            self.body,
            "<text transform=\"translate({} {}) rotate(-90)\" font-family=\"{}\" font-size=\"{}\" fill=\"{}\" dominant-baseline=\"hanging\">{}</text>",
            origin.x,
            origin.y,
            font.family,
            font.size,
            Self::rgb(self.state.color),
            Self::escape(text)
        );
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    init_profiling(ProfilingBackend::InProcess);

    let mut args = std::env::args().skip(1);
    let output = args.next().unwrap_or_else(|| "stripchart.svg".to_owned());
    let config = match args.next() {
        Some(path) => ChartConfig::from_file(path)?,
        None => ChartConfig::default()
            .with_series_name("value")
            .with_redlines(-1.0, 85.0)
            .with_y_axis_title("Utilization")
            .with_time_axis(5.0, 15.0),
    };

    let chart = StripChart::new(config)?;
    let series_name = chart.config().series_name.clone();
    let viewport = Viewport::new(640.0, 320.0);
    let measurer = MonospaceMeasurer::default();
    let clock = ManualClock::new(0.0);

    let mut cpu = TelemetrySource::new("cpu", Color::from_hex(0xCC2222));
    let mut temperature = TelemetrySource::new("temperature", Color::from_hex(0x2255AA));

    let mut layout = chart.initial_layout();
    let mut last_frame = None;
    let stop = AtomicBool::new(false);
    let mut driver = RefreshDriver::new(Duration::from_millis(10));

    driver.run(&stop, |tick| {
        new_frame();
        clock.advance(1.0);
        let now = clock.now();
        let phase = tick as f32 * 0.08;
        cpu.record(&series_name, now, 50.0 + 35.0 * phase.sin() + 5.0 * (phase * 7.0).sin());
        temperature.record(&series_name, now, 60.0 + 20.0 * (phase * 0.5).cos());

        let sources: [&dyn Graphable; 2] = [&cpu, &temperature];
        let frame = chart.render_frame(layout, now, Some(viewport), &sources, &measurer);
        layout = frame.layout;
        last_frame = Some(frame);

        if tick >= TICKS {
            stop.store(true, Ordering::Relaxed);
        }
    });

    let Some(frame) = last_frame else {
        return Err("no frame was rendered".into());
    };

    let mut canvas = SvgCanvas::new(viewport);
    frame.commands.replay(&mut canvas);
    std::fs::write(&output, canvas.finish())?;

    tracing::info!(
        "Wrote {} ({} draw commands, margins {:?})",
        output,
        frame.commands.len(),
        layout.margins
    );
    Ok(())
}
