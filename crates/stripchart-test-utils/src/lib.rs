//! Test utilities for stripchart.
//!
//! - [`RecordingCanvas`] - a [`Canvas`](stripchart::Canvas) that resolves
//!   each stroke, fill and text call against the graphics state in effect,
//!   so tests can assert on what would actually appear on screen
//! - [`FixedMetrics`] - a [`TextMeasurer`](stripchart::TextMeasurer) with
//!   fixed glyph sizes that remembers every string it measured
//!
//! # Example
//!
//! ```rust
//! use stripchart::{ChartConfig, StripChart, Viewport};
//! use stripchart_test_utils::{FixedMetrics, RecordingCanvas};
//!
//! let chart = StripChart::new(ChartConfig::default()).unwrap();
//! let metrics = FixedMetrics::new(6.0, 10.0);
//! let mut canvas = RecordingCanvas::new();
//!
//! chart.render_to(
//!     &mut canvas,
//!     chart.initial_layout(),
//!     0.0,
//!     Some(Viewport::new(400.0, 300.0)),
//!     &[],
//!     &metrics,
//! );
//!
//! assert!(canvas.is_balanced());
//! assert!(metrics.measure_count() > 0);
//! ```

pub mod metrics;
pub mod recording_canvas;

pub use metrics::*;
pub use recording_canvas::*;
