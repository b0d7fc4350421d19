//! Stripchart - scrolling real-time time-series charts
//!
//! This crate provides:
//! - Sample storage for named telemetry feeds ([`Series`], [`Graphable`])
//! - Value/time to pixel mapping with a sliding time window
//! - Layout with sticky margins sized from measured label text
//! - Frame rendering into a backend-neutral draw list ([`DrawList`], [`Canvas`])
//! - A fixed-rate [`RefreshDriver`] for hosts without their own timer
//!
//! # Example
//!
//! ```ignore
//! use stripchart::*;
//!
//! let chart = StripChart::new(ChartConfig::from_file("chart.toml")?)?;
//! let mut layout = chart.initial_layout();
//! let mut driver = RefreshDriver::from_config(chart.config());
//!
//! // In the host's event loop:
//! if driver.poll(std::time::Instant::now()) {
//!     let frame = chart.render_frame(layout, clock.now(), surface.size(), &sources, &measurer);
//!     frame.commands.replay(&mut surface);
//!     layout = frame.layout;
//! }
//! ```

// Data
mod graphable;
mod series;

// Geometry
mod layout;
mod mapper;
mod rect;
pub mod grid;

// Text and drawing
mod draw;
mod text;

// Chart
mod clock;
mod config;
mod error;
mod refresh;
mod renderer;

// Re-exports
pub use graphable::*;
pub use series::*;

pub use grid::DashPattern;
pub use layout::*;
pub use mapper::*;
pub use rect::*;

pub use draw::*;
pub use text::*;

pub use clock::*;
pub use config::*;
pub use error::*;
pub use refresh::*;
pub use renderer::*;
