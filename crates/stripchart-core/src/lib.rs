//! Stripchart Core
//!
//! Shared plumbing for the stripchart crates: logging setup, profiling scopes,
//! hash collections and the colour type used by every drawing call.

pub mod alloc;
pub mod color;
pub mod logging;
pub mod profiling;

pub use color::Color;
