//! Hash collections used across stripchart.
//!
//! AHash-backed maps and sets under the std names. Sub-series are looked up by
//! name once per source every frame.

pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
