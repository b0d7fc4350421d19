//! Data sources that can be plotted on a strip chart.
//!
//! A [`Graphable`] is anything with a name, a colour, a visibility flag and a
//! set of named [`Series`]. The chart only ever reads sources through this
//! trait; [`TelemetrySource`] is the stock implementation that owns its
//! samples in a [`SeriesMap`].

use stripchart_core::Color;
use stripchart_core::alloc::HashMap;

use crate::series::{Sample, Series};

/// Sub-series keyed by name, created lazily on first access.
#[derive(Debug, Clone, Default)]
pub struct SeriesMap {
    series: HashMap<String, Series>,
}

impl SeriesMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the series called `name`, creating an empty one if needed.
    ///
    /// Repeated calls with the same name always hand back the same series.
    pub fn get_or_create(&mut self, name: &str) -> &mut Series {
        self.series.entry(name.to_owned()).or_insert_with(|| {
            tracing::debug!("Creating sub-series '{}'", name);
            Series::new()
        })
    }

    /// Look up a series without creating it.
    pub fn get(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.series.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.series.len()
    }

    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Names of all sub-series, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.series.keys().map(String::as_str)
    }
}

/// A plottable data source.
pub trait Graphable {
    /// Label shown in the legend.
    fn name(&self) -> &str;

    /// Colour used for the plotted line and the legend entry.
    fn color(&self) -> Color;

    /// Hidden sources keep their legend entry but are not plotted.
    fn visible(&self) -> bool {
        true
    }

    /// The sub-series called `name`, if the source has one.
    fn series(&self, name: &str) -> Option<&Series>;
}

impl<G: Graphable + ?Sized> Graphable for Box<G> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn color(&self) -> Color {
        (**self).color()
    }

    fn visible(&self) -> bool {
        (**self).visible()
    }

    fn series(&self, name: &str) -> Option<&Series> {
        (**self).series(name)
    }
}

/// A named telemetry feed with one or more sub-series.
///
/// # Example
///
/// ```
/// use stripchart::{Graphable, TelemetrySource};
/// use stripchart_core::Color;
///
/// let mut cpu = TelemetrySource::new("cpu0", Color::RED);
/// cpu.record("usage", 0.0, 12.5);
/// cpu.record("usage", 1.0, 18.0);
///
/// assert_eq!(cpu.series("usage").map(|s| s.len()), Some(2));
/// assert!(cpu.series("steal").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct TelemetrySource {
    name: String,
    color: Color,
    visible: bool,
    series: SeriesMap,
}

impl TelemetrySource {
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
            visible: true,
            series: SeriesMap::new(),
        }
    }

    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Mutable access to a sub-series, creating it on first use.
    pub fn series_mut(&mut self, name: &str) -> &mut Series {
        self.series.get_or_create(name)
    }

    /// Append a reading to the named sub-series.
    pub fn record(&mut self, subseries: &str, time: f64, value: f32) {
        self.series_mut(subseries).push(Sample::new(time, value));
    }

    pub fn series_map(&self) -> &SeriesMap {
        &self.series
    }
}

impl Graphable for TelemetrySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn color(&self) -> Color {
        self.color
    }

    fn visible(&self) -> bool {
        self.visible
    }

    fn series(&self, name: &str) -> Option<&Series> {
        self.series.get(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_is_idempotent() {
        let mut map = SeriesMap::new();
        map.get_or_create("load").push_value(0.0, 1.0);
        map.get_or_create("load").push_value(1.0, 2.0);

        assert_eq!(map.len(), 1);
        assert_eq!(map.get("load").map(Series::len), Some(2));
    }

    #[test]
    fn test_get_does_not_create() {
        let map = SeriesMap::new();
        assert!(map.get("missing").is_none());
        assert!(map.is_empty());
    }

    #[test]
    fn test_names() {
        let mut map = SeriesMap::new();
        map.get_or_create("a");
        map.get_or_create("b");
        let mut names: Vec<&str> = map.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[test]
    fn test_telemetry_source_visibility_and_color() {
        let mut source = TelemetrySource::new("disk", Color::BLUE).with_visible(false);
        assert!(!source.visible());

        source.set_visible(true);
        source.set_color(Color::GREEN);
        assert!(source.visible());
        assert_eq!(source.color(), Color::GREEN);
        assert_eq!(source.name(), "disk");
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut source = TelemetrySource::new("net", Color::RED);
        source.record("rx", 0.0, 5.0);
        let boxed: Box<dyn Graphable> = Box::new(source);

        assert_eq!(boxed.name(), "net");
        assert_eq!(boxed.series("rx").map(Series::len), Some(1));
    }
}
