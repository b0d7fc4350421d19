//! Time-ordered sample storage.

/// A single timestamped reading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sample {
    /// Seconds, on the same clock the chart is rendered against.
    pub time: f64,
    pub value: f32,
}

impl Sample {
    pub fn new(time: f64, value: f32) -> Self {
        Self { time, value }
    }
}

impl From<(f64, f32)> for Sample {
    fn from((time, value): (f64, f32)) -> Self {
        Self::new(time, value)
    }
}

/// Append-only sequence of samples for one data feed.
///
/// Samples are expected to arrive in non-decreasing time order; the series
/// does not sort or deduplicate them. Nothing is ever evicted, so a
/// long-running feed grows without bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Append a sample to the end of the series.
    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// Append a `(time, value)` reading.
    pub fn push_value(&mut self, time: f64, value: f32) {
        self.push(Sample::new(time, value));
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn first(&self) -> Option<&Sample> {
        self.samples.first()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn as_slice(&self) -> &[Sample] {
        &self.samples
    }
}

impl<'a> IntoIterator for &'a Series {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}

impl Extend<Sample> for Series {
    fn extend<I: IntoIterator<Item = Sample>>(&mut self, iter: I) {
        self.samples.extend(iter);
    }
}

impl FromIterator<Sample> for Series {
    fn from_iter<I: IntoIterator<Item = Sample>>(iter: I) -> Self {
        Self {
            samples: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_preserves_order() {
        let mut series = Series::new();
        series.push_value(1.0, 10.0);
        series.push(Sample::new(2.0, 20.0));
        series.push((3.0, 30.0).into());

        let times: Vec<f64> = series.iter().map(|s| s.time).collect();
        assert_eq!(times, vec![1.0, 2.0, 3.0]);
        assert_eq!(series.first(), Some(&Sample::new(1.0, 10.0)));
        assert_eq!(series.last(), Some(&Sample::new(3.0, 30.0)));
    }

    #[test]
    fn test_empty_series() {
        let series = Series::new();
        assert!(series.is_empty());
        assert_eq!(series.len(), 0);
        assert!(series.first().is_none());
    }

    #[test]
    fn test_collect_and_extend() {
        let mut series: Series = (0..3).map(|i| Sample::new(i as f64, i as f32)).collect();
        series.extend([Sample::new(3.0, 3.0)]);
        assert_eq!(series.len(), 4);
        assert_eq!(series.as_slice()[3].value, 3.0);
    }
}
