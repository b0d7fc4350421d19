//! Deterministic text measurement.

use parking_lot::Mutex;
use stripchart::{FontSpec, TextExtent, TextMeasurer};

/// Measures every glyph as `char_width` wide and every line as
/// `line_height` tall, ignoring the font.
///
/// # Interior Mutability
///
/// [`TextMeasurer::measure`] takes `&self`, so the log of measured strings
/// sits behind a `Mutex`.
#[derive(Debug)]
pub struct FixedMetrics {
    pub char_width: f32,
    pub line_height: f32,
    measured: Mutex<Vec<String>>,
}

impl FixedMetrics {
    pub fn new(char_width: f32, line_height: f32) -> Self {
        Self {
            char_width,
            line_height,
            measured: Mutex::new(Vec::new()),
        }
    }

    /// Every string measured so far, in call order.
    pub fn measured(&self) -> Vec<String> {
        self.measured.lock().clone()
    }

    pub fn measure_count(&self) -> usize {
        self.measured.lock().len()
    }

    pub fn was_measured(&self, text: &str) -> bool {
        self.measured.lock().iter().any(|t| t == text)
    }

    pub fn clear(&self) {
        self.measured.lock().clear();
    }
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self::new(6.0, 10.0)
    }
}

impl TextMeasurer for FixedMetrics {
    fn measure(&self, text: &str, _font: &FontSpec) -> TextExtent {
        self.measured.lock().push(text.to_owned());
        TextExtent::new(
            text.chars().count() as f32 * self.char_width,
            self.line_height,
        )
    }
}
