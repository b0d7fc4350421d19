//! Font descriptions and text measurement.
//!
//! The chart never rasterizes glyphs itself. It asks a [`TextMeasurer`] how
//! large a label will be, sizes its margins from the answer, and leaves the
//! actual drawing to the canvas backend.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Font weight keywords understood by [`FontSpec`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FontWeight {
    Light,
    #[default]
    Normal,
    Bold,
}

impl FontWeight {
    fn keyword(self) -> &'static str {
        match self {
            FontWeight::Light => "light",
            FontWeight::Normal => "normal",
            FontWeight::Bold => "bold",
        }
    }
}

/// A font description in the `"family [weight] [italic] size"` form used by
/// desktop toolkits, e.g. `"sans normal 8"` or `"DejaVu Sans Mono bold 10"`.
///
/// ```
/// use stripchart::FontSpec;
///
/// let font: FontSpec = "sans normal 8".parse().unwrap();
/// assert_eq!(font.family, "sans");
/// assert_eq!(font.size, 8.0);
/// assert_eq!(font.to_string(), "sans normal 8");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct FontSpec {
    pub family: String,
    pub weight: FontWeight,
    pub italic: bool,
    /// Point size.
    pub size: f32,
}

impl FontSpec {
    pub const DEFAULT_FAMILY: &'static str = "sans";
    pub const DEFAULT_SIZE: f32 = 8.0;

    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Self {
            family: family.into(),
            weight: FontWeight::Normal,
            italic: false,
            size,
        }
    }

    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_italic(mut self, italic: bool) -> Self {
        self.italic = italic;
        self
    }
}

impl Default for FontSpec {
    fn default() -> Self {
        Self::new(Self::DEFAULT_FAMILY, Self::DEFAULT_SIZE)
    }
}

impl FromStr for FontSpec {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.is_empty() {
            return Err(ConfigError::InvalidFont(s.to_owned()));
        }

        let mut size = Self::DEFAULT_SIZE;
        if let Some(last) = tokens.last()
            && let Ok(parsed) = last.parse::<f32>()
        {
            if !(parsed > 0.0 && parsed.is_finite()) {
                return Err(ConfigError::InvalidFont(s.to_owned()));
            }
            size = parsed;
            tokens.pop();
        }

        let mut weight = FontWeight::Normal;
        let mut italic = false;
        let mut family = Vec::new();
        for token in tokens {
            match token.to_ascii_lowercase().as_str() {
                "normal" | "regular" => weight = FontWeight::Normal,
                "bold" => weight = FontWeight::Bold,
                "light" => weight = FontWeight::Light,
                "italic" | "oblique" => italic = true,
                _ => family.push(token),
            }
        }

        let family = if family.is_empty() {
            Self::DEFAULT_FAMILY.to_owned()
        } else {
            family.join(" ")
        };

        Ok(Self {
            family,
            weight,
            italic,
            size,
        })
    }
}

impl TryFrom<String> for FontSpec {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<FontSpec> for String {
    fn from(font: FontSpec) -> Self {
        font.to_string()
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.family, self.weight.keyword())?;
        if self.italic {
            f.write_str(" italic")?;
        }
        write!(f, " {}", self.size)
    }
}

/// Pixel size of a laid-out string.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextExtent {
    pub width: f32,
    pub height: f32,
}

impl TextExtent {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Measures label text in pixels.
///
/// Implementations usually wrap the host toolkit's text-shaping engine.
pub trait TextMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> TextExtent;
}

impl<T: TextMeasurer + ?Sized> TextMeasurer for &T {
    fn measure(&self, text: &str, font: &FontSpec) -> TextExtent {
        (**self).measure(text, font)
    }
}

/// Approximates every glyph with the same advance.
///
/// Good enough for headless rendering and snapshots where no shaping engine
/// is available. Sizes are rounded up to whole pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonospaceMeasurer {
    /// Glyph advance as a fraction of the font size.
    pub advance_ratio: f32,
    /// Line height as a fraction of the font size.
    pub line_ratio: f32,
}

impl Default for MonospaceMeasurer {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_ratio: 1.25,
        }
    }
}

impl TextMeasurer for MonospaceMeasurer {
    fn measure(&self, text: &str, font: &FontSpec) -> TextExtent {
        let chars = text.chars().count() as f32;
        TextExtent {
            width: (chars * font.size * self.advance_ratio).ceil(),
            height: (font.size * self.line_ratio).ceil(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_default_description() {
        let font: FontSpec = "sans normal 8".parse().unwrap();
        assert_eq!(font, FontSpec::default());
    }

    #[test]
    fn test_parse_multi_word_family() {
        let font: FontSpec = "DejaVu Sans Mono Bold Italic 10.5".parse().unwrap();
        assert_eq!(font.family, "DejaVu Sans Mono");
        assert_eq!(font.weight, FontWeight::Bold);
        assert!(font.italic);
        assert_eq!(font.size, 10.5);
        assert_eq!(font.to_string(), "DejaVu Sans Mono bold italic 10.5");
    }

    #[test]
    fn test_parse_without_size() {
        let font: FontSpec = "monospace".parse().unwrap();
        assert_eq!(font.family, "monospace");
        assert_eq!(font.size, FontSpec::DEFAULT_SIZE);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            "".parse::<FontSpec>(),
            Err(ConfigError::InvalidFont(_))
        ));
        assert!(matches!(
            "sans 0".parse::<FontSpec>(),
            Err(ConfigError::InvalidFont(_))
        ));
    }

    #[test]
    fn test_monospace_measurer() {
        let measurer = MonospaceMeasurer::default();
        let font = FontSpec::default();

        // 4 glyphs * 8pt * 0.6 = 19.2, rounded up
        let extent = measurer.measure("0:10", &font);
        assert_eq!(extent, TextExtent::new(20.0, 10.0));
        assert_eq!(measurer.measure("", &font).width, 0.0);
    }
}
