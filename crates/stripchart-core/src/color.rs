use serde::{Deserialize, Serialize};

/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// Charts only ever need opaque RGB, but the alpha channel is kept so a canvas
/// backend can pass colours straight through to its toolkit.
///
/// ```
/// use stripchart_core::Color;
///
/// let redline = Color::rgb(1.0, 0.8, 0.8);
/// let from_hex = Color::from_hex(0xFF8800);
/// let from_bytes = Color::from_rgb_u8(128, 64, 32);
/// assert_eq!(from_hex, Color::from_rgb_u8(0xFF, 0x88, 0x00));
/// # let _ = (redline, from_bytes);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    #[serde(default = "opaque")]
    pub a: f32,
}

fn opaque() -> f32 {
    1.0
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    /// Create a color from RGB components with full opacity (alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create a color from 8-bit RGB values (0–255 mapped to 0.0–1.0).
    pub fn from_rgb_u8(r: u8, g: u8, b: u8) -> Self {
        Self::rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Create a color from 16-bit RGB values, as handed out by GDK-style toolkits.
    pub fn from_rgb_u16(r: u16, g: u16, b: u16) -> Self {
        Self::rgb(
            r as f32 / 65535.0,
            g as f32 / 65535.0,
            b as f32 / 65535.0,
        )
    }

    /// Create a color from a 24-bit RGB hex value (e.g. `0xFF8800`).
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as u8;
        let g = ((hex >> 8) & 0xFF) as u8;
        let b = (hex & 0xFF) as u8;
        Self::from_rgb_u8(r, g, b)
    }

    /// Convert to an `[r, g, b]` array, dropping alpha.
    pub fn to_rgb_array(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[f32; 3]> for Color {
    fn from(arr: [f32; 3]) -> Self {
        Self::rgb(arr[0], arr[1], arr[2])
    }
}
