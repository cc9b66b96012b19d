use serde::{Deserialize, Serialize};

use crate::error::{PaintError, PaintResult};

/// Maximum per-channel distance at which two colors still count as the same
/// region during a flood fill.
pub const FILL_TOLERANCE: u8 = 30;

/// An opaque RGB color. Every write into a pixel buffer is fully opaque, so
/// there is no alpha channel here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a `#RRGGBB` string. Hex digits are case-insensitive.
    pub fn from_hex(hex: &str) -> PaintResult<Self> {
        let invalid = || PaintError::InvalidHexColor(hex.to_owned());

        let digits = hex.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }

    /// Formats as lowercase `#rrggbb`
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// The pixel value written for this color (always alpha 255).
    pub fn to_rgba(self) -> image::Rgba<u8> {
        image::Rgba([self.r, self.g, self.b, 255])
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<[u8; 3]> for Color {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::rgb(r, g, b)
    }
}

impl From<Color> for egui::Color32 {
    fn from(color: Color) -> Self {
        egui::Color32::from_rgb(color.r, color.g, color.b)
    }
}

impl From<image::Rgba<u8>> for Color {
    fn from(pixel: image::Rgba<u8>) -> Self {
        let [r, g, b, _] = pixel.0;
        Self::rgb(r, g, b)
    }
}

/// True when every RGB channel of `a` and `b` differs by at most `tolerance`.
pub fn color_match(a: Color, b: Color, tolerance: u8) -> bool {
    a.r.abs_diff(b.r) <= tolerance
        && a.g.abs_diff(b.g) <= tolerance
        && a.b.abs_diff(b.b) <= tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tolerance_is_inclusive() {
        let base = Color::rgb(100, 100, 100);
        let edge = Color::rgb(130, 70, 130);
        assert!(color_match(base, edge, FILL_TOLERANCE));
    }

    #[test]
    fn test_one_past_tolerance_in_any_channel_fails() {
        let base = Color::rgb(100, 100, 100);
        assert!(!color_match(base, Color::rgb(131, 100, 100), FILL_TOLERANCE));
        assert!(!color_match(base, Color::rgb(100, 69, 100), FILL_TOLERANCE));
        assert!(!color_match(base, Color::rgb(100, 100, 131), FILL_TOLERANCE));
    }

    #[test]
    fn test_match_is_symmetric_near_channel_limits() {
        let a = Color::rgb(0, 255, 10);
        let b = Color::rgb(30, 225, 0);
        assert!(color_match(a, b, FILL_TOLERANCE));
        assert!(color_match(b, a, FILL_TOLERANCE));
    }

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Color::from_hex("#1A1F2C").unwrap(), Color::rgb(0x1a, 0x1f, 0x2c));
        assert_eq!(Color::from_hex("#ffd700").unwrap(), Color::rgb(255, 215, 0));
        assert_eq!(Color::rgb(155, 135, 245).to_hex(), "#9b87f5");
    }

    #[test]
    fn test_bad_hex_is_rejected() {
        for input in ["1A1F2C", "#1A1F2", "#1A1F2CC", "#GG0000", "", "#ééé"] {
            assert!(
                matches!(Color::from_hex(input), Err(PaintError::InvalidHexColor(_))),
                "{input:?} should not parse"
            );
        }
    }
}
