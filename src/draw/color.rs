//! RGBA color type and the fixed signature palette.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Represents an RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum).
///
/// # Examples
///
/// ```
/// use sigpad::draw::Color;
/// let blue = Color::from_hex("#2563eb").unwrap();
/// assert!(blue.b > blue.r);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components.
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Parses `#rgb` or `#rrggbb` notation (the leading `#` is optional).
    ///
    /// Returns `None` for any other length or non-hex digit.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let channel = |s: &str| u8::from_str_radix(s, 16).ok().map(|v| v as f64 / 255.0);

        match digits.len() {
            3 => {
                let mut chars = digits.chars();
                let mut next = || {
                    let c = chars.next()?;
                    channel(&format!("{c}{c}"))
                };
                Some(Self::new(next()?, next()?, next()?, 1.0))
            }
            6 => Some(Self::new(
                channel(digits.get(0..2)?)?,
                channel(digits.get(2..4)?)?,
                channel(digits.get(4..6)?)?,
                1.0,
            )),
            _ => None,
        }
    }

    /// Applies this color as the cairo source.
    pub fn apply(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

/// Opaque white, the export background.
pub const WHITE: Color = Color::new(1.0, 1.0, 1.0, 1.0);

/// Light grey used underneath strokes while a reveal animation plays (#e0e0e0).
pub const REVEAL_BASE: Color = Color::new(224.0 / 255.0, 224.0 / 255.0, 224.0 / 255.0, 1.0);

/// The fixed set of pen colors offered by the style controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteColor {
    #[default]
    Black,
    Blue,
    Green,
    Yellow,
    Red,
}

impl PaletteColor {
    /// All palette entries in display order.
    pub const ALL: [PaletteColor; 5] = [
        PaletteColor::Black,
        PaletteColor::Blue,
        PaletteColor::Green,
        PaletteColor::Yellow,
        PaletteColor::Red,
    ];

    /// CSS hex value of this entry.
    pub fn hex(self) -> &'static str {
        match self {
            PaletteColor::Black => "#222",
            PaletteColor::Blue => "#2563eb",
            PaletteColor::Green => "#22c55e",
            PaletteColor::Yellow => "#eab308",
            PaletteColor::Red => "#ef4444",
        }
    }

    /// Human-readable name shown next to the swatches.
    pub fn name(self) -> &'static str {
        match self {
            PaletteColor::Black => "Black",
            PaletteColor::Blue => "Blue",
            PaletteColor::Green => "Green",
            PaletteColor::Yellow => "Yellow",
            PaletteColor::Red => "Red",
        }
    }

    /// Resolves a case-insensitive palette name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(name.trim()))
    }

    /// Resolves an exact palette hex value (case-insensitive).
    pub fn from_hex(hex: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|c| c.hex().eq_ignore_ascii_case(hex.trim()))
    }

    /// RGBA value for rendering.
    pub fn color(self) -> Color {
        // Palette literals are valid hex, parsing cannot fail.
        Color::from_hex(self.hex()).unwrap_or(Color::new(0.0, 0.0, 0.0, 1.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_short_and_long_hex() {
        let black = Color::from_hex("#222").unwrap();
        assert!((black.r - 34.0 / 255.0).abs() < 1e-12);
        assert_eq!(black.r, black.g);
        assert_eq!(black.a, 1.0);

        let red = Color::from_hex("ef4444").unwrap();
        assert!((red.r - 239.0 / 255.0).abs() < 1e-12);
        assert!((red.g - 68.0 / 255.0).abs() < 1e-12);
    }

    #[test]
    fn rejects_malformed_hex() {
        assert!(Color::from_hex("#12").is_none());
        assert!(Color::from_hex("#zzzzzz").is_none());
        assert!(Color::from_hex("").is_none());
    }

    #[test]
    fn palette_lookups() {
        assert_eq!(PaletteColor::from_name("green"), Some(PaletteColor::Green));
        assert_eq!(PaletteColor::from_name("BLUE"), Some(PaletteColor::Blue));
        assert_eq!(PaletteColor::from_name("orange"), None);
        assert_eq!(PaletteColor::from_hex("#2563EB"), Some(PaletteColor::Blue));
        assert_eq!(PaletteColor::default(), PaletteColor::Black);
        for entry in PaletteColor::ALL {
            assert_eq!(entry.color(), Color::from_hex(entry.hex()).unwrap());
        }
    }
}
