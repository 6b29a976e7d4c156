//! RGBA colors for palette breakpoints.

use serde::{Deserialize, Serialize};

use crate::error::HeatmapError;

/// An 8-bit RGBA color.
///
/// Deserializes from `"#RRGGBB"`/`"#RRGGBBAA"`, `[r, g, b]`/`[r, g, b, a]` or
/// `{ r, g, b, a }` (alpha optional). Always serializes as the object form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "ColorRepr")]
pub struct ColorRgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl ColorRgba {
    pub const BLACK: ColorRgba = ColorRgba::rgb(0, 0, 0);
    pub const RED: ColorRgba = ColorRgba::rgb(255, 0, 0);
    pub const YELLOW: ColorRgba = ColorRgba::rgb(255, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Fully opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA` (leading `#` optional).
    pub fn from_hex(s: &str) -> Result<Self, HeatmapError> {
        let hex = s.trim_start_matches('#');
        let channel = |i: usize| {
            hex.get(i..i + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
                .ok_or_else(|| HeatmapError::InvalidColor(s.to_string()))
        };

        match hex.len() {
            6 => Ok(Self::rgb(channel(0)?, channel(2)?, channel(4)?)),
            8 => Ok(Self::new(channel(0)?, channel(2)?, channel(4)?, channel(6)?)),
            _ => Err(HeatmapError::InvalidColor(s.to_string())),
        }
    }

    /// `#RRGGBB` when opaque, `#RRGGBBAA` otherwise.
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Accepted input forms for a color.
#[derive(Deserialize)]
#[serde(untagged)]
enum ColorRepr {
    Hex(String),
    Array(Vec<u8>),
    Rgba {
        r: u8,
        g: u8,
        b: u8,
        #[serde(default = "opaque")]
        a: u8,
    },
}

fn opaque() -> u8 {
    255
}

impl TryFrom<ColorRepr> for ColorRgba {
    type Error = HeatmapError;

    fn try_from(repr: ColorRepr) -> Result<Self, Self::Error> {
        match repr {
            ColorRepr::Hex(s) => ColorRgba::from_hex(&s),
            ColorRepr::Array(arr) => match arr.as_slice() {
                [r, g, b] => Ok(ColorRgba::rgb(*r, *g, *b)),
                [r, g, b, a] => Ok(ColorRgba::new(*r, *g, *b, *a)),
                _ => Err(HeatmapError::InvalidColor(format!(
                    "expected 3 or 4 channels, got {}",
                    arr.len()
                ))),
            },
            ColorRepr::Rgba { r, g, b, a } => Ok(ColorRgba::new(r, g, b, a)),
        }
    }
}
