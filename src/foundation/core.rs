use std::fmt;
use std::str::FromStr;

use crate::foundation::error::{DeckbarError, DeckbarResult};

pub use kurbo::{Point, Rect, Size};

/// English Metric Units per inch, the length unit of slide documents.
pub const EMU_PER_INCH: f64 = 914_400.0;

/// Convert a length in inches to EMU.
pub fn inches_to_emu(inches: f64) -> f64 {
    inches * EMU_PER_INCH
}

/// Zero-based page (slide) index.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct PageIndex(pub usize);

impl fmt::Display for PageIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Slide dimensions in EMU.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SlideSize {
    pub width: f64,
    pub height: f64,
}

impl SlideSize {
    pub fn new(width: f64, height: f64) -> DeckbarResult<Self> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(DeckbarError::validation(format!(
                "slide size must be positive and finite, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }
}

/// Opaque 8-bit RGB color. Serialized as `#rrggbb`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse `RRGGBB`, with or without a leading `#` (case-insensitive).
    pub fn from_hex(s: &str) -> DeckbarResult<Self> {
        let s = s.trim();
        let digits = s.strip_prefix('#').unwrap_or(s);
        // `from_str_radix` alone would accept a sign in each pair.
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(DeckbarError::validation(format!(
                "hex color must be RRGGBB, got \"{s}\""
            )));
        }

        fn hex_byte(pair: &str) -> DeckbarResult<u8> {
            u8::from_str_radix(pair, 16)
                .map_err(|_| DeckbarError::validation(format!("invalid hex byte \"{pair}\"")))
        }

        Ok(Self {
            r: hex_byte(&digits[0..2])?,
            g: hex_byte(&digits[2..4])?,
            b: hex_byte(&digits[4..6])?,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb8 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb8 {
    type Err = DeckbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hex(s)
    }
}

impl serde::Serialize for Rgb8 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> serde::Deserialize<'de> for Rgb8 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

/// Which slide edge the bar is attached to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Orientation {
    Top,
    #[default]
    Bottom,
    Left,
    Right,
}

impl Orientation {
    pub const ALL: [Orientation; 4] = [Self::Top, Self::Bottom, Self::Left, Self::Right];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// True when the bar runs along the slide width.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }

    /// Extent of the along-the-bar axis for a slide.
    pub fn along_extent(self, size: SlideSize) -> f64 {
        if self.is_horizontal() {
            size.width
        } else {
            size.height
        }
    }

    /// Extent of the across-the-bar axis for a slide.
    pub fn across_extent(self, size: SlideSize) -> f64 {
        if self.is_horizontal() {
            size.height
        } else {
            size.width
        }
    }

    /// True when the bar hugs the far edge (bottom or right) of the across axis.
    pub fn is_far_edge(self) -> bool {
        matches!(self, Self::Bottom | Self::Right)
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Orientation {
    type Err = DeckbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "top" => Ok(Self::Top),
            "bottom" => Ok(Self::Bottom),
            "left" => Ok(Self::Left),
            "right" => Ok(Self::Right),
            other => Err(DeckbarError::invalid_orientation(format!(
                "\"{other}\" is not one of: top, bottom, left, right"
            ))),
        }
    }
}

impl serde::Serialize for Orientation {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> serde::Deserialize<'de> for Orientation {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
