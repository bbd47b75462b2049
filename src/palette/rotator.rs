use std::sync::Arc;

use crate::foundation::{
    core::Rgb8,
    error::{DeckbarError, DeckbarResult},
};

/// Chapter colors used when none are configured.
pub const DEFAULT_CHAPTER_COLORS: [Rgb8; 4] = [
    Rgb8::new(0x54, 0x0d, 0x6e),
    Rgb8::new(0xee, 0x42, 0x66),
    Rgb8::new(0xff, 0xd2, 0x3f),
    Rgb8::new(0x3b, 0xce, 0xac),
];

/// Ordered, non-empty list of colors shared read-only between rotators.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Palette(Arc<[Rgb8]>);

impl Default for Palette {
    fn default() -> Self {
        Self(Arc::from(DEFAULT_CHAPTER_COLORS))
    }
}

impl Palette {
    pub fn new(colors: impl Into<Vec<Rgb8>>) -> DeckbarResult<Self> {
        let colors: Vec<Rgb8> = colors.into();
        if colors.is_empty() {
            return Err(DeckbarError::invalid_palette(
                "palette must contain at least one color",
            ));
        }
        Ok(Self(colors.into()))
    }

    /// Build a palette from `RRGGBB` strings.
    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> DeckbarResult<Self> {
        let parsed = colors
            .iter()
            .map(|c| {
                Rgb8::from_hex(c.as_ref())
                    .map_err(|e| DeckbarError::invalid_palette(e.to_string()))
            })
            .collect::<DeckbarResult<Vec<_>>>()?;
        Self::new(parsed)
    }

    /// A one-color palette; the bar background uses one of these.
    pub fn solid(color: Rgb8) -> Self {
        Self(Arc::from([color]))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[Rgb8] {
        &self.0
    }

    pub fn rotator(&self) -> ColorRotator {
        ColorRotator::new(self.clone())
    }
}

/// Round-robin cursor over a [`Palette`].
#[derive(Clone, Debug)]
pub struct ColorRotator {
    palette: Palette,
    cursor: usize,
}

impl ColorRotator {
    pub fn new(palette: Palette) -> Self {
        Self { palette, cursor: 0 }
    }

    pub fn current(&self) -> Rgb8 {
        self.palette.0[self.cursor]
    }

    pub fn advance(&mut self) {
        self.cursor = (self.cursor + 1) % self.palette.len();
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
#[path = "../../tests/unit/palette/rotator.rs"]
mod tests;
