use crate::{
    chapter::segmenter::Boundaries,
    foundation::core::{Orientation, PageIndex, Rect, Rgb8, SlideSize},
    foundation::error::{DeckbarError, DeckbarResult},
    palette::rotator::Palette,
};

/// Visual role of a bar segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SegmentRole {
    /// Progress made (completed chapters and the current chapter so far).
    Foreground,
    /// Remaining pages.
    Background,
}

impl SegmentRole {
    /// Short suffix used in shape tags.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Foreground => "fg",
            Self::Background => "bg",
        }
    }
}

/// One colored interval of the bar, in the along-the-bar axis.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Segment {
    pub offset: f64,
    pub length: f64,
    pub color: Rgb8,
    pub role: SegmentRole,
}

impl Segment {
    pub fn end(&self) -> f64 {
        self.offset + self.length
    }
}

/// Resolved bar dimensions for one slide size. Lengths are in slide units (EMU).
///
/// Built only through [`BarGeometry::new`], so the thickness always fits the
/// slide.
#[derive(Clone, Debug, PartialEq)]
pub struct BarGeometry {
    orientation: Orientation,
    slide: SlideSize,
    thickness: f64,
    bg_thickness: f64,
    bg_margin: f64,
    fg_palette: Palette,
    bg_palette: Palette,
}

impl BarGeometry {
    pub fn new(
        orientation: Orientation,
        slide: SlideSize,
        thickness: f64,
        bg_thickness_ratio: f64,
        fg_palette: Palette,
        bg_palette: Palette,
    ) -> DeckbarResult<Self> {
        if !(thickness.is_finite() && thickness > 0.0) {
            return Err(DeckbarError::validation(format!(
                "bar thickness must be positive, got {thickness}"
            )));
        }
        if !(bg_thickness_ratio > 0.0 && bg_thickness_ratio <= 1.0) {
            return Err(DeckbarError::validation(format!(
                "background thickness ratio must be in (0, 1], got {bg_thickness_ratio}"
            )));
        }
        let across = orientation.across_extent(slide);
        if thickness > across {
            return Err(DeckbarError::validation(format!(
                "bar thickness {thickness} exceeds the slide extent {across}"
            )));
        }

        let bg_thickness = thickness * bg_thickness_ratio;
        Ok(Self {
            orientation,
            slide,
            thickness,
            bg_thickness,
            bg_margin: (thickness - bg_thickness) / 2.0,
            fg_palette,
            bg_palette,
        })
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn slide(&self) -> SlideSize {
        self.slide
    }

    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    pub fn bg_thickness(&self) -> f64 {
        self.bg_thickness
    }

    /// Gap on each side of the background band inside the foreground band.
    pub fn bg_margin(&self) -> f64 {
        self.bg_margin
    }

    pub fn fg_palette(&self) -> &Palette {
        &self.fg_palette
    }

    pub fn bg_palette(&self) -> &Palette {
        &self.bg_palette
    }

    /// Full extent of the bar along its axis.
    pub fn bar_length(&self) -> f64 {
        self.orientation.along_extent(self.slide)
    }

    /// One page's share of the bar.
    pub fn unit_size(&self, total_pages: usize) -> DeckbarResult<f64> {
        if total_pages == 0 {
            return Err(DeckbarError::EmptyDeck);
        }
        Ok(self.bar_length() / total_pages as f64)
    }

    /// Map an along-axis segment to a rectangle in slide coordinates.
    pub fn place(&self, segment: &Segment) -> Rect {
        let (band, inset) = match segment.role {
            SegmentRole::Foreground => (self.thickness, 0.0),
            SegmentRole::Background => (self.bg_thickness, self.bg_margin),
        };
        let across_pos = if self.orientation.is_far_edge() {
            self.orientation.across_extent(self.slide) - band - inset
        } else {
            inset
        };

        if self.orientation.is_horizontal() {
            Rect::new(
                segment.offset,
                across_pos,
                segment.end(),
                across_pos + band,
            )
        } else {
            Rect::new(
                across_pos,
                segment.offset,
                across_pos + band,
                segment.end(),
            )
        }
    }
}

/// Compute the bar segments drawn on `page`.
///
/// Whole chapters before the current one come first, each in the next chapter
/// color, then the current chapter up to and including `page`, then the
/// remaining pages in the background color. Colors restart from the first
/// palette entry on every page.
pub fn layout_page(
    page: PageIndex,
    boundaries: &Boundaries,
    geometry: &BarGeometry,
) -> DeckbarResult<Vec<Segment>> {
    let total_pages = boundaries.total_pages();
    let unit = geometry.unit_size(total_pages)?;
    let current = boundaries.chapter_of(page).ok_or_else(|| {
        DeckbarError::validation(format!(
            "page {page} is outside a deck of {total_pages} pages"
        ))
    })?;

    let mut fg = geometry.fg_palette.rotator();
    let bg = geometry.bg_palette.rotator();
    let mut segments = Vec::with_capacity(current + 2);
    let mut offset = 0.0;

    for pages in (0..current).filter_map(|idx| boundaries.chapter_len(idx)) {
        let length = unit * pages as f64;
        segments.push(Segment {
            offset,
            length,
            color: fg.current(),
            role: SegmentRole::Foreground,
        });
        fg.advance();
        offset += length;
    }

    // Pages are counted 1-based here: the current chapter includes `page`.
    let through = page.0 + 1;
    let length = unit * (through - boundaries.as_slice()[current].start.0) as f64;
    segments.push(Segment {
        offset,
        length,
        color: fg.current(),
        role: SegmentRole::Foreground,
    });
    offset += length;

    segments.push(Segment {
        offset,
        length: unit * (total_pages - through) as f64,
        color: bg.current(),
        role: SegmentRole::Background,
    });

    Ok(segments)
}

#[cfg(test)]
#[path = "../../tests/unit/layout/calculator.rs"]
mod tests;
