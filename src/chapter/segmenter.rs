use crate::foundation::{
    core::PageIndex,
    error::{DeckbarError, DeckbarResult},
};

/// Label of the synthetic boundary pinned at page 0.
pub const START_LABEL: &str = "start";
/// Label of the sentinel boundary at `total_pages`.
pub const END_LABEL: &str = "end";

/// A chapter starts at `start` and runs until the next boundary.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChapterBoundary {
    pub start: PageIndex,
    pub label: String,
}

impl ChapterBoundary {
    pub fn new(start: PageIndex, label: impl Into<String>) -> Self {
        Self {
            start,
            label: label.into(),
        }
    }
}

/// Ordered chapter boundaries for a whole deck.
///
/// Always holds a synthetic `(0, "start")` first entry and a `(total_pages, "end")`
/// sentinel last entry, with strictly increasing start pages in between.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Boundaries(Vec<ChapterBoundary>);

impl Boundaries {
    pub fn as_slice(&self) -> &[ChapterBoundary] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn total_pages(&self) -> usize {
        self.0.last().map_or(0, |b| b.start.0)
    }

    /// Number of chapters, counting the pages before the first marker as one.
    pub fn chapter_count(&self) -> usize {
        self.0.len() - 1
    }

    /// Page length of the chapter opened by boundary `idx`, or `None` for the
    /// end sentinel and beyond.
    pub fn chapter_len(&self, idx: usize) -> Option<usize> {
        self.0
            .windows(2)
            .nth(idx)
            .map(|w| w[1].start.0 - w[0].start.0)
    }

    /// Index of the boundary that opens the chapter containing `page`.
    ///
    /// A page sitting on a boundary belongs to the chapter that boundary opens.
    /// Returns `None` for pages outside the deck.
    pub fn chapter_of(&self, page: PageIndex) -> Option<usize> {
        self.0.windows(2).position(|w| page.0 < w[1].start.0)
    }
}

/// Partition a deck of `total_pages` pages at the given marker pages.
///
/// Markers must arrive in increasing page order (they are never sorted). A marker
/// on page 0 is folded into the synthetic start boundary.
pub fn compute_boundaries(
    total_pages: usize,
    markers: &[(PageIndex, String)],
) -> DeckbarResult<Boundaries> {
    if total_pages == 0 {
        return Err(DeckbarError::EmptyDeck);
    }

    let mut out = Vec::with_capacity(markers.len() + 2);
    out.push(ChapterBoundary::new(PageIndex(0), START_LABEL));

    for (page, label) in markers {
        if page.0 == 0 {
            tracing::debug!(label = %label, "marker on first page folded into start boundary");
            continue;
        }
        if page.0 >= total_pages {
            return Err(DeckbarError::validation(format!(
                "marker page {page} is outside a deck of {total_pages} pages"
            )));
        }
        let prev = out.last().map_or(0, |b| b.start.0);
        if page.0 <= prev {
            return Err(DeckbarError::validation(format!(
                "marker pages must be strictly increasing: {page} follows {prev}"
            )));
        }
        out.push(ChapterBoundary::new(*page, label.clone()));
    }

    out.push(ChapterBoundary::new(PageIndex(total_pages), END_LABEL));
    Ok(Boundaries(out))
}

#[cfg(test)]
#[path = "../../tests/unit/chapter/segmenter.rs"]
mod tests;
