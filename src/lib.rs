//! deckbar draws chapter-aware progress bars on slide decks.
//!
//! Every page gets a bar along one slide edge. The filled part shows how far the
//! reader is through the deck, split into one colored band per chapter; the rest
//! of the bar is a thinner background band. Chapters are detected from
//! "section header" slides rather than configured by hand.
//!
//! # Pipeline overview
//!
//! 1. **Detect**: [`SlideInspector`] marker pages → [`Boundaries`] via [`compute_boundaries`]
//! 2. **Lay out**: page + boundaries + [`BarGeometry`] → [`Segment`]s via [`layout_page`]
//! 3. **Place**: [`BarGeometry::place`] maps each segment to a slide rectangle
//! 4. **Draw**: [`ProgressBarEngine`] buffers a [`BarPlan`] for the whole deck, then
//!    issues [`Canvas`] calls page by page
//!
//! Colors come from a [`Palette`] through a page-scoped [`ColorRotator`], so a
//! chapter's color is its position on the page's bar, and reruns are bit-identical.
//!
//! ```
//! use deckbar::{BarConfig, Deck, ProgressBarEngine, Slide, SlideSize};
//!
//! let mut deck = Deck::new(SlideSize::new(12_192_000.0, 6_858_000.0)?)
//!     .with_slide(Slide::new("Title Slide").with_text("Welcome"))
//!     .with_slide(Slide::new("Section Header").with_text("Part one"))
//!     .with_slide(Slide::new("Title and Content"));
//!
//! let config = BarConfig::default().with_marker_layout("Section Header")?;
//! let stats = ProgressBarEngine::new(config).redraw_all(&mut deck)?;
//! assert_eq!(stats.chapters, 2);
//! # Ok::<(), deckbar::DeckbarError>(())
//! ```
#![forbid(unsafe_code)]

mod chapter;
mod deck;
mod engine;
mod foundation;
mod layout;
mod palette;

pub use chapter::segmenter::{
    Boundaries, ChapterBoundary, END_LABEL, START_LABEL, compute_boundaries,
};
pub use deck::model::{Deck, Shape, Slide};
pub use engine::config::{BarConfig, DEFAULT_BG_COLOR, DEFAULT_MARKER_LAYOUT, DEFAULT_TAG};
pub use engine::progress::{
    BarPlan, DrawStats, EngineOpts, PageBar, PlacedSegment, ProgressBarEngine, shape_tag,
};
pub use engine::surface::{Canvas, ShapeHandle, SlideInspector};
pub use foundation::core::{
    EMU_PER_INCH, Orientation, PageIndex, Point, Rect, Rgb8, Size, SlideSize, inches_to_emu,
};
pub use foundation::error::{DeckbarError, DeckbarResult};
pub use layout::calculator::{BarGeometry, Segment, SegmentRole, layout_page};
pub use palette::rotator::{ColorRotator, DEFAULT_CHAPTER_COLORS, Palette};
