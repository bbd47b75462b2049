use rayon::prelude::*;

use crate::{
    chapter::segmenter::{Boundaries, compute_boundaries},
    engine::config::BarConfig,
    engine::surface::{Canvas, ShapeHandle, SlideInspector},
    foundation::core::{PageIndex, Rect},
    foundation::error::{DeckbarError, DeckbarResult},
    layout::calculator::{BarGeometry, Segment, layout_page},
};

/// Threading options for [`ProgressBarEngine::plan`].
#[derive(Clone, Debug, Default)]
pub struct EngineOpts {
    /// Compute page layouts on a dedicated rayon pool.
    pub parallel: bool,
    /// Override rayon worker threads (parallel mode only).
    pub threads: Option<usize>,
}

/// A segment together with its rectangle in slide coordinates.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PlacedSegment {
    pub segment: Segment,
    pub rect: Rect,
}

/// Everything drawn on one page, in z-order.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageBar {
    pub page: PageIndex,
    pub segments: Vec<PlacedSegment>,
}

/// Precomputed bars for a whole deck. Building one never touches the deck.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct BarPlan {
    pub boundaries: Boundaries,
    pub pages: Vec<PageBar>,
}

impl BarPlan {
    pub fn shape_count(&self) -> usize {
        self.pages.iter().map(|p| p.segments.len()).sum()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawStats {
    pub pages: usize,
    pub chapters: usize,
    pub shapes_removed: usize,
    pub shapes_drawn: usize,
}

/// Draws and removes chapter-aware progress bars on a deck.
#[derive(Clone, Debug, Default)]
pub struct ProgressBarEngine {
    config: BarConfig,
    opts: EngineOpts,
}

impl ProgressBarEngine {
    pub fn new(config: BarConfig) -> Self {
        Self {
            config,
            opts: EngineOpts::default(),
        }
    }

    pub fn with_opts(mut self, opts: EngineOpts) -> Self {
        self.opts = opts;
        self
    }

    pub fn config(&self) -> &BarConfig {
        &self.config
    }

    /// Detect chapters from the deck's marker pages.
    pub fn boundaries<D: SlideInspector + ?Sized>(&self, deck: &D) -> DeckbarResult<Boundaries> {
        let markers = deck.marker_pages(self.config.marker_layout());
        let boundaries = compute_boundaries(deck.total_pages(), &markers)?;
        for b in boundaries.as_slice() {
            tracing::info!(page = b.start.0, label = %b.label, "chapter boundary");
        }
        Ok(boundaries)
    }

    /// Compute every page's bar without mutating the deck.
    #[tracing::instrument(skip_all, fields(pages = deck.total_pages()))]
    pub fn plan<D: SlideInspector + ?Sized>(&self, deck: &D) -> DeckbarResult<BarPlan> {
        let boundaries = self.boundaries(deck)?;
        let geometry = self.config.geometry(deck.slide_size())?;
        let total = boundaries.total_pages();

        let pages = if self.opts.parallel {
            let pool = build_thread_pool(self.opts.threads)?;
            pool.install(|| {
                (0..total)
                    .into_par_iter()
                    .map(|p| page_bar(PageIndex(p), &boundaries, &geometry))
                    .collect::<DeckbarResult<Vec<_>>>()
            })?
        } else {
            (0..total)
                .map(|p| page_bar(PageIndex(p), &boundaries, &geometry))
                .collect::<DeckbarResult<Vec<_>>>()?
        };

        Ok(BarPlan { boundaries, pages })
    }

    /// Remove every shape carrying this engine's tag prefix.
    #[tracing::instrument(skip_all)]
    pub fn remove_all<D: Canvas + ?Sized>(&self, deck: &mut D) -> DeckbarResult<usize> {
        let removed = deck.remove_shapes_by_tag_prefix(self.config.tag())?;
        tracing::debug!(removed, "removed progress bar shapes");
        Ok(removed)
    }

    /// Draw a bar on every page. The whole plan is computed before the first
    /// shape is added.
    #[tracing::instrument(skip_all)]
    pub fn draw_all<D: SlideInspector + Canvas + ?Sized>(
        &self,
        deck: &mut D,
    ) -> DeckbarResult<DrawStats> {
        let plan = self.plan(&*deck)?;
        let handles = self.apply(&plan, deck)?;
        Ok(DrawStats {
            pages: plan.pages.len(),
            chapters: plan.boundaries.chapter_count(),
            shapes_removed: 0,
            shapes_drawn: handles.len(),
        })
    }

    /// `remove_all` followed by `draw_all`, the usual way to refresh a deck.
    pub fn redraw_all<D: SlideInspector + Canvas + ?Sized>(
        &self,
        deck: &mut D,
    ) -> DeckbarResult<DrawStats> {
        // A deck that cannot be planned keeps its old bars.
        let plan = self.plan(&*deck)?;
        let shapes_removed = self.remove_all(deck)?;
        let handles = self.apply(&plan, deck)?;
        Ok(DrawStats {
            pages: plan.pages.len(),
            chapters: plan.boundaries.chapter_count(),
            shapes_removed,
            shapes_drawn: handles.len(),
        })
    }

    /// Issue the canvas calls for a precomputed plan, page by page.
    pub fn apply<D: Canvas + ?Sized>(
        &self,
        plan: &BarPlan,
        deck: &mut D,
    ) -> DeckbarResult<Vec<ShapeHandle>> {
        let mut handles = Vec::with_capacity(plan.shape_count());
        for page in &plan.pages {
            for (ordinal, placed) in page.segments.iter().enumerate() {
                let tag = shape_tag(self.config.tag(), placed.segment.role.suffix(), ordinal);
                handles.push(deck.add_rectangle(
                    page.page,
                    placed.rect,
                    placed.segment.color,
                    &tag,
                )?);
            }
            tracing::debug!(page = page.page.0, shapes = page.segments.len(), "drew bar");
        }
        Ok(handles)
    }
}

/// Shape name: tag prefix, role suffix and the segment's position on the page.
pub fn shape_tag(prefix: &str, role: &str, ordinal: usize) -> String {
    format!("{prefix}:{role}:{ordinal}")
}

fn page_bar(
    page: PageIndex,
    boundaries: &Boundaries,
    geometry: &BarGeometry,
) -> DeckbarResult<PageBar> {
    let segments = layout_page(page, boundaries, geometry)?
        .into_iter()
        .map(|segment| PlacedSegment {
            rect: geometry.place(&segment),
            segment,
        })
        .collect();
    Ok(PageBar { page, segments })
}

fn build_thread_pool(threads: Option<usize>) -> DeckbarResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(DeckbarError::validation(
            "engine threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| DeckbarError::validation(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/engine/progress.rs"]
mod tests;
