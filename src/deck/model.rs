use std::path::Path;

use anyhow::Context as _;

use crate::{
    engine::surface::{Canvas, ShapeHandle, SlideInspector},
    foundation::core::{PageIndex, Rect, Rgb8, SlideSize},
    foundation::error::{DeckbarError, DeckbarResult},
};

/// A slide deck as a plain JSON document.
///
/// This is the document model used by the `deckbar` binary: it carries just
/// enough structure for chapter detection (layout names and text) and for
/// drawing (named rectangles).
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Deck {
    /// Slide dimensions in EMU.
    pub size: SlideSize,
    /// Slides in presentation order.
    pub slides: Vec<Slide>,
}

/// One slide.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slide {
    /// Name of the slide layout the slide was created from.
    pub layout: String,
    /// Text elements in shape order; the first one is the slide's title.
    #[serde(default)]
    pub texts: Vec<String>,
    /// Drawn shapes, bottom to top.
    #[serde(default)]
    pub shapes: Vec<Shape>,
}

/// A named, solid-filled rectangle.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Shape {
    pub name: String,
    pub rect: Rect,
    pub fill: Rgb8,
}

impl Slide {
    pub fn new(layout: impl Into<String>) -> Self {
        Self {
            layout: layout.into(),
            ..Self::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.texts.push(text.into());
        self
    }
}

impl Deck {
    pub fn new(size: SlideSize) -> Self {
        Self {
            size,
            slides: Vec::new(),
        }
    }

    pub fn with_slide(mut self, slide: Slide) -> Self {
        self.slides.push(slide);
        self
    }

    pub fn validate(&self) -> DeckbarResult<()> {
        SlideSize::new(self.size.width, self.size.height)?;
        Ok(())
    }

    pub fn from_json_str(s: &str) -> DeckbarResult<Self> {
        let deck: Self = serde_json::from_str(s).map_err(|e| DeckbarError::serde(e.to_string()))?;
        deck.validate()?;
        Ok(deck)
    }

    pub fn from_path(path: &Path) -> DeckbarResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read deck '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    pub fn to_json_string(&self) -> DeckbarResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| DeckbarError::serde(e.to_string()))
    }

    pub fn save(&self, path: &Path) -> DeckbarResult<()> {
        let json = self.to_json_string()?;
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create output dir '{}'", parent.display()))?;
        }
        std::fs::write(path, json).with_context(|| format!("write deck '{}'", path.display()))?;
        Ok(())
    }

    /// Shapes on `page` whose name starts with `prefix`.
    pub fn shapes_tagged<'a>(
        &'a self,
        page: PageIndex,
        prefix: &'a str,
    ) -> impl Iterator<Item = &'a Shape> + 'a {
        self.slides
            .get(page.0)
            .into_iter()
            .flat_map(|s| s.shapes.iter())
            .filter(move |s| s.name.starts_with(prefix))
    }
}

impl SlideInspector for Deck {
    fn total_pages(&self) -> usize {
        self.slides.len()
    }

    fn slide_size(&self) -> SlideSize {
        self.size
    }

    fn marker_pages(&self, marker_layout: &str) -> Vec<(PageIndex, String)> {
        self.slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.layout == marker_layout)
            .map(|(idx, s)| (PageIndex(idx), s.texts.first().cloned().unwrap_or_default()))
            .collect()
    }
}

impl Canvas for Deck {
    fn add_rectangle(
        &mut self,
        page: PageIndex,
        rect: Rect,
        fill: Rgb8,
        tag: &str,
    ) -> DeckbarResult<ShapeHandle> {
        let total = self.slides.len();
        let slide = self.slides.get_mut(page.0).ok_or_else(|| {
            DeckbarError::validation(format!("page {page} is outside a deck of {total} pages"))
        })?;
        slide.shapes.push(Shape {
            name: tag.to_string(),
            rect,
            fill,
        });
        Ok(ShapeHandle {
            page,
            index: slide.shapes.len() - 1,
        })
    }

    fn remove_shapes_by_tag_prefix(&mut self, prefix: &str) -> DeckbarResult<usize> {
        let mut removed = 0;
        for slide in &mut self.slides {
            let before = slide.shapes.len();
            slide.shapes.retain(|s| !s.name.starts_with(prefix));
            removed += before - slide.shapes.len();
        }
        Ok(removed)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/model.rs"]
mod tests;
