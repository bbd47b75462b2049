use crate::foundation::{
    core::{PageIndex, Rect, Rgb8, SlideSize},
    error::DeckbarResult,
};

/// Handle to a shape created through a [`Canvas`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ShapeHandle {
    pub page: PageIndex,
    /// Position of the shape in the page's shape list (z-order).
    pub index: usize,
}

/// Read access to the structure of a deck.
pub trait SlideInspector {
    fn total_pages(&self) -> usize;

    fn slide_size(&self) -> SlideSize;

    /// Pages whose layout name equals `marker_layout`, in page order, each with
    /// the page's first text element as its label.
    fn marker_pages(&self, marker_layout: &str) -> Vec<(PageIndex, String)>;
}

/// Shape creation and removal on a deck.
pub trait Canvas {
    /// Add a solid, borderless rectangle on top of the page's existing shapes.
    fn add_rectangle(
        &mut self,
        page: PageIndex,
        rect: Rect,
        fill: Rgb8,
        tag: &str,
    ) -> DeckbarResult<ShapeHandle>;

    /// Remove every shape whose name starts with `prefix`, returning how many went.
    fn remove_shapes_by_tag_prefix(&mut self, prefix: &str) -> DeckbarResult<usize>;
}
