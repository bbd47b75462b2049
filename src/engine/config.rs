use std::path::Path;

use anyhow::Context as _;

use crate::{
    foundation::core::{Orientation, Rgb8, SlideSize, inches_to_emu},
    foundation::error::{DeckbarError, DeckbarResult},
    layout::calculator::BarGeometry,
    palette::rotator::Palette,
};

/// Default color of the "remaining pages" band.
pub const DEFAULT_BG_COLOR: Rgb8 = Rgb8::new(0xd8, 0xe1, 0xe9);
/// Layout name of PowerPoint's "Section Header" slides in a Chinese locale.
pub const DEFAULT_MARKER_LAYOUT: &str = "节标题";
/// Name prefix of every shape the engine creates.
pub const DEFAULT_TAG: &str = "progress_bar_tag";

/// Validated, immutable progress bar configuration.
///
/// Every `with_*` setter validates its input and returns a new value, so a
/// `BarConfig` that exists is always usable:
///
/// ```
/// let cfg = deckbar::BarConfig::default()
///     .with_position("bottom")?
///     .with_thickness_in(0.2)?
///     .with_colors(&["c93456", "18c9a0", "a2418a"])?
///     .with_bg_color("D8E1E9")?
///     .with_bg_thickness_ratio(0.75)?;
/// assert_eq!(cfg.palette().len(), 3);
/// # Ok::<(), deckbar::DeckbarError>(())
/// ```
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "BarConfigDef", into = "BarConfigDef")]
pub struct BarConfig {
    orientation: Orientation,
    thickness_in: f64,
    bg_thickness_ratio: f64,
    palette: Palette,
    bg_color: Rgb8,
    marker_layout: String,
    tag: String,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Bottom,
            thickness_in: 0.3,
            bg_thickness_ratio: 0.5,
            palette: Palette::default(),
            bg_color: DEFAULT_BG_COLOR,
            marker_layout: DEFAULT_MARKER_LAYOUT.to_string(),
            tag: DEFAULT_TAG.to_string(),
        }
    }
}

impl BarConfig {
    pub fn from_json_str(s: &str) -> DeckbarResult<Self> {
        serde_json::from_str(s).map_err(|e| DeckbarError::serde(e.to_string()))
    }

    pub fn from_path(path: &Path) -> DeckbarResult<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read bar config '{}'", path.display()))?;
        Self::from_json_str(&s)
    }

    /// Bar edge by name: `top`, `bottom`, `left` or `right`.
    pub fn with_position(self, position: &str) -> DeckbarResult<Self> {
        Ok(self.with_orientation(position.parse()?))
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    /// Foreground thickness in inches.
    pub fn with_thickness_in(mut self, inches: f64) -> DeckbarResult<Self> {
        if !(inches.is_finite() && inches > 0.0) {
            return Err(DeckbarError::validation(format!(
                "thickness must be a positive number of inches, got {inches}"
            )));
        }
        self.thickness_in = inches;
        Ok(self)
    }

    /// Background thickness relative to the foreground, in `(0, 1]`.
    pub fn with_bg_thickness_ratio(mut self, ratio: f64) -> DeckbarResult<Self> {
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(DeckbarError::validation(format!(
                "background thickness ratio must be in (0, 1], got {ratio}"
            )));
        }
        self.bg_thickness_ratio = ratio;
        Ok(self)
    }

    /// Chapter colors as `RRGGBB` strings.
    pub fn with_colors<S: AsRef<str>>(mut self, colors: &[S]) -> DeckbarResult<Self> {
        self.palette = Palette::from_hex(colors)?;
        Ok(self)
    }

    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }

    pub fn with_bg_color(mut self, color: &str) -> DeckbarResult<Self> {
        self.bg_color =
            Rgb8::from_hex(color).map_err(|e| DeckbarError::invalid_palette(e.to_string()))?;
        Ok(self)
    }

    /// Layout name that marks chapter-opening slides.
    pub fn with_marker_layout(mut self, name: impl Into<String>) -> DeckbarResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DeckbarError::validation(
                "marker layout name must not be empty",
            ));
        }
        self.marker_layout = name;
        Ok(self)
    }

    /// Shape name prefix used to find bars again for removal.
    pub fn with_tag(mut self, tag: impl Into<String>) -> DeckbarResult<Self> {
        let tag = tag.into();
        if tag.trim().is_empty() {
            return Err(DeckbarError::validation("shape tag must not be empty"));
        }
        self.tag = tag;
        Ok(self)
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn thickness_in(&self) -> f64 {
        self.thickness_in
    }

    pub fn bg_thickness_ratio(&self) -> f64 {
        self.bg_thickness_ratio
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn bg_color(&self) -> Rgb8 {
        self.bg_color
    }

    pub fn marker_layout(&self) -> &str {
        &self.marker_layout
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Resolve the bar dimensions for a slide size (EMU).
    pub fn geometry(&self, slide: SlideSize) -> DeckbarResult<BarGeometry> {
        BarGeometry::new(
            self.orientation,
            slide,
            inches_to_emu(self.thickness_in),
            self.bg_thickness_ratio,
            self.palette.clone(),
            Palette::solid(self.bg_color),
        )
    }
}

/// On-disk form of [`BarConfig`]; every field is optional.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct BarConfigDef {
    position: String,
    thickness_in: f64,
    bg_thickness_ratio: f64,
    colors: Vec<String>,
    bg_color: String,
    marker_layout: String,
    tag: String,
}

impl Default for BarConfigDef {
    fn default() -> Self {
        BarConfig::default().into()
    }
}

impl TryFrom<BarConfigDef> for BarConfig {
    type Error = DeckbarError;

    fn try_from(def: BarConfigDef) -> Result<Self, Self::Error> {
        BarConfig::default()
            .with_position(&def.position)?
            .with_thickness_in(def.thickness_in)?
            .with_bg_thickness_ratio(def.bg_thickness_ratio)?
            .with_colors(&def.colors)?
            .with_bg_color(&def.bg_color)?
            .with_marker_layout(def.marker_layout)?
            .with_tag(def.tag)
    }
}

impl From<BarConfig> for BarConfigDef {
    fn from(cfg: BarConfig) -> Self {
        Self {
            position: cfg.orientation.as_str().to_string(),
            thickness_in: cfg.thickness_in,
            bg_thickness_ratio: cfg.bg_thickness_ratio,
            colors: cfg.palette.colors().iter().map(|c| c.to_hex()).collect(),
            bg_color: cfg.bg_color.to_hex(),
            marker_layout: cfg.marker_layout,
            tag: cfg.tag,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/config.rs"]
mod tests;
