/// Convenience result type used across deckbar.
pub type DeckbarResult<T> = Result<T, DeckbarError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum DeckbarError {
    /// The deck has no pages, so there is nothing to partition or lay out.
    #[error("empty deck: a progress bar needs at least one page")]
    EmptyDeck,

    /// Orientation is not one of `top`, `bottom`, `left`, `right`.
    #[error("invalid orientation: {0}")]
    InvalidOrientation(String),

    /// A palette was empty or held an unparsable color.
    #[error("invalid palette: {0}")]
    InvalidPalette(String),

    /// Invalid user-provided configuration or deck data.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckbarError {
    /// Build a [`DeckbarError::InvalidOrientation`] value.
    pub fn invalid_orientation(msg: impl Into<String>) -> Self {
        Self::InvalidOrientation(msg.into())
    }

    /// Build a [`DeckbarError::InvalidPalette`] value.
    pub fn invalid_palette(msg: impl Into<String>) -> Self {
        Self::InvalidPalette(msg.into())
    }

    /// Build a [`DeckbarError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`DeckbarError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
