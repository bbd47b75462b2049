//! Deck-level orchestration: configuration, collaborator traits and the engine
//! that plans and draws bars on every page.

pub(crate) mod config;
pub(crate) mod progress;
pub(crate) mod surface;
