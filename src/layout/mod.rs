//! Bar geometry: per-page segment computation and placement on the slide.

pub(crate) mod calculator;
