//! Chapter colors and the round-robin cursor that hands them out.

pub(crate) mod rotator;
