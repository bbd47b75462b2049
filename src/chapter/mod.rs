//! Chapter detection: turns marker pages into an ordered boundary list.

pub(crate) mod segmenter;
