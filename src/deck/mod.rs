//! JSON slide deck document used as the default `SlideInspector` and `Canvas`.

pub(crate) mod model;
