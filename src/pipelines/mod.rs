//! Render pipelines.

pub mod halftone;
