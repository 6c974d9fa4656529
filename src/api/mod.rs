//! Contains the types and functions for the high level pipeline builder API.

mod palette_pipeline;

pub use palette_pipeline::PalettePipeline;
