//! A library for extracting a small, representative color palette from an image
//! using median cut color quantization.
//!
//! `mediancut` recursively partitions the pixels of an image along the color
//! channel with the widest value range, averages each terminal partition into one
//! representative color, and then filters the result down to a luminance-ordered
//! palette of perceptually distinct colors.
//!
//! # Features
//! To reduce dependencies and compile times, `mediancut` has several `cargo` features
//! that can be turned off or on:
//! - `pipelines`: exposes a builder struct that serves as the high-level API (more details below).
//! - `threads`: exposes a parallel version of the partitioner via [`rayon`].
//! - `image`: enables integration with the [`image`] crate.
//!
//! # High-Level API
//! To get started with the high-level API, see [`PalettePipeline`]:
//! ```
//! # use mediancut::{CutDepth, PalettePipeline, MalformedBuffer};
//! # fn main() -> Result<(), MalformedBuffer> {
//! // Flat RGBA samples, e.g. straight out of an image decoder or a canvas.
//! let data = [12u8, 34, 56, 255, 210, 190, 12, 255];
//!
//! let palette = PalettePipeline::from_rgba_buffer(&data)?
//!     .cut_depth(CutDepth::from_clamped(2)) // coarser cuts give smaller palettes
//!     .distinctness_threshold(150) // drop more near-duplicate colors
//!     .hex_palette();
//! # Ok(())
//! # }
//! ```
//!
//! # Low-Level API
//! The individual stages are exposed for callers that own their own pixel buffers:
//! [`from_rgba_buffer`] for ingestion, [`median_cut::palette`] for the partitioner,
//! and [`distinct_palette`] for the post-filter.

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    missing_docs,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal
)]

mod colorspace;
mod filter;
mod ingest;
mod types;

#[cfg(feature = "pipelines")]
mod api;

pub mod median_cut;

pub use colorspace::*;
pub use filter::*;
pub use ingest::*;
pub use types::*;

#[cfg(feature = "pipelines")]
pub use api::*;

/// The maximum supported cut depth is `8`,
/// bounding the unfiltered palette at `256` colors.
pub const MAX_CUT_DEPTH: u8 = 8;

/// The default cut depth of `4`,
/// bounding the unfiltered palette at `16` colors.
pub const DEFAULT_CUT_DEPTH: u8 = 4;

/// The default squared-distance cutoff used by the palette post-filter.
///
/// This is an empirical constant; see [`distinct_palette`].
pub const DEFAULT_DISTINCTNESS_THRESHOLD: u32 = 120;

#[cfg(test)]
pub(crate) mod tests {
    use palette::Srgb;

    /// Deterministic pseudo-random colors for tests (xorshift, fixed seed).
    pub fn test_data_1024() -> Vec<Srgb<u8>> {
        let mut state = 0x9E3779B97F4A7C15_u64;
        (0..1024)
            .map(|_| {
                state ^= state << 13;
                state ^= state >> 7;
                state ^= state << 17;
                let [r, g, b, ..] = state.to_le_bytes();
                Srgb::new(r, g, b)
            })
            .collect()
    }

    /// Interleaves the given colors into a flat RGBA buffer with opaque alpha.
    pub fn to_rgba_buffer(colors: &[Srgb<u8>]) -> Vec<u8> {
        colors
            .iter()
            .flat_map(|c| [c.red, c.green, c.blue, u8::MAX])
            .collect()
    }
}
