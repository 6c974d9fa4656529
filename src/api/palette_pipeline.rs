//! The builder struct for configuring and running palette extraction.

use crate::{
    distinct_palette, from_rgba_buffer, median_cut, rgb_to_hex, CutDepth, MalformedBuffer,
    DEFAULT_DISTINCTNESS_THRESHOLD,
};
use palette::Srgb;

#[cfg(feature = "image")]
use {crate::from_rgba_image, image::RgbaImage};

/// A builder struct to specify the parameters for palette extraction.
///
/// The pipeline owns the ingested pixels, runs the median cut partitioner over
/// them, and post-filters the representative colors into a luminance-ordered,
/// distinct palette.
///
/// # Examples
/// ```
/// # use mediancut::{CutDepth, PalettePipeline, MalformedBuffer};
/// # fn main() -> Result<(), MalformedBuffer> {
/// # let rgba_data = [0u8, 0, 0, 255];
/// let palette = PalettePipeline::from_rgba_buffer(&rgba_data)?
///     .cut_depth(CutDepth::from_clamped(3)) // at most 2^3 colors before filtering
///     .distinctness_threshold(200) // squared-distance cutoff between neighbors
///     .palette();
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct PalettePipeline {
    /// The ingested pixels to extract a palette from.
    colors: Vec<Srgb<u8>>,
    /// The recursion depth of the partitioner.
    depth: CutDepth,
    /// The squared-distance cutoff for the post-filter.
    threshold: u32,
}

impl PalettePipeline {
    /// Creates a new [`PalettePipeline`] over the given pixels with default parameters.
    #[must_use]
    pub fn new(colors: Vec<Srgb<u8>>) -> Self {
        Self {
            colors,
            depth: CutDepth::default(),
            threshold: DEFAULT_DISTINCTNESS_THRESHOLD,
        }
    }

    /// Creates a new [`PalettePipeline`] from a flat channel-interleaved RGBA buffer.
    ///
    /// # Errors
    /// Returns [`MalformedBuffer`] if the buffer length is not a multiple of 4.
    pub fn from_rgba_buffer(buf: &[u8]) -> Result<Self, MalformedBuffer> {
        Ok(Self::new(from_rgba_buffer(buf)?))
    }

    /// Sets the cut depth, which controls palette granularity:
    /// a depth of `d` produces at most `2^d` colors before filtering.
    #[must_use]
    pub fn cut_depth(mut self, depth: CutDepth) -> Self {
        self.depth = depth;
        self
    }

    /// Sets the squared-distance cutoff below which a color is dropped
    /// for being too close to its neighbor in luminance order.
    #[must_use]
    pub fn distinctness_threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Runs the pipeline, returning the palette in descending luminance order.
    #[must_use]
    pub fn palette(self) -> Vec<Srgb<u8>> {
        let Self { mut colors, depth, threshold } = self;
        let representatives = median_cut::palette(&mut colors, depth);
        distinct_palette(representatives, threshold)
    }

    /// Runs the pipeline in parallel, returning the same palette as [`PalettePipeline::palette`].
    #[cfg(feature = "threads")]
    #[must_use]
    pub fn palette_par(self) -> Vec<Srgb<u8>> {
        let Self { mut colors, depth, threshold } = self;
        let representatives = median_cut::palette_par(&mut colors, depth);
        distinct_palette(representatives, threshold)
    }

    /// Runs the pipeline and renders each palette color as an uppercase
    /// `#RRGGBB` hex string.
    #[must_use]
    pub fn hex_palette(self) -> Vec<String> {
        self.palette().into_iter().map(rgb_to_hex).collect()
    }
}

#[cfg(feature = "image")]
impl From<&RgbaImage> for PalettePipeline {
    fn from(image: &RgbaImage) -> Self {
        Self::new(from_rgba_image(image))
    }
}
