//! The median cut color quantizer.
//!
//! This preclustering method recursively splits a set of pixels along the color
//! channel with the widest value range: the set is stably sorted by that channel
//! and divided at the midpoint, and each half is partitioned again until the cut
//! depth is exhausted. Every terminal partition is averaged into a single
//! representative color, so a depth of `d` yields at most `2^d` colors.
//!
//! The returned colors carry no ordering beyond left-before-right of the
//! recursion tree; use [`distinct_palette`](crate::distinct_palette) to impose
//! the luminance order and drop near-duplicates.
//!
//! Note that the pixel at the exact midpoint of a split is dropped from both
//! halves. This loses at most one pixel per split and keeps palettes identical
//! across releases, so it is kept as documented behavior.

use crate::CutDepth;
use palette::Srgb;

#[cfg(feature = "threads")]
use rayon::prelude::*;

/// A color channel of an RGB pixel.
///
/// The variant order is the tie-breaking order for [`widest_channel`]:
/// red wins over green wins over blue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Channel {
    /// The red channel.
    Red,
    /// The green channel.
    Green,
    /// The blue channel.
    Blue,
}

impl Channel {
    /// Returns this channel's value of the given color.
    #[inline]
    fn value(self, color: Srgb<u8>) -> u8 {
        match self {
            Channel::Red => color.red,
            Channel::Green => color.green,
            Channel::Blue => color.blue,
        }
    }
}

/// Computes a color palette for the given pixels by recursive median cut.
///
/// The slice is reordered in place during partitioning. Each recursive branch
/// receives a disjoint sub-slice, so no pixel is visited by two branches.
///
/// An empty input returns an empty palette. Otherwise the palette is non-empty
/// and contains at most `2^depth` colors, each the componentwise mean
/// (rounded half away from zero) of one terminal partition.
pub fn palette(pixels: &mut [Srgb<u8>], depth: CutDepth) -> Vec<Srgb<u8>> {
    let mut palette = Vec::with_capacity(1 << depth.into_inner());
    cut(pixels, depth.into_inner(), &mut palette);
    palette
}

/// Computes the same palette as [`palette`], running the two recursive
/// branches of each split in parallel.
///
/// The branches operate on disjoint sub-slices and share no mutable state,
/// so the output is bit-identical to the serial version.
#[cfg(feature = "threads")]
pub fn palette_par(pixels: &mut [Srgb<u8>], depth: CutDepth) -> Vec<Srgb<u8>> {
    cut_par(pixels, depth.into_inner())
}

/// Recursively partitions `pixels`, pushing one color per terminal partition.
fn cut(pixels: &mut [Srgb<u8>], depth: u8, palette: &mut Vec<Srgb<u8>>) {
    if depth == 0 || pixels.len() <= 1 {
        // Sets of size zero or one cannot be split any further:
        // an empty partition has no mean and contributes nothing,
        // while a single pixel is its own representative color.
        if let Some(color) = average(pixels) {
            palette.push(color);
        }
        return;
    }

    let channel = widest_channel(pixels);
    pixels.sort_by_key(|&pixel| channel.value(pixel));

    // The pixel at the midpoint belongs to neither half.
    let mid = pixels.len() / 2;
    let (left, right) = pixels.split_at_mut(mid);
    cut(left, depth - 1, palette);
    cut(&mut right[1..], depth - 1, palette);
}

/// The parallel counterpart of [`cut`].
#[cfg(feature = "threads")]
fn cut_par(pixels: &mut [Srgb<u8>], depth: u8) -> Vec<Srgb<u8>> {
    if depth == 0 || pixels.len() <= 1 {
        return average(pixels).into_iter().collect();
    }

    let channel = widest_channel(pixels);
    // Stable, like the serial sort, to keep the split reproducible.
    pixels.par_sort_by_key(|&pixel| channel.value(pixel));

    let mid = pixels.len() / 2;
    let (left, right) = pixels.split_at_mut(mid);
    let right = &mut right[1..];
    let (mut palette, right_palette) =
        rayon::join(|| cut_par(left, depth - 1), || cut_par(right, depth - 1));
    palette.extend(right_palette);
    palette
}

/// Returns the channel with the largest value range (`max - min`) across the pixels.
///
/// Ties are broken in the order red, green, blue.
fn widest_channel(pixels: &[Srgb<u8>]) -> Channel {
    let mut min = [u8::MAX; 3];
    let mut max = [u8::MIN; 3];

    for pixel in pixels {
        let rgb = [pixel.red, pixel.green, pixel.blue];
        for (component, (min, max)) in rgb.into_iter().zip(min.iter_mut().zip(&mut max)) {
            *min = component.min(*min);
            *max = component.max(*max);
        }
    }

    let [r_range, g_range, b_range] = [max[0] - min[0], max[1] - min[1], max[2] - min[2]];

    let widest = r_range.max(g_range).max(b_range);
    if widest == r_range {
        Channel::Red
    } else if widest == g_range {
        Channel::Green
    } else {
        Channel::Blue
    }
}

/// Returns the componentwise mean of the pixels, rounded half away from zero,
/// or `None` for an empty partition.
#[allow(clippy::cast_possible_truncation)]
fn average(pixels: &[Srgb<u8>]) -> Option<Srgb<u8>> {
    if pixels.is_empty() {
        return None;
    }

    let count = pixels.len() as u64;
    let mut sum = [0u64; 3];
    for pixel in pixels {
        sum[0] += u64::from(pixel.red);
        sum[1] += u64::from(pixel.green);
        sum[2] += u64::from(pixel.blue);
    }

    // (sum + count / 2) / count rounds the ratio half away from zero.
    let [r, g, b] = sum.map(|channel| ((channel + count / 2) / count) as u8);
    Some(Srgb::new(r, g, b))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::tests::*;

    /// Red gradient pixels with the given channel values.
    fn reds(values: &[u8]) -> Vec<Srgb<u8>> {
        values.iter().map(|&r| Srgb::new(r, 0, 0)).collect()
    }

    #[test]
    fn empty_input() {
        let mut pixels: Vec<Srgb<u8>> = Vec::new();
        assert_eq!(palette(&mut pixels, CutDepth::default()), Vec::new());
    }

    #[test]
    fn non_empty_input_yields_non_empty_palette() {
        for depth in 0..=crate::MAX_CUT_DEPTH {
            let depth = CutDepth::try_from(depth).unwrap();
            let mut pixels = test_data_1024();
            let result = palette(&mut pixels, depth);
            assert!(!result.is_empty());
            assert!(result.len() <= 1 << depth.into_inner());
        }
    }

    #[test]
    fn deterministic() {
        let mut first = test_data_1024();
        let mut second = first.clone();
        assert_eq!(
            palette(&mut first, CutDepth::default()),
            palette(&mut second, CutDepth::default())
        );
    }

    #[test]
    fn depth_zero_returns_rounded_mean() {
        let mut pixels = vec![Srgb::new(0, 10, 255), Srgb::new(1, 10, 0)];
        let depth = CutDepth::try_from(0).unwrap();
        // Red mean 0.5 rounds away from zero to 1.
        assert_eq!(palette(&mut pixels, depth), vec![Srgb::new(1, 10, 128)]);
    }

    #[test]
    fn singleton_is_its_own_palette() {
        let mut pixels = vec![Srgb::new(3, 5, 7)];
        assert_eq!(palette(&mut pixels, CutDepth::MAX), vec![Srgb::new(3, 5, 7)]);
    }

    #[test]
    fn red_wins_channel_range_ties() {
        // Red and green ranges are both 10; blue range is 5.
        let pixels = vec![Srgb::new(0, 100, 0), Srgb::new(10, 110, 5)];
        assert_eq!(widest_channel(&pixels), Channel::Red);

        // All ranges zero also resolves to red.
        assert_eq!(widest_channel(&[Srgb::new(42, 42, 42)]), Channel::Red);

        // A strictly larger green range wins over blue.
        let pixels = vec![Srgb::new(0, 0, 0), Srgb::new(0, 20, 10)];
        assert_eq!(widest_channel(&pixels), Channel::Green);
    }

    #[test]
    fn midpoint_pixel_is_dropped_from_both_halves() {
        // Sorted by red, the midpoint is index 2 (value 20). The halves are
        // {0, 10} and {30, 40}; their means pin down the split exactly.
        let mut pixels = reds(&[0, 10, 20, 30, 40]);
        let depth = CutDepth::try_from(1).unwrap();
        assert_eq!(
            palette(&mut pixels, depth),
            vec![Srgb::new(5, 0, 0), Srgb::new(35, 0, 0)]
        );
    }

    #[test]
    fn two_pixel_split_keeps_only_the_lower_half() {
        // mid == 1, so the right half is empty after the midpoint drop.
        let mut pixels = reds(&[200, 100]);
        let depth = CutDepth::try_from(1).unwrap();
        assert_eq!(palette(&mut pixels, depth), vec![Srgb::new(100, 0, 0)]);
    }

    #[test]
    fn stable_sort_preserves_tied_pixel_order() {
        // Red has the widest range (20 vs 9), and two pixels tie at red 10.
        // A stable sort keeps green 9 before green 3, so the left half is
        // {(0,0,0), (10,9,0)} and the tied pixel at the midpoint is (10,3,0).
        let mut pixels = vec![
            Srgb::new(0, 0, 0),
            Srgb::new(10, 9, 0),
            Srgb::new(10, 3, 0),
            Srgb::new(20, 0, 0),
        ];
        let depth = CutDepth::try_from(1).unwrap();
        assert_eq!(
            palette(&mut pixels, depth),
            vec![Srgb::new(5, 5, 0), Srgb::new(20, 0, 0)]
        );
    }

    #[cfg(feature = "threads")]
    #[test]
    fn parallel_matches_serial() {
        for depth in [0, 1, 4, crate::MAX_CUT_DEPTH] {
            let depth = CutDepth::try_from(depth).unwrap();
            let mut serial = test_data_1024();
            let mut parallel = serial.clone();
            assert_eq!(
                palette(&mut serial, depth),
                palette_par(&mut parallel, depth)
            );
        }
    }
}
