//! Orders representative colors by perceptual luminance and removes near-duplicates.

use ordered_float::OrderedFloat;
use palette::Srgb;
use std::cmp::Reverse;

/// Returns the perceptual luminance of the color using the ITU-R BT.709 luma weights.
///
/// Channels are weighted in their raw `0..=255` range, so the result lies in
/// `0.0..=255.0`.
#[must_use]
pub fn luminance(color: Srgb<u8>) -> f64 {
    0.2126 * f64::from(color.red) + 0.7152 * f64::from(color.green) + 0.0722 * f64::from(color.blue)
}

/// Sorts the colors by descending [`luminance`] (light to dark).
///
/// The sort is stable: colors of equal luminance keep their relative order.
pub fn order_by_luminance(colors: &mut [Srgb<u8>]) {
    colors.sort_by_key(|&color| Reverse(OrderedFloat(luminance(color))));
}

/// Returns the squared Euclidean distance between the two colors' RGB channels.
#[must_use]
#[allow(clippy::cast_sign_loss)]
pub fn squared_distance(a: Srgb<u8>, b: Srgb<u8>) -> u32 {
    let dr = i32::from(a.red) - i32::from(b.red);
    let dg = i32::from(a.green) - i32::from(b.green);
    let db = i32::from(a.blue) - i32::from(b.blue);
    (dr * dr + dg * dg + db * db) as u32
}

/// Orders the colors by descending [`luminance`] and drops colors that are not
/// distinct enough from their neighbor.
///
/// The first color is always kept. Every later color is compared to its direct
/// predecessor in the sorted order, whether or not that predecessor was itself
/// kept, and dropped when the [`squared_distance`] between the two is below
/// `threshold`. The default threshold is
/// [`DEFAULT_DISTINCTNESS_THRESHOLD`](crate::DEFAULT_DISTINCTNESS_THRESHOLD),
/// an empirical constant that suppresses the near-duplicate colors median cut
/// produces for large flat image regions.
#[must_use]
pub fn distinct_palette(mut colors: Vec<Srgb<u8>>, threshold: u32) -> Vec<Srgb<u8>> {
    order_by_luminance(&mut colors);

    let mut palette = Vec::with_capacity(colors.len());
    for (i, &color) in colors.iter().enumerate() {
        if i == 0 || squared_distance(color, colors[i - 1]) >= threshold {
            palette.push(color);
        }
    }
    palette
}
