//! Converts flat channel-interleaved sample buffers into discrete RGB pixels.

use crate::MalformedBuffer;
use palette::Srgb;

#[cfg(feature = "image")]
use image::RgbaImage;

/// The channel stride of flat sample buffers: red, green, blue, and an ignored fourth channel.
pub const RGBA_STRIDE: usize = 4;

/// Converts a flat channel-interleaved sample buffer into a sequence of RGB pixels.
///
/// The buffer is read at a stride of [`RGBA_STRIDE`], taking the first three values
/// of each group as the red, green, and blue channels and discarding the fourth
/// (typically alpha). Channel values are `u8`, so the `[0, 255]` range holds by
/// construction.
///
/// # Errors
/// Returns [`MalformedBuffer`] if the buffer length is not a multiple of [`RGBA_STRIDE`].
pub fn from_rgba_buffer(buf: &[u8]) -> Result<Vec<Srgb<u8>>, MalformedBuffer> {
    if buf.len() % RGBA_STRIDE != 0 {
        return Err(MalformedBuffer(buf.len()));
    }

    Ok(buf
        .chunks_exact(RGBA_STRIDE)
        .map(|chunk| Srgb::new(chunk[0], chunk[1], chunk[2]))
        .collect())
}

/// Converts an [`RgbaImage`] into a sequence of RGB pixels, discarding alpha.
///
/// Unlike [`from_rgba_buffer`], this cannot fail: the image buffer is always
/// a whole number of RGBA pixels.
#[cfg(feature = "image")]
pub fn from_rgba_image(image: &RgbaImage) -> Vec<Srgb<u8>> {
    image
        .pixels()
        .map(|p| {
            let [r, g, b, _] = p.0;
            Srgb::new(r, g, b)
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn reads_at_stride_four() {
        let buf = [1u8, 2, 3, 255, 4, 5, 6, 0];
        let pixels = from_rgba_buffer(&buf).unwrap();
        assert_eq!(pixels, vec![Srgb::new(1, 2, 3), Srgb::new(4, 5, 6)]);
    }

    #[test]
    fn empty_buffer_is_valid() {
        assert_eq!(from_rgba_buffer(&[]), Ok(Vec::new()));
    }

    #[test]
    fn rejects_misaligned_length() {
        let buf = [1u8, 2, 3, 255, 4, 5, 6];
        assert_eq!(from_rgba_buffer(&buf), Err(MalformedBuffer(7)));
    }

    #[cfg(feature = "image")]
    #[test]
    fn image_alpha_is_discarded() {
        let image = RgbaImage::from_raw(2, 1, vec![9, 8, 7, 0, 6, 5, 4, 128]).unwrap();
        let pixels = from_rgba_image(&image);
        assert_eq!(pixels, vec![Srgb::new(9, 8, 7), Srgb::new(6, 5, 4)]);
    }
}
