//! Native WebP encoding.
//!
//! The browser canvas is the primary encoder. Some browsers silently
//! hand back a PNG when asked for `image/webp`; [`is_webp`] detects
//! that and [`to_webp`] re-encodes in Rust instead. The `image` crate
//! only writes lossless WebP, so fallback output is larger than what a
//! lossy browser encoder produces, but it is always a real WebP file at
//! the source's native dimensions.

use image::ImageEncoder;
use image::codecs::webp::WebPEncoder;

use crate::types::PipelineError;

/// Returns `true` if `bytes` start with a RIFF/WEBP container header.
#[must_use]
pub fn is_webp(bytes: &[u8]) -> bool {
    bytes.get(0..4) == Some(b"RIFF".as_slice()) && bytes.get(8..12) == Some(b"WEBP".as_slice())
}

/// Decode `bytes` (PNG, JPEG, BMP, WebP) and re-encode as lossless WebP.
///
/// No resizing happens: the output has the decoded image's width and
/// height.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::ImageDecode`] if the format is unrecognized
/// or the data is corrupt.
/// Returns [`PipelineError::ImageEncode`] if WebP encoding fails.
pub fn to_webp(bytes: &[u8]) -> Result<Vec<u8>, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }

    let rgba = image::load_from_memory(bytes)
        .map_err(PipelineError::ImageDecode)?
        .to_rgba8();

    let mut out = Vec::new();
    WebPEncoder::new_lossless(&mut out)
        .write_image(
            rgba.as_raw(),
            rgba.width(),
            rgba.height(),
            image::ExtendedColorType::Rgba8,
        )
        .map_err(PipelineError::ImageEncode)?;
    Ok(out)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn png(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_fn(width, height, |x, y| {
            let r = u8::try_from(x * 10).unwrap_or(u8::MAX);
            let g = u8::try_from(y * 10).unwrap_or(u8::MAX);
            image::Rgba([r, g, 128, 255])
        });
        let mut buf = Vec::new();
        image::codecs::png::PngEncoder::new(&mut buf)
            .write_image(
                img.as_raw(),
                img.width(),
                img.height(),
                image::ExtendedColorType::Rgba8,
            )
            .unwrap();
        buf
    }

    #[test]
    fn empty_input_returns_error() {
        assert!(matches!(to_webp(&[]), Err(PipelineError::EmptyInput)));
    }

    #[test]
    fn corrupt_bytes_return_decode_error() {
        let result = to_webp(&[0xFF, 0xFE, 0x00, 0x01]);
        assert!(matches!(result, Err(PipelineError::ImageDecode(_))));
    }

    #[test]
    fn png_becomes_webp_at_native_size() {
        let webp = to_webp(&png(13, 7)).unwrap();
        assert!(is_webp(&webp));

        let decoded = image::load_from_memory(&webp).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (13, 7));
    }

    #[test]
    fn lossless_fallback_preserves_pixels() {
        let source = png(4, 4);
        let webp = to_webp(&source).unwrap();
        let original = image::load_from_memory(&source).unwrap().to_rgba8();
        let round = image::load_from_memory(&webp).unwrap().to_rgba8();
        assert_eq!(original, round);
    }

    #[test]
    fn sniffing_rejects_other_formats() {
        assert!(!is_webp(&png(1, 1)));
        assert!(!is_webp(b"RIFF"));
        assert!(!is_webp(b"RIFF\0\0\0\0WAVE"));
        assert!(is_webp(b"RIFF\x10\0\0\0WEBPVP8L"));
    }
}
