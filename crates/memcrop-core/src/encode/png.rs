//! PNG encoding.
//!
//! Lossless, so a crop that is PNG-encoded decodes back to exactly the
//! same pixels. 8 and 16-bit gray, gray+alpha, RGB and RGBA are written
//! in their native depth.

use image::codecs::png::{FilterType, PngEncoder};
use image::ImageEncoder;
use std::io::Cursor;

use super::types::validate_buffer;
use super::{EncodeError, OutputFormat, PngCompression};
use crate::decode::PixelBuffer;

/// Encode a pixel buffer to PNG bytes.
pub fn encode_png(buffer: &PixelBuffer, compression: PngCompression) -> Result<Vec<u8>, EncodeError> {
    validate_buffer(buffer, OutputFormat::Png)?;

    let mut out = Cursor::new(Vec::new());
    let encoder = PngEncoder::new_with_quality(
        &mut out,
        compression.to_image_compression(),
        FilterType::Adaptive,
    );

    encoder
        .write_image(
            &buffer.pixels,
            buffer.width,
            buffer.height,
            buffer.format.to_extended_color_type(),
        )
        .map_err(|e| EncodeError::EncodingFailed(e.to_string()))?;

    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::{decode_image, PixelFormat};

    const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

    fn pattern(width: u32, height: u32, format: PixelFormat) -> PixelBuffer {
        let len = (width * height) as usize * format.bytes_per_pixel();
        let pixels = (0..len).map(|i| ((i * 7) % 256) as u8).collect();
        PixelBuffer::new(width, height, format, pixels)
    }

    #[test]
    fn test_encode_png_signature() {
        let bytes = encode_png(&pattern(8, 8, PixelFormat::Rgba8), PngCompression::Default).unwrap();
        assert_eq!(&bytes[0..8], &PNG_SIGNATURE);
    }

    #[test]
    fn test_encode_png_is_lossless_rgba8() {
        let buffer = pattern(13, 7, PixelFormat::Rgba8);
        let bytes = encode_png(&buffer, PngCompression::Fast).unwrap();

        let (decoded, _) = decode_image(&bytes).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_encode_png_is_lossless_16_bit() {
        let buffer = pattern(5, 5, PixelFormat::La16);
        let bytes = encode_png(&buffer, PngCompression::Default).unwrap();

        let (decoded, _) = decode_image(&bytes).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_encode_png_compression_levels() {
        let buffer = pattern(64, 64, PixelFormat::Rgb8);
        for level in [PngCompression::Fast, PngCompression::Default, PngCompression::Best] {
            let bytes = encode_png(&buffer, level).unwrap();
            assert_eq!(&bytes[0..8], &PNG_SIGNATURE);
        }
    }

    #[test]
    fn test_encode_png_rejects_float() {
        let buffer = pattern(2, 2, PixelFormat::Rgba32F);
        let result = encode_png(&buffer, PngCompression::Default);
        assert!(matches!(result, Err(EncodeError::UnsupportedPixelFormat { .. })));
    }

    #[test]
    fn test_encode_png_oversized_dimensions() {
        let buffer = PixelBuffer {
            width: u32::MAX,
            height: u32::MAX,
            format: PixelFormat::Rgba16,
            pixels: vec![],
        };
        let result = encode_png(&buffer, PngCompression::Default);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_png_zero_height() {
        let buffer = PixelBuffer::new(10, 0, PixelFormat::Rgb8, vec![]);
        let result = encode_png(&buffer, PngCompression::Default);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }
}
