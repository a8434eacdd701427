//! JPEG encoding.
//!
//! This module provides JPEG encoding using the `image` crate's JPEG encoder.
//! Only 8-bit grayscale and RGB buffers are accepted; JPEG has no alpha
//! channel and this crate never converts colors behind the caller's back.

use image::codecs::jpeg::JpegEncoder;
use image::ImageEncoder;
use std::io::Cursor;

use super::types::validate_buffer;
use super::{EncodeError, OutputFormat};
use crate::decode::PixelBuffer;

/// Encode a pixel buffer to JPEG bytes.
///
/// # Arguments
///
/// * `buffer` - `L8` or `Rgb8` pixel buffer
/// * `quality` - JPEG quality (1-100, where 100 is highest quality)
///
/// # Returns
///
/// JPEG-encoded bytes on success, or an error if encoding fails.
///
/// # Quality Guidelines
///
/// * 90-100: High quality, suitable for archival or further editing
/// * 80-90: Good quality, recommended for most uses
/// * 60-80: Medium quality, acceptable for web/social media
/// * Below 60: Low quality, visible artifacts
pub fn encode_jpeg(buffer: &PixelBuffer, quality: u8) -> Result<Vec<u8>, EncodeError> {
    validate_buffer(buffer, OutputFormat::Jpeg)?;

    // Clamp quality to valid range (1-100)
    let quality = quality.clamp(1, 100);

    let mut out = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut out, quality);

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
    use crate::decode::PixelFormat;

    fn gray_rgb(width: u32, height: u32) -> PixelBuffer {
        PixelBuffer::new(
            width,
            height,
            PixelFormat::Rgb8,
            vec![128u8; (width * height * 3) as usize],
        )
    }

    #[test]
    fn test_encode_jpeg_basic() {
        let jpeg_bytes = encode_jpeg(&gray_rgb(100, 100), 90).unwrap();

        // Check JPEG magic bytes (SOI marker)
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);

        // Check JPEG ends with EOI marker
        let len = jpeg_bytes.len();
        assert_eq!(&jpeg_bytes[len - 2..], &[0xFF, 0xD9]);
    }

    #[test]
    fn test_encode_jpeg_grayscale() {
        let buffer = PixelBuffer::new(16, 16, PixelFormat::L8, vec![200u8; 256]);
        let jpeg_bytes = encode_jpeg(&buffer, 90).unwrap();
        assert_eq!(&jpeg_bytes[0..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_jpeg_quality_clamping() {
        let buffer = gray_rgb(10, 10);

        // Quality 0 should be clamped to 1
        assert!(encode_jpeg(&buffer, 0).is_ok());

        // Quality 255 should be clamped to 100
        assert!(encode_jpeg(&buffer, 255).is_ok());
    }

    #[test]
    fn test_encode_jpeg_rejects_alpha() {
        let buffer = PixelBuffer::new(4, 4, PixelFormat::Rgba8, vec![0u8; 64]);
        let result = encode_jpeg(&buffer, 90);
        assert!(matches!(
            result,
            Err(EncodeError::UnsupportedPixelFormat { output: OutputFormat::Jpeg, .. })
        ));
    }

    #[test]
    fn test_encode_jpeg_invalid_pixel_data_short() {
        let buffer = PixelBuffer {
            width: 100,
            height: 100,
            format: PixelFormat::Rgb8,
            pixels: vec![128u8; 99 * 100 * 3], // One row short
        };

        let result = encode_jpeg(&buffer, 90);
        assert!(matches!(result, Err(EncodeError::InvalidPixelData { .. })));
    }

    #[test]
    fn test_encode_jpeg_zero_width() {
        let buffer = PixelBuffer::new(0, 100, PixelFormat::Rgb8, vec![]);

        let result = encode_jpeg(&buffer, 90);
        assert!(matches!(result, Err(EncodeError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_encode_jpeg_decodes_back_to_same_size() {
        let mut pixels = Vec::with_capacity(40 * 30 * 3);
        for y in 0..30u32 {
            for x in 0..40u32 {
                pixels.push((x * 255 / 40) as u8);
                pixels.push((y * 255 / 30) as u8);
                pixels.push(128);
            }
        }
        let buffer = PixelBuffer::new(40, 30, PixelFormat::Rgb8, pixels);

        let jpeg_bytes = encode_jpeg(&buffer, 90).unwrap();
        let (decoded, _) = crate::decode::decode_image(&jpeg_bytes).unwrap();
        assert_eq!((decoded.width, decoded.height), (40, 30));
        assert_eq!(decoded.format, PixelFormat::Rgb8);
    }
}
