//! Container decoding (PNG, JPEG) into pixel buffers.

use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use tracing::debug;

use super::{DecodeError, PixelBuffer};

/// Decode an encoded image from bytes, detecting the container from its magic bytes.
///
/// # Arguments
///
/// * `bytes` - Raw encoded image bytes (PNG, JPEG)
///
/// # Returns
///
/// The decoded `PixelBuffer` in the image's native pixel format, and the
/// detected container format.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the bytes are empty or not a
/// recognized container.
/// Returns `DecodeError::CorruptedFile` if the decoder rejects the data.
pub fn decode_image(bytes: &[u8]) -> Result<(PixelBuffer, ImageFormat), DecodeError> {
    let format = guess_format(bytes)?;

    let reader = ImageReader::with_format(Cursor::new(bytes), format);
    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let buffer = PixelBuffer::from_dynamic_image(img);
    debug!(
        format = format_name(format),
        width = buffer.width,
        height = buffer.height,
        pixel_format = ?buffer.format,
        "decoded image"
    );
    Ok((buffer, format))
}

/// Detect the container format of encoded image bytes without decoding them.
pub fn guess_format(bytes: &[u8]) -> Result<ImageFormat, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }
    image::guess_format(bytes).map_err(|_| DecodeError::InvalidFormat)
}

/// Short lowercase name of a container format, e.g. "png" or "jpeg".
pub fn format_name(format: ImageFormat) -> &'static str {
    let mime = format.to_mime_type();
    mime.strip_prefix("image/").unwrap_or(mime)
}
