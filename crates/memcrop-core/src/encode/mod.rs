//! Image encoding for memcrop.
//!
//! This module provides functionality for:
//! - Encoding pixel buffers to PNG (lossless, 8/16-bit)
//! - Encoding pixel buffers to JPEG with configurable quality
//! - Dispatching on [`EncodeOptions`] via [`encode_image`]
//!
//! Encoders reject pixel formats their container cannot hold instead of
//! converting them.
//!
//! # Examples
//!
//! ```ignore
//! use memcrop_core::encode::{encode_image, EncodeOptions};
//!
//! let png_bytes = encode_image(&cropped, &EncodeOptions::png()).unwrap();
//! println!("Encoded {} bytes", png_bytes.len());
//! ```

mod jpeg;
mod png;
mod types;

pub use jpeg::encode_jpeg;
pub use png::encode_png;
pub use types::{EncodeError, EncodeOptions, OutputFormat, PngCompression, DEFAULT_JPEG_QUALITY};

use crate::decode::PixelBuffer;

/// Encode a pixel buffer with the container and settings in `options`.
pub fn encode_image(buffer: &PixelBuffer, options: &EncodeOptions) -> Result<Vec<u8>, EncodeError> {
    let bytes = match options.format {
        OutputFormat::Png => encode_png(buffer, options.png_compression)?,
        OutputFormat::Jpeg => encode_jpeg(buffer, options.jpeg_quality)?,
    };
    tracing::debug!(
        format = %options.format,
        width = buffer.width,
        height = buffer.height,
        bytes = bytes.len(),
        "encoded image"
    );
    Ok(bytes)
}
