//! Encoder configuration and error types.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::decode::{PixelBuffer, PixelFormat};

/// Default JPEG quality, matching common photo-editor defaults.
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Errors that can occur during encoding.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * bytes per pixel), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// Width or height is zero, or the image is too large to address
    #[error("Invalid dimensions: {width}x{height} must be non-zero and fit in memory")]
    InvalidDimensions { width: u32, height: u32 },

    /// The output container cannot store this pixel format
    #[error("{output} cannot store {format:?} pixels")]
    UnsupportedPixelFormat {
        format: PixelFormat,
        output: OutputFormat,
    },

    /// The underlying codec failed
    #[error("Encoding failed: {0}")]
    EncodingFailed(String),
}

/// Container format produced by the encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Lossless PNG (8 and 16-bit).
    #[default]
    Png,
    /// Lossy JPEG (8-bit gray and RGB).
    Jpeg,
}

impl OutputFormat {
    /// File extension for this format, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Jpeg => "jpg",
        }
    }

    /// MIME type for this format.
    pub fn mime_type(self) -> &'static str {
        match self {
            OutputFormat::Png => "image/png",
            OutputFormat::Jpeg => "image/jpeg",
        }
    }

    /// Check whether this container can store `format` without conversion.
    pub fn supports(self, format: PixelFormat) -> bool {
        match self {
            OutputFormat::Png => !matches!(format, PixelFormat::Rgb32F | PixelFormat::Rgba32F),
            OutputFormat::Jpeg => matches!(format, PixelFormat::L8 | PixelFormat::Rgb8),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Png => f.write_str("PNG"),
            OutputFormat::Jpeg => f.write_str("JPEG"),
        }
    }
}

/// PNG compression effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PngCompression {
    /// Fast compression, larger files.
    Fast,
    /// Balanced default.
    #[default]
    Default,
    /// Smallest files, slowest.
    Best,
}

impl PngCompression {
    /// Convert to the image crate's CompressionType.
    pub fn to_image_compression(self) -> image::codecs::png::CompressionType {
        use image::codecs::png::CompressionType;
        match self {
            PngCompression::Fast => CompressionType::Fast,
            PngCompression::Default => CompressionType::Default,
            PngCompression::Best => CompressionType::Best,
        }
    }
}

/// Settings controlling how a cropped buffer is re-encoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncodeOptions {
    /// Output container
    pub format: OutputFormat,
    /// JPEG quality (1-100); ignored for PNG
    pub jpeg_quality: u8,
    /// PNG compression effort; ignored for JPEG
    pub png_compression: PngCompression,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            format: OutputFormat::Png,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            png_compression: PngCompression::Default,
        }
    }
}

impl EncodeOptions {
    /// PNG output with default compression.
    pub fn png() -> Self {
        Self::default()
    }

    /// JPEG output with the given quality.
    pub fn jpeg(quality: u8) -> Self {
        Self {
            format: OutputFormat::Jpeg,
            jpeg_quality: quality,
            ..Self::default()
        }
    }

    /// Set output format
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Set JPEG quality
    pub fn with_jpeg_quality(mut self, quality: u8) -> Self {
        self.jpeg_quality = quality;
        self
    }

    /// Set PNG compression
    pub fn with_png_compression(mut self, compression: PngCompression) -> Self {
        self.png_compression = compression;
        self
    }
}

/// Shared validation for all encoders.
pub(crate) fn validate_buffer(buffer: &PixelBuffer, output: OutputFormat) -> Result<(), EncodeError> {
    if buffer.width == 0 || buffer.height == 0 {
        return Err(EncodeError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
        });
    }

    let Some(expected) = buffer.expected_len() else {
        return Err(EncodeError::InvalidDimensions {
            width: buffer.width,
            height: buffer.height,
        });
    };
    if buffer.pixels.len() != expected {
        return Err(EncodeError::InvalidPixelData {
            expected,
            actual: buffer.pixels.len(),
        });
    }

    if !output.supports(buffer.format) {
        return Err(EncodeError::UnsupportedPixelFormat {
            format: buffer.format,
            output,
        });
    }
    Ok(())
}
