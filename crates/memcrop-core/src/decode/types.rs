//! Core types for decoded pixel data.

use image::{DynamicImage, ExtendedColorType, ImageBuffer};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The container format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image data is corrupted or incomplete.
    #[error("Corrupted or incomplete image data: {0}")]
    CorruptedFile(String),
}

/// Per-pixel memory layout of a [`PixelBuffer`].
///
/// Multi-byte channels (16-bit integer, 32-bit float) are stored in native
/// byte order, matching what the `image` crate hands out and accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 8-bit luminance.
    L8,
    /// 8-bit luminance with alpha.
    La8,
    /// 8-bit RGB.
    Rgb8,
    /// 8-bit RGBA.
    Rgba8,
    /// 16-bit luminance.
    L16,
    /// 16-bit luminance with alpha.
    La16,
    /// 16-bit RGB.
    Rgb16,
    /// 16-bit RGBA.
    Rgba16,
    /// 32-bit float RGB.
    Rgb32F,
    /// 32-bit float RGBA.
    Rgba32F,
}

impl PixelFormat {
    /// Number of channels per pixel.
    pub fn channel_count(self) -> usize {
        match self {
            PixelFormat::L8 | PixelFormat::L16 => 1,
            PixelFormat::La8 | PixelFormat::La16 => 2,
            PixelFormat::Rgb8 | PixelFormat::Rgb16 | PixelFormat::Rgb32F => 3,
            PixelFormat::Rgba8 | PixelFormat::Rgba16 | PixelFormat::Rgba32F => 4,
        }
    }

    /// Number of bytes used by a single channel value.
    pub fn bytes_per_channel(self) -> usize {
        match self {
            PixelFormat::L8 | PixelFormat::La8 | PixelFormat::Rgb8 | PixelFormat::Rgba8 => 1,
            PixelFormat::L16 | PixelFormat::La16 | PixelFormat::Rgb16 | PixelFormat::Rgba16 => 2,
            PixelFormat::Rgb32F | PixelFormat::Rgba32F => 4,
        }
    }

    /// Number of bytes used by a single pixel.
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        self.channel_count() * self.bytes_per_channel()
    }

    /// Returns true if the format carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(
            self,
            PixelFormat::La8
                | PixelFormat::Rgba8
                | PixelFormat::La16
                | PixelFormat::Rgba16
                | PixelFormat::Rgba32F
        )
    }

    /// Map an `image` crate color type onto a pixel format.
    ///
    /// Returns `None` for color types this crate does not model.
    pub fn from_color_type(color: image::ColorType) -> Option<Self> {
        use image::ColorType;
        match color {
            ColorType::L8 => Some(PixelFormat::L8),
            ColorType::La8 => Some(PixelFormat::La8),
            ColorType::Rgb8 => Some(PixelFormat::Rgb8),
            ColorType::Rgba8 => Some(PixelFormat::Rgba8),
            ColorType::L16 => Some(PixelFormat::L16),
            ColorType::La16 => Some(PixelFormat::La16),
            ColorType::Rgb16 => Some(PixelFormat::Rgb16),
            ColorType::Rgba16 => Some(PixelFormat::Rgba16),
            ColorType::Rgb32F => Some(PixelFormat::Rgb32F),
            ColorType::Rgba32F => Some(PixelFormat::Rgba32F),
            _ => None,
        }
    }

    /// Convert to the `image` crate's encoder color type.
    pub fn to_extended_color_type(self) -> ExtendedColorType {
        match self {
            PixelFormat::L8 => ExtendedColorType::L8,
            PixelFormat::La8 => ExtendedColorType::La8,
            PixelFormat::Rgb8 => ExtendedColorType::Rgb8,
            PixelFormat::Rgba8 => ExtendedColorType::Rgba8,
            PixelFormat::L16 => ExtendedColorType::L16,
            PixelFormat::La16 => ExtendedColorType::La16,
            PixelFormat::Rgb16 => ExtendedColorType::Rgb16,
            PixelFormat::Rgba16 => ExtendedColorType::Rgba16,
            PixelFormat::Rgb32F => ExtendedColorType::Rgb32F,
            PixelFormat::Rgba32F => ExtendedColorType::Rgba32F,
        }
    }
}

/// A decoded image held as raw pixel bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Layout of each pixel in `pixels`.
    pub format: PixelFormat,
    /// Pixel data in row-major order.
    /// Length should be width * height * format.bytes_per_pixel().
    pub pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a new PixelBuffer with the given dimensions, format and pixel data.
    pub fn new(width: u32, height: u32, format: PixelFormat, pixels: Vec<u8>) -> Self {
        let buffer = Self {
            width,
            height,
            format,
            pixels,
        };
        debug_assert!(buffer.has_consistent_length(), "Pixel buffer size mismatch");
        buffer
    }

    /// Create a PixelBuffer from an `image::DynamicImage`, keeping its native layout.
    ///
    /// Color types without a [`PixelFormat`] counterpart are widened to RGBA8.
    pub fn from_dynamic_image(img: DynamicImage) -> Self {
        let (width, height) = (img.width(), img.height());
        match PixelFormat::from_color_type(img.color()) {
            Some(format) => Self {
                width,
                height,
                format,
                pixels: img.as_bytes().to_vec(),
            },
            None => Self {
                width,
                height,
                format: PixelFormat::Rgba8,
                pixels: img.into_rgba8().into_raw(),
            },
        }
    }

    /// Convert to an `image::DynamicImage`.
    ///
    /// Returns `None` if the pixel data length does not match the dimensions.
    pub fn to_dynamic_image(&self) -> Option<DynamicImage> {
        if !self.has_consistent_length() {
            return None;
        }
        let (w, h) = (self.width, self.height);
        let img = match self.format {
            PixelFormat::L8 => DynamicImage::ImageLuma8(ImageBuffer::from_raw(w, h, self.pixels.clone())?),
            PixelFormat::La8 => DynamicImage::ImageLumaA8(ImageBuffer::from_raw(w, h, self.pixels.clone())?),
            PixelFormat::Rgb8 => DynamicImage::ImageRgb8(ImageBuffer::from_raw(w, h, self.pixels.clone())?),
            PixelFormat::Rgba8 => DynamicImage::ImageRgba8(ImageBuffer::from_raw(w, h, self.pixels.clone())?),
            PixelFormat::L16 => DynamicImage::ImageLuma16(ImageBuffer::from_raw(w, h, self.u16_samples())?),
            PixelFormat::La16 => DynamicImage::ImageLumaA16(ImageBuffer::from_raw(w, h, self.u16_samples())?),
            PixelFormat::Rgb16 => DynamicImage::ImageRgb16(ImageBuffer::from_raw(w, h, self.u16_samples())?),
            PixelFormat::Rgba16 => DynamicImage::ImageRgba16(ImageBuffer::from_raw(w, h, self.u16_samples())?),
            PixelFormat::Rgb32F => DynamicImage::ImageRgb32F(ImageBuffer::from_raw(w, h, self.f32_samples())?),
            PixelFormat::Rgba32F => DynamicImage::ImageRgba32F(ImageBuffer::from_raw(w, h, self.f32_samples())?),
        };
        Some(img)
    }

    fn u16_samples(&self) -> Vec<u16> {
        self.pixels
            .chunks_exact(2)
            .map(|c| u16::from_ne_bytes([c[0], c[1]]))
            .collect()
    }

    fn f32_samples(&self) -> Vec<f32> {
        self.pixels
            .chunks_exact(4)
            .map(|c| f32::from_ne_bytes([c[0], c[1], c[2], c[3]]))
            .collect()
    }

    /// Get the raw bytes of the pixel at (x, y), or `None` if out of range.
    pub fn pixel(&self, x: u32, y: u32) -> Option<&[u8]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let bpp = self.format.bytes_per_pixel();
        let start = (y as usize)
            .checked_mul(self.row_stride())?
            .checked_add((x as usize).checked_mul(bpp)?)?;
        self.pixels.get(start..start.checked_add(bpp)?)
    }

    /// Number of bytes in one row of pixels.
    ///
    /// Saturates on targets where the row does not fit in `usize`; such a
    /// buffer never passes [`has_consistent_length`](Self::has_consistent_length).
    #[inline]
    pub fn row_stride(&self) -> usize {
        (self.width as usize).saturating_mul(self.format.bytes_per_pixel())
    }

    /// Expected length of `pixels` for the current dimensions and format.
    ///
    /// Returns `None` if the size does not fit in `usize`.
    pub fn expected_len(&self) -> Option<usize> {
        (self.width as usize)
            .checked_mul(self.format.bytes_per_pixel())?
            .checked_mul(self.height as usize)
    }

    /// Check that `pixels` holds exactly width * height pixels.
    pub fn has_consistent_length(&self) -> bool {
        self.expected_len() == Some(self.pixels.len())
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Get the size of the pixel buffer in bytes.
    pub fn byte_size(&self) -> usize {
        self.pixels.len()
    }

    /// Check if this is an empty/invalid image.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}
