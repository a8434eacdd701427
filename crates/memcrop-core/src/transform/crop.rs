//! Rectangular crop of a pixel buffer.
//!
//! Cropping copies the pixels inside a [`Rect`] into a new, independently
//! owned [`PixelBuffer`] with the same pixel format as the source. Values
//! are copied byte-for-byte; nothing is resampled or converted.
//!
//! Invalid input is rejected rather than clamped:
//!
//! - empty or inconsistent source => [`CropError::InvalidSource`]
//! - region with no area => [`CropError::InvalidRegion`]
//! - region reaching outside the source => [`CropError::OutOfBounds`]
//!
//! # Example
//!
//! ```ignore
//! // Cut a 500x500 window out of a 600x600 image
//! let cropped = crop(&image, Rect::new(50, 50, 550, 550))?;
//! ```

use thiserror::Error;
use tracing::trace;

use super::Rect;
use crate::decode::PixelBuffer;

/// Errors that can occur while cropping.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CropError {
    /// Source has zero width/height, or its pixel data does not match its dimensions.
    #[error("Invalid source buffer ({width}x{height}, {actual} bytes): {reason}")]
    InvalidSource {
        width: u32,
        height: u32,
        actual: usize,
        reason: &'static str,
    },

    /// Region has no area (x0 >= x1 or y0 >= y1).
    #[error("Invalid crop region {region}: x0 must be < x1 and y0 must be < y1")]
    InvalidRegion { region: Rect },

    /// Region extends past the source's edges.
    #[error("Crop region {region} is outside the {width}x{height} source")]
    OutOfBounds { region: Rect, width: u32, height: u32 },
}

/// Crop a rectangular region out of `source`.
///
/// # Arguments
///
/// * `source` - Image to crop; not modified
/// * `region` - Half-open region `[x0, x1) x [y0, y1)` in source pixels
///
/// # Returns
///
/// A new `PixelBuffer` of size `(x1 - x0) x (y1 - y0)` whose pixel (i, j)
/// equals the source pixel (x0 + i, y0 + j).
///
/// # Errors
///
/// Checked in order: [`CropError::InvalidSource`], [`CropError::InvalidRegion`],
/// [`CropError::OutOfBounds`]. No output is produced on error.
pub fn crop(source: &PixelBuffer, region: Rect) -> Result<PixelBuffer, CropError> {
    validate(source, region)?;

    // Validated above: 0 <= x0 < x1 <= width, 0 <= y0 < y1 <= height
    let out_width = (region.x1 - region.x0) as u32;
    let out_height = (region.y1 - region.y0) as u32;
    let bpp = source.format.bytes_per_pixel();
    let src_stride = source.row_stride();
    let dst_stride = out_width as usize * bpp;
    let col_offset = region.x0 as usize * bpp;

    trace!(%region, out_width, out_height, bpp, "cropping");

    let mut output = vec![0u8; dst_stride * out_height as usize];

    // Copy pixel data row by row for efficiency
    for (j, dst_row) in output.chunks_exact_mut(dst_stride).enumerate() {
        let src_start = (region.y0 as usize + j) * src_stride + col_offset;
        dst_row.copy_from_slice(&source.pixels[src_start..src_start + dst_stride]);
    }

    Ok(PixelBuffer {
        width: out_width,
        height: out_height,
        format: source.format,
        pixels: output,
    })
}

fn validate(source: &PixelBuffer, region: Rect) -> Result<(), CropError> {
    let invalid_source = |reason| CropError::InvalidSource {
        width: source.width,
        height: source.height,
        actual: source.pixels.len(),
        reason,
    };

    if source.width == 0 || source.height == 0 {
        return Err(invalid_source("width and height must be non-zero"));
    }
    if !source.has_consistent_length() {
        return Err(invalid_source("pixel data length does not match dimensions"));
    }
    if region.is_degenerate() {
        return Err(CropError::InvalidRegion { region });
    }
    if !region.fits_within(source.width, source.height) {
        return Err(CropError::OutOfBounds {
            region,
            width: source.width,
            height: source.height,
        });
    }
    Ok(())
}


// ============================================================================
// Property-Based Tests
// ============================================================================
