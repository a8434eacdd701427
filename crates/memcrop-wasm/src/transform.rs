//! WASM bindings for cropping.

use crate::types::{to_js_error, JsPixelBuffer};
use memcrop_core::transform::{crop, CropError, Rect};
use wasm_bindgen::prelude::*;

/// Crop a region out of an image.
///
/// The region is half-open: columns `x0..x1` and rows `y0..y1`, with (0, 0)
/// at the top-left pixel. Out-of-range regions are rejected, not clamped.
///
/// # Returns
///
/// New `JsPixelBuffer` of size `(x1 - x0) x (y1 - y0)` in the source's pixel format.
///
/// # Example (TypeScript)
///
/// ```typescript
/// // Cut the center 500x500 out of a 600x600 image
/// const cropped = crop_image(sourceImage, 50, 50, 550, 550);
/// ```
#[wasm_bindgen]
pub fn crop_image(
    image: &JsPixelBuffer,
    x0: i32,
    y0: i32,
    x1: i32,
    y1: i32,
) -> Result<JsPixelBuffer, JsValue> {
    crop_region(image, region_from_i32(x0, y0, x1, y1)).map_err(to_js_error)
}

pub(crate) fn region_from_i32(x0: i32, y0: i32, x1: i32, y1: i32) -> Rect {
    Rect::new(x0 as i64, y0 as i64, x1 as i64, y1 as i64)
}

fn crop_region(image: &JsPixelBuffer, region: Rect) -> Result<JsPixelBuffer, CropError> {
    crop(image.as_core(), region).map(JsPixelBuffer::from_core)
}

#[cfg(test)]
mod tests {
    use super::*;
    use memcrop_core::decode::{PixelBuffer, PixelFormat};

    /// Create a simple test image.
    fn test_image(width: u32, height: u32) -> JsPixelBuffer {
        let pixels: Vec<u8> = (0..(width * height * 4) as usize)
            .map(|i| (i % 256) as u8)
            .collect();
        JsPixelBuffer::from_core(PixelBuffer::new(width, height, PixelFormat::Rgba8, pixels))
    }

    #[test]
    fn test_crop_full_image() {
        let img = test_image(100, 100);
        let result = crop_region(&img, region_from_i32(0, 0, 100, 100)).unwrap();
        assert_eq!(result.width(), 100);
        assert_eq!(result.height(), 100);
        assert_eq!(result.pixels(), img.pixels());
    }

    #[test]
    fn test_crop_center() {
        let img = test_image(600, 600);
        let result = crop_region(&img, region_from_i32(50, 50, 550, 550)).unwrap();
        assert_eq!(result.width(), 500);
        assert_eq!(result.height(), 500);
        assert_eq!(result.format(), "rgba8");
    }

    #[test]
    fn test_crop_non_square() {
        let img = test_image(200, 100);
        let result = crop_region(&img, region_from_i32(0, 0, 100, 100)).unwrap();
        assert_eq!(result.width(), 100);
        assert_eq!(result.height(), 100);
    }

    #[test]
    fn test_crop_out_of_bounds() {
        let img = test_image(10, 10);
        let result = crop_region(&img, region_from_i32(-5, 0, 5, 5));
        assert!(matches!(result, Err(CropError::OutOfBounds { .. })));
    }
}
