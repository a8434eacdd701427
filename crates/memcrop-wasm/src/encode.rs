//! Image encoding WASM bindings.
//!
//! # Functions
//!
//! - [`encode_png`] - Encode a JsPixelBuffer to PNG bytes
//! - [`encode_jpeg`] - Encode a JsPixelBuffer to JPEG bytes
//!
//! # Example
//!
//! ```typescript
//! import { encode_png, encode_jpeg } from '@memcrop/wasm';
//!
//! const png = encode_png(cropped, 1);   // default compression
//! const jpeg = encode_jpeg(cropped, 90);
//! ```

use crate::types::{compression_from_u8, to_js_error, JsPixelBuffer};
use memcrop_core::encode;
use wasm_bindgen::prelude::*;

/// Encode an image to PNG bytes.
///
/// # Arguments
///
/// * `image` - Image to encode (8 or 16-bit)
/// * `compression` - 0 = fast, 1 = default, 2 = best
///
/// # Errors
///
/// Returns an error for float pixel formats or inconsistent pixel data.
#[wasm_bindgen]
pub fn encode_png(image: &JsPixelBuffer, compression: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_png(image.as_core(), compression_from_u8(compression)).map_err(to_js_error)
}

/// Encode an image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - Image to encode ("l8" or "rgb8")
/// * `quality` - JPEG quality (1-100, recommended: 90)
///
/// # Errors
///
/// Returns an error if the image has alpha or more than 8 bits per channel.
#[wasm_bindgen]
pub fn encode_jpeg(image: &JsPixelBuffer, quality: u8) -> Result<Vec<u8>, JsValue> {
    encode::encode_jpeg(image.as_core(), quality).map_err(to_js_error)
}
