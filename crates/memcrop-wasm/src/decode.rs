//! Image decoding WASM bindings.
//!
//! # Functions
//!
//! - [`decode_image`] - Decode a PNG or JPEG image from bytes
//! - [`detect_format`] - Detect the container format without decoding
//!
//! # Example
//!
//! ```typescript
//! import { decode_image, detect_format } from '@memcrop/wasm';
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! console.log(`Container: ${detect_format(bytes)}`);
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height} ${image.format}`);
//! ```

use crate::types::{to_js_error, JsPixelBuffer};
use memcrop_core::decode;
use wasm_bindgen::prelude::*;

/// Decode a PNG or JPEG image from bytes.
///
/// The pixel format of the source is kept (e.g. a 16-bit PNG decodes to "rgb16").
///
/// # Errors
///
/// Returns an error if the bytes are not a recognized image or are corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    decode::decode_image(bytes)
        .map(|(buffer, _)| JsPixelBuffer::from_core(buffer))
        .map_err(to_js_error)
}

/// Detect the container format of encoded bytes, e.g. "png" or "jpeg".
///
/// Returns `undefined` if the format is not recognized.
#[wasm_bindgen]
pub fn detect_format(bytes: &[u8]) -> Option<String> {
    decode::guess_format(bytes)
        .ok()
        .map(|format| decode::format_name(format).to_string())
}


/// WASM-specific tests that require JsValue.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use memcrop_core::decode::{PixelBuffer, PixelFormat};
    use memcrop_core::encode::{encode_png, PngCompression};
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_decode_png() {
        let buffer = PixelBuffer::new(3, 2, PixelFormat::Rgba8, vec![7u8; 24]);
        let bytes = encode_png(&buffer, PngCompression::Fast).unwrap();

        let img = decode_image(&bytes).unwrap();
        assert_eq!(img.width(), 3);
        assert_eq!(img.height(), 2);
        assert_eq!(img.format(), "rgba8");
    }

    #[wasm_bindgen_test]
    fn test_decode_invalid() {
        assert!(decode_image(&[0x00, 0x01, 0x02, 0x03]).is_err());
    }
}
