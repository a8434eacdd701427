//! memcrop WASM - WebAssembly bindings for memcrop
//!
//! This crate provides WASM bindings to expose the memcrop-core functionality
//! to JavaScript/TypeScript applications.
//!
//! # Module Structure
//!
//! - `types` - WASM-compatible wrapper types for pixel data
//! - `decode` - Image decoding bindings (PNG, JPEG)
//! - `transform` - Crop bindings
//! - `encode` - Image encoding bindings (PNG, JPEG)
//! - `pipeline` - Base64-in, base64-out crop pipeline
//!
//! Errors are thrown as strings and also reported on the browser console.
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, crop_image, encode_png } from '@memcrop/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const cropped = crop_image(image, 50, 50, 550, 550);
//! const png = encode_png(cropped, 1);
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod encode;
mod pipeline;
mod transform;
mod types;

// Re-export public types
pub use decode::{decode_image, detect_format};
pub use encode::{encode_jpeg, encode_png};
pub use pipeline::{crop_base64_image, crop_request};
pub use transform::crop_image;
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
