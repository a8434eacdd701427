//! WASM-compatible wrapper types for pixel data.
//!
//! This module provides JavaScript-friendly types that wrap the core memcrop types,
//! handling the conversion between Rust and JavaScript data representations.

use memcrop_core::decode::{PixelBuffer, PixelFormat};
use memcrop_core::encode::PngCompression;
use wasm_bindgen::prelude::*;

/// A decoded image wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. When you call `pixels()`, a copy is made
/// to JavaScript memory as a `Uint8Array`. Keep images in WASM memory between
/// decode, crop and encode calls and only extract pixels when needed.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new JsPixelBuffer from dimensions, a format name and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `format` - Pixel format name ("l8", "la8", "rgb8", "rgba8", "l16", ...)
    /// * `pixels` - Row-major pixel data
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, format: &str, pixels: Vec<u8>) -> Result<JsPixelBuffer, JsValue> {
        let format = parse_pixel_format(format)
            .ok_or_else(|| to_js_error(format!("Unknown pixel format: {format}")))?;
        let inner = PixelBuffer {
            width,
            height,
            format,
            pixels,
        };
        if !inner.has_consistent_length() {
            return Err(to_js_error(format!(
                "Pixel data length {} does not match {}x{} {}",
                inner.pixels.len(),
                width,
                height,
                pixel_format_name(format)
            )));
        }
        Ok(JsPixelBuffer { inner })
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel format name, e.g. "rgba8"
    #[wasm_bindgen(getter)]
    pub fn format(&self) -> String {
        pixel_format_name(self.inner.format).to_string()
    }

    /// Get the number of bytes in the pixel buffer
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels.len()
    }

    /// Returns pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels.clone()
    }
}

impl JsPixelBuffer {
    /// Wrap a core PixelBuffer.
    pub(crate) fn from_core(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    /// Borrow the wrapped core PixelBuffer.
    pub(crate) fn as_core(&self) -> &PixelBuffer {
        &self.inner
    }
}

/// Parse a lowercase pixel format name.
pub(crate) fn parse_pixel_format(name: &str) -> Option<PixelFormat> {
    let format = match name {
        "l8" => PixelFormat::L8,
        "la8" => PixelFormat::La8,
        "rgb8" => PixelFormat::Rgb8,
        "rgba8" => PixelFormat::Rgba8,
        "l16" => PixelFormat::L16,
        "la16" => PixelFormat::La16,
        "rgb16" => PixelFormat::Rgb16,
        "rgba16" => PixelFormat::Rgba16,
        "rgb32f" => PixelFormat::Rgb32F,
        "rgba32f" => PixelFormat::Rgba32F,
        _ => return None,
    };
    Some(format)
}

/// Lowercase name of a pixel format, the inverse of [`parse_pixel_format`].
pub(crate) fn pixel_format_name(format: PixelFormat) -> &'static str {
    match format {
        PixelFormat::L8 => "l8",
        PixelFormat::La8 => "la8",
        PixelFormat::Rgb8 => "rgb8",
        PixelFormat::Rgba8 => "rgba8",
        PixelFormat::L16 => "l16",
        PixelFormat::La16 => "la16",
        PixelFormat::Rgb16 => "rgb16",
        PixelFormat::Rgba16 => "rgba16",
        PixelFormat::Rgb32F => "rgb32f",
        PixelFormat::Rgba32F => "rgba32f",
    }
}

/// Convert a u8 compression value to the core PngCompression enum.
///
/// Values:
/// - 0 = Fast
/// - 1 = Default
/// - 2 = Best
///
/// Any other value defaults to Default.
pub(crate) fn compression_from_u8(value: u8) -> PngCompression {
    match value {
        0 => PngCompression::Fast,
        2 => PngCompression::Best,
        _ => PngCompression::Default,
    }
}

/// Turn an error into a JS exception value, reporting it on the browser console.
pub(crate) fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    let message = JsValue::from_str(&err.to_string());
    web_sys::console::error_1(&message);
    message
}
