//! Image decoding for memcrop.
//!
//! This module provides functionality for:
//! - Detecting the container format of encoded bytes
//! - Decoding PNG and JPEG images into a [`PixelBuffer`]
//! - Converting between [`PixelBuffer`] and the `image` crate's `DynamicImage`
//!
//! # Pixel Formats
//!
//! Decoding keeps the source's native layout (8/16-bit gray, gray+alpha,
//! RGB, RGBA, float RGB/RGBA). Nothing downstream converts colors, so a
//! 16-bit PNG stays 16-bit through cropping and re-encoding.
//!
//! # Examples
//!
//! ```ignore
//! use memcrop_core::decode::{decode_image, format_name};
//!
//! let bytes = std::fs::read("photo.png").unwrap();
//! let (image, format) = decode_image(&bytes).unwrap();
//! println!("Decoded {}x{} {} image", image.width, image.height, format_name(format));
//! ```

mod container;
mod types;

pub use container::{decode_image, format_name, guess_format};
pub use types::{DecodeError, PixelBuffer, PixelFormat};
