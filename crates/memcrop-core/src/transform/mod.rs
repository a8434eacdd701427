//! Image transformation operations.
//!
//! The only transform is a rectangular crop. It is applied between decoding
//! and encoding in the pipeline and never changes the pixel format.
//!
//! # Coordinate System
//!
//! - Crop coordinates are integer pixels in the source image
//! - Regions are half-open: `[x0, x1) x [y0, y1)`
//! - Origin is top-left corner

mod crop;
mod region;

pub use crop::{crop, CropError};
pub use region::Rect;
