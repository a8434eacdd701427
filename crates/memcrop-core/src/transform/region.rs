//! Crop region in pixel coordinates.
//!
//! A [`Rect`] is half-open: it covers columns `x0..x1` and rows `y0..y1`.
//! The origin (0, 0) is the top-left pixel. Coordinates are signed so that
//! untrusted input (e.g. from a request body) can be represented as-is and
//! rejected by [`crop`](super::crop) instead of wrapping around.

use serde::{Deserialize, Serialize};

/// Half-open rectangular region `[x0, x1) x [y0, y1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive)
    pub x0: i64,
    /// Top edge (inclusive)
    pub y0: i64,
    /// Right edge (exclusive)
    pub x1: i64,
    /// Bottom edge (exclusive)
    pub y1: i64,
}

impl Rect {
    /// Create a region from its two corners.
    pub fn new(x0: i64, y0: i64, x1: i64, y1: i64) -> Self {
        Self { x0, y0, x1, y1 }
    }

    /// Create a region from its top-left corner and size.
    pub fn from_origin_size(x: i64, y: i64, width: i64, height: i64) -> Self {
        Self::new(x, y, x.saturating_add(width), y.saturating_add(height))
    }

    /// Region covering a whole `width` x `height` image.
    pub fn full(width: u32, height: u32) -> Self {
        Self::new(0, 0, width as i64, height as i64)
    }

    /// Width of the region (may be zero or negative for degenerate regions).
    pub fn width(&self) -> i64 {
        self.x1.saturating_sub(self.x0)
    }

    /// Height of the region (may be zero or negative for degenerate regions).
    pub fn height(&self) -> i64 {
        self.y1.saturating_sub(self.y0)
    }

    /// True if the region covers no pixels.
    pub fn is_degenerate(&self) -> bool {
        self.x0 >= self.x1 || self.y0 >= self.y1
    }

    /// True if the region lies entirely within a `width` x `height` image.
    pub fn fits_within(&self, width: u32, height: u32) -> bool {
        self.x0 >= 0 && self.y0 >= 0 && self.x1 <= width as i64 && self.y1 <= height as i64
    }

    /// Shift the region by (dx, dy).
    ///
    /// Useful for mapping a region expressed relative to an earlier crop
    /// back into the original image's coordinates.
    pub fn translate(&self, dx: i64, dy: i64) -> Self {
        Self::new(
            self.x0.saturating_add(dx),
            self.y0.saturating_add(dy),
            self.x1.saturating_add(dx),
            self.y1.saturating_add(dy),
        )
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})-({}, {})", self.x0, self.y0, self.x1, self.y1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions() {
        let r = Rect::new(50, 50, 550, 550);
        assert_eq!(r.width(), 500);
        assert_eq!(r.height(), 500);
        assert!(!r.is_degenerate());
    }

    #[test]
    fn test_from_origin_size() {
        let r = Rect::from_origin_size(10, 20, 30, 40);
        assert_eq!(r, Rect::new(10, 20, 40, 60));
    }

    #[test]
    fn test_degenerate() {
        assert!(Rect::new(5, 0, 5, 10).is_degenerate());
        assert!(Rect::new(0, 5, 10, 5).is_degenerate());
        assert!(Rect::new(6, 0, 5, 10).is_degenerate());
    }

    #[test]
    fn test_fits_within() {
        assert!(Rect::full(100, 80).fits_within(100, 80));
        assert!(!Rect::new(0, 0, 101, 80).fits_within(100, 80));
        assert!(!Rect::new(-1, 0, 10, 10).fits_within(100, 80));
        assert!(!Rect::new(0, 0, 10, 81).fits_within(100, 80));
    }

    #[test]
    fn test_translate() {
        let r = Rect::new(1, 2, 3, 4).translate(10, 20);
        assert_eq!(r, Rect::new(11, 22, 13, 24));
    }

    #[test]
    fn test_display() {
        assert_eq!(Rect::new(1, 2, 3, 4).to_string(), "(1, 2)-(3, 4)");
    }

    #[test]
    fn test_deserialize_from_request_json() {
        let r: Rect = serde_json::from_str(r#"{"x0":50,"y0":50,"x1":550,"y1":550}"#).unwrap();
        assert_eq!(r, Rect::new(50, 50, 550, 550));
    }
}
