//! Pixel-space geometry types.
//!
//! Glyph shapes are authored on a 100-unit design grid and resolved to these
//! types once the target icon size is known.

/// A point in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointPx {
    pub x: i32,
    pub y: i32,
}

impl PointPx {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point moved down by `dy` pixels.
    pub fn offset_y(self, dy: i32) -> Self {
        Self::new(self.x, self.y.saturating_add(dy))
    }
}

/// An inclusive bounding box in pixel coordinates.
///
/// Both corners belong to the box, so a box from `(2, 2)` to `(2, 2)`
/// covers exactly one pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoxPx {
    /// Top-left corner.
    pub min: PointPx,
    /// Bottom-right corner.
    pub max: PointPx,
}

impl BoxPx {
    pub const fn new(min: PointPx, max: PointPx) -> Self {
        Self { min, max }
    }

    /// Creates a box from its left, top, right and bottom edges.
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(PointPx::new(left, top), PointPx::new(right, bottom))
    }

    /// Width in pixels, counting both edges.
    pub fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    /// Height in pixels, counting both edges.
    pub fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn box_px_dimensions_are_inclusive() {
        let b = BoxPx::from_ltrb(3, 4, 12, 8);
        assert_eq!(b.width(), 10);
        assert_eq!(b.height(), 5);
        assert_eq!(BoxPx::from_ltrb(2, 2, 2, 2).width(), 1);
    }

    #[test]
    fn point_offset_moves_down() {
        assert_eq!(PointPx::new(7, 10).offset_y(3), PointPx::new(7, 13));
        assert_eq!(PointPx::new(0, i32::MAX - 1).offset_y(5).y, i32::MAX);
    }
}
