//! Ellipses inscribed in a corner box.

use super::{Corners, ShapeId, ShapeStyle};
use kurbo::Point;

/// An ellipse inscribed in the rectangle spanned by the corner pair.
#[derive(Debug, Clone)]
pub struct Circle {
    pub id: ShapeId,
    pub corners: Corners,
    pub style: ShapeStyle,
    pub angle: f64,
    pub selected: bool,
}

impl Circle {
    /// Create a zero-size draft at the pointer-down position.
    pub fn new(id: ShapeId, start: Point, style: ShapeStyle) -> Self {
        Self {
            id,
            corners: Corners::at(start),
            style,
            angle: 0.0,
            selected: true,
        }
    }

    /// Ellipse radii (half the signed box sides, made positive).
    pub fn radii(&self) -> (f64, f64) {
        (
            (self.corners.width() / 2.0).abs(),
            (self.corners.height() / 2.0).abs(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radii_from_inverted_drag() {
        let mut circle = Circle::new(1, Point::new(50.0, 50.0), ShapeStyle::default());
        circle.corners.drag_to(Point::new(10.0, 80.0));
        let (rx, ry) = circle.radii();
        assert_eq!(rx, 20.0);
        assert_eq!(ry, 15.0);
    }
}
