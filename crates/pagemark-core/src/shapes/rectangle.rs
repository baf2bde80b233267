//! Axis-defined rectangles.

use super::{Corners, ShapeId, ShapeStyle};
use kurbo::Point;

/// A stroked rectangle spanning the corner pair.
#[derive(Debug, Clone)]
pub struct Rectangle {
    pub id: ShapeId,
    pub corners: Corners,
    pub style: ShapeStyle,
    pub angle: f64,
    pub selected: bool,
}

impl Rectangle {
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
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Rect;

    #[test]
    fn test_inverted_drag_keeps_corners() {
        let mut rect = Rectangle::new(1, Point::new(100.0, 100.0), ShapeStyle::default());
        rect.corners.drag_to(Point::new(60.0, 140.0));
        assert_eq!(rect.corners.x2, 60.0);
        assert_eq!(
            rect.corners.normalized(),
            Rect::new(60.0, 100.0, 100.0, 140.0)
        );
    }
}
