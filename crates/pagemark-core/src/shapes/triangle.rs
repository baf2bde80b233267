//! Isoceles triangles mirrored from the drag corners.

use super::{Corners, ShapeId, ShapeStyle};
use kurbo::Point;

/// A triangle with apex at the start corner and a horizontal base
/// through the drag corner, mirrored about the apex.
#[derive(Debug, Clone)]
pub struct Triangle {
    pub id: ShapeId,
    pub corners: Corners,
    pub style: ShapeStyle,
    pub angle: f64,
    pub selected: bool,
}

impl Triangle {
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

    /// The three vertices: apex, drag corner, mirrored base corner.
    pub fn vertices(&self) -> [Point; 3] {
        let c = &self.corners;
        [
            Point::new(c.x1, c.y1),
            Point::new(c.x2, c.y2),
            Point::new(c.x1 * 2.0 - c.x2, c.y2),
        ]
    }
}
