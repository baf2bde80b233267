//! Straight line segments.

use super::{Corners, ShapeId, ShapeStyle};
use kurbo::Point;

/// A segment from the start corner to the drag corner.
#[derive(Debug, Clone)]
pub struct Line {
    pub id: ShapeId,
    pub corners: Corners,
    pub style: ShapeStyle,
    pub angle: f64,
    pub selected: bool,
}

impl Line {
    /// Create a zero-length draft at the pointer-down position.
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
