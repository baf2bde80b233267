//! Freehand strokes (pencil and eraser).

use super::{ShapeId, ShapeStyle};
use crate::geometry::bounding_box;
use kurbo::{Point, Rect, Vec2};

/// A polyline stroke recorded point by point while the pointer is down.
///
/// The path is append-only during drawing and always non-empty: creation
/// seeds it with the pointer-down position.
#[derive(Debug, Clone)]
pub struct Freehand {
    pub id: ShapeId,
    pub points: Vec<Point>,
    /// Eraser strokes paint in the page base color instead of `style.color`.
    pub is_eraser: bool,
    pub style: ShapeStyle,
    pub angle: f64,
    pub selected: bool,
}

impl Freehand {
    pub fn new(id: ShapeId, start: Point, style: ShapeStyle, is_eraser: bool) -> Self {
        Self {
            id,
            points: vec![start],
            is_eraser,
            style,
            angle: 0.0,
            selected: false,
        }
    }

    /// Append the current pointer position while painting.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn bounds(&self) -> Rect {
        bounding_box(&self.points)
    }

    /// Shift every path point by the same delta.
    pub fn translate(&mut self, delta: Vec2) {
        for point in &mut self.points {
            *point += delta;
        }
    }
}
