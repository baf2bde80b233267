//! Pointer hit testing over a page's shapes and texts.

use crate::geometry::{rotate_point, to_radians};
use crate::measure::TextMeasure;
use crate::page::Page;
use crate::shapes::{Shape, ShapeId};
use crate::text::{TextId, TextItem};
use kurbo::{Point, Rect};
use serde::{Deserialize, Serialize};

/// Side length of a manipulation handle's hot zone, in page pixels.
pub const HANDLE_SIZE: f64 = 10.0;

/// The manipulation a handle initiates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HandleKind {
    Rotate,
    Resize,
}

/// What the pointer landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    ShapeHandle(ShapeId, HandleKind),
    ShapeBody(ShapeId),
    TextHandle(TextId, HandleKind),
    TextBody(TextId),
    Empty,
}

/// Inclusive point-in-rect test (kurbo's `contains` is half-open).
fn rect_contains(rect: Rect, point: Point) -> bool {
    point.x >= rect.x0 && point.x <= rect.x1 && point.y >= rect.y0 && point.y <= rect.y1
}

/// Center of a handle's hot square on the un-rotated box, rotated into
/// place by the entity's angle about `pivot`.
fn handle_center(bounds: Rect, kind: HandleKind, angle_degrees: f64, pivot: Point) -> Point {
    let half = HANDLE_SIZE / 2.0;
    let unrotated = match kind {
        // Inside the top-right corner of the box.
        HandleKind::Rotate => Point::new(bounds.x1 - half, bounds.y0 + half),
        // Inside the bottom-right corner.
        HandleKind::Resize => Point::new(bounds.x1 - half, bounds.y1 - half),
    };
    rotate_point(pivot, unrotated, to_radians(angle_degrees))
}

fn handle_hit(point: Point, center: Point) -> bool {
    let half = HANDLE_SIZE / 2.0;
    (point.x - center.x).abs() <= half && (point.y - center.y).abs() <= half
}

/// Handles offered by a selected shape, tried rotate first.
fn shape_handle_at(shape: &Shape, point: Point) -> Option<HandleKind> {
    let bounds = shape.bounds();
    let pivot = bounds.center();
    let rotate = handle_center(bounds, HandleKind::Rotate, shape.angle(), pivot);
    if handle_hit(point, rotate) {
        return Some(HandleKind::Rotate);
    }
    if shape.supports_resize() {
        let resize = handle_center(bounds, HandleKind::Resize, shape.angle(), pivot);
        if handle_hit(point, resize) {
            return Some(HandleKind::Resize);
        }
    }
    None
}

/// The rotate handle of a selected text (texts never resize).
fn text_handle_at(text: &TextItem, point: Point, measure: &dyn TextMeasure) -> Option<HandleKind> {
    let bounds = text.bounds(measure);
    let pivot = text.center(measure);
    let rotate = handle_center(bounds, HandleKind::Rotate, text.angle, pivot);
    handle_hit(point, rotate).then_some(HandleKind::Rotate)
}

/// Resolve what `point` lands on, in strict precedence order: shapes in
/// reverse z-order (a selected shape's handles before its body, any
/// handle hit short-circuiting everything), then texts in reverse
/// z-order the same way.
///
/// Body tests intentionally ignore rotation: a rotated shape is still
/// picked by its un-rotated bounding box.
pub fn hit_test(page: &Page, point: Point, measure: &dyn TextMeasure) -> Hit {
    for shape in page.shapes.iter().rev() {
        if shape.selected() {
            if let Some(kind) = shape_handle_at(shape, point) {
                return Hit::ShapeHandle(shape.id(), kind);
            }
        }
        if rect_contains(shape.bounds(), point) {
            return Hit::ShapeBody(shape.id());
        }
    }

    for text in page.texts.iter().rev() {
        if text.selected {
            if let Some(kind) = text_handle_at(text, point, measure) {
                return Hit::TextHandle(text.id, kind);
            }
        }
        if rect_contains(text.bounds(measure), point) {
            return Hit::TextBody(text.id);
        }
    }

    Hit::Empty
}
