//! Drawn primitives: one module per shape kind plus the enum wrapper.

mod circle;
mod freehand;
mod image;
mod line;
mod rectangle;
mod triangle;

pub use circle::Circle;
pub use freehand::Freehand;
pub use image::ImageShape;
pub use line::Line;
pub use rectangle::Rectangle;
pub use triangle::Triangle;

use crate::geometry::normalized_rect;
use kurbo::{Point, Rect, Vec2};
use peniko::Color;
use serde::{Deserialize, Serialize};

/// Unique identifier for shapes, allocated by the document.
pub type ShapeId = u64;

/// Serializable RGBA color (peniko's `Color` has no serde support).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl From<Color> for Rgba {
    fn from(color: Color) -> Self {
        let rgba = color.to_rgba8();
        Self::new(rgba.r, rgba.g, rgba.b, rgba.a)
    }
}

impl From<Rgba> for Color {
    fn from(color: Rgba) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Paint attributes shared by stroked shapes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeStyle {
    pub color: Rgba,
    pub stroke_width: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            color: Rgba::black(),
            stroke_width: 3.0,
        }
    }
}

/// A start/drag corner pair, kept unnormalized.
///
/// `x2 < x1` and/or `y2 < y1` are valid and preserve the drag direction;
/// normalization happens only transiently for hit testing and chrome.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Corners {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Corners {
    /// A zero-size span with both corners at `point`.
    pub fn at(point: Point) -> Self {
        Self {
            x1: point.x,
            y1: point.y,
            x2: point.x,
            y2: point.y,
        }
    }

    /// A span centered on `point` with the given side lengths.
    pub fn centered(point: Point, width: f64, height: f64) -> Self {
        Self {
            x1: point.x - width / 2.0,
            y1: point.y - height / 2.0,
            x2: point.x + width / 2.0,
            y2: point.y + height / 2.0,
        }
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn drag_corner(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    /// Signed width (drag corner minus start corner).
    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    /// Signed height.
    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn center(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    pub fn normalized(&self) -> Rect {
        normalized_rect(self.x1, self.y1, self.x2, self.y2)
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x1 += delta.x;
        self.y1 += delta.y;
        self.x2 += delta.x;
        self.y2 += delta.y;
    }

    /// Move only the drag corner, leaving the start corner fixed.
    pub fn drag_to(&mut self, point: Point) {
        self.x2 = point.x;
        self.y2 = point.y;
    }
}

/// All shape kinds, as a tagged union so each kind carries exactly the
/// geometry it needs.
#[derive(Debug, Clone)]
pub enum Shape {
    Freehand(Freehand),
    Line(Line),
    Rectangle(Rectangle),
    Circle(Circle),
    Triangle(Triangle),
    Image(ImageShape),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Freehand(s) => s.id,
            Shape::Line(s) => s.id,
            Shape::Rectangle(s) => s.id,
            Shape::Circle(s) => s.id,
            Shape::Triangle(s) => s.id,
            Shape::Image(s) => s.id,
        }
    }

    /// Axis-aligned bounding box of the unrotated geometry; the hit
    /// tester tests bodies against this box regardless of angle.
    pub fn bounds(&self) -> Rect {
        match self {
            Shape::Freehand(s) => s.bounds(),
            Shape::Line(s) => s.corners.normalized(),
            Shape::Rectangle(s) => s.corners.normalized(),
            Shape::Circle(s) => s.corners.normalized(),
            Shape::Triangle(s) => s.corners.normalized(),
            Shape::Image(s) => s.corners.normalized(),
        }
    }

    /// Rotation pivot: the bounding-box center.
    pub fn center(&self) -> Point {
        self.bounds().center()
    }

    /// Move-drag reference origin: the start corner for corner shapes,
    /// the path bounding-box minimum for freehand strokes.
    pub fn origin(&self) -> Point {
        match self {
            Shape::Freehand(s) => s.bounds().origin(),
            Shape::Line(s) => s.corners.start(),
            Shape::Rectangle(s) => s.corners.start(),
            Shape::Circle(s) => s.corners.start(),
            Shape::Triangle(s) => s.corners.start(),
            Shape::Image(s) => s.corners.start(),
        }
    }

    pub fn angle(&self) -> f64 {
        match self {
            Shape::Freehand(s) => s.angle,
            Shape::Line(s) => s.angle,
            Shape::Rectangle(s) => s.angle,
            Shape::Circle(s) => s.angle,
            Shape::Triangle(s) => s.angle,
            Shape::Image(s) => s.angle,
        }
    }

    /// Accumulate rotation; the angle is never wrapped or normalized.
    pub fn rotate_by(&mut self, degrees: f64) {
        match self {
            Shape::Freehand(s) => s.angle += degrees,
            Shape::Line(s) => s.angle += degrees,
            Shape::Rectangle(s) => s.angle += degrees,
            Shape::Circle(s) => s.angle += degrees,
            Shape::Triangle(s) => s.angle += degrees,
            Shape::Image(s) => s.angle += degrees,
        }
    }

    pub fn set_angle(&mut self, degrees: f64) {
        match self {
            Shape::Freehand(s) => s.angle = degrees,
            Shape::Line(s) => s.angle = degrees,
            Shape::Rectangle(s) => s.angle = degrees,
            Shape::Circle(s) => s.angle = degrees,
            Shape::Triangle(s) => s.angle = degrees,
            Shape::Image(s) => s.angle = degrees,
        }
    }

    pub fn selected(&self) -> bool {
        match self {
            Shape::Freehand(s) => s.selected,
            Shape::Line(s) => s.selected,
            Shape::Rectangle(s) => s.selected,
            Shape::Circle(s) => s.selected,
            Shape::Triangle(s) => s.selected,
            Shape::Image(s) => s.selected,
        }
    }

    pub fn set_selected(&mut self, selected: bool) {
        match self {
            Shape::Freehand(s) => s.selected = selected,
            Shape::Line(s) => s.selected = selected,
            Shape::Rectangle(s) => s.selected = selected,
            Shape::Circle(s) => s.selected = selected,
            Shape::Triangle(s) => s.selected = selected,
            Shape::Image(s) => s.selected = selected,
        }
    }

    pub fn translate(&mut self, delta: Vec2) {
        match self {
            Shape::Freehand(s) => s.translate(delta),
            Shape::Line(s) => s.corners.translate(delta),
            Shape::Rectangle(s) => s.corners.translate(delta),
            Shape::Circle(s) => s.corners.translate(delta),
            Shape::Triangle(s) => s.corners.translate(delta),
            Shape::Image(s) => s.corners.translate(delta),
        }
    }

    /// The corner pair for corner-defined kinds; `None` for freehand.
    pub fn corners(&self) -> Option<&Corners> {
        match self {
            Shape::Freehand(_) => None,
            Shape::Line(s) => Some(&s.corners),
            Shape::Rectangle(s) => Some(&s.corners),
            Shape::Circle(s) => Some(&s.corners),
            Shape::Triangle(s) => Some(&s.corners),
            Shape::Image(s) => Some(&s.corners),
        }
    }

    /// Move the drag corner while painting or resizing. No-op for
    /// freehand, whose geometry grows by appending path points instead.
    pub fn set_drag_corner(&mut self, point: Point) {
        match self {
            Shape::Freehand(_) => {}
            Shape::Line(s) => s.corners.drag_to(point),
            Shape::Rectangle(s) => s.corners.drag_to(point),
            Shape::Circle(s) => s.corners.drag_to(point),
            Shape::Triangle(s) => s.corners.drag_to(point),
            Shape::Image(s) => s.corners.drag_to(point),
        }
    }

    /// Whether the controller offers a resize handle for this kind.
    ///
    /// Box-like kinds resize; lines and freehand strokes only move and
    /// rotate.
    pub fn supports_resize(&self) -> bool {
        matches!(
            self,
            Shape::Rectangle(_) | Shape::Circle(_) | Shape::Triangle(_) | Shape::Image(_)
        )
    }

    /// Paint style; images carry no stroke style.
    pub fn style(&self) -> Option<&ShapeStyle> {
        match self {
            Shape::Freehand(s) => Some(&s.style),
            Shape::Line(s) => Some(&s.style),
            Shape::Rectangle(s) => Some(&s.style),
            Shape::Circle(s) => Some(&s.style),
            Shape::Triangle(s) => Some(&s.style),
            Shape::Image(_) => None,
        }
    }

    /// Short kind name for logging.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Shape::Freehand(s) if s.is_eraser => "eraser",
            Shape::Freehand(_) => "freehand",
            Shape::Line(_) => "line",
            Shape::Rectangle(_) => "rectangle",
            Shape::Circle(_) => "circle",
            Shape::Triangle(_) => "triangle",
            Shape::Image(_) => "image",
        }
    }
}
