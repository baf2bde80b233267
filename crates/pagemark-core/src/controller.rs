//! The interaction state machine: tool selection, pointer gestures, and
//! keyboard routing.
//!
//! One controller drives one document. Every handler finishes its
//! mutation before returning; there is no deferred work.

use crate::document::Document;
use crate::editor::{self, EditorKey};
use crate::geometry::to_degrees;
use crate::hit::{hit_test, HandleKind, Hit};
use crate::measure::TextMeasure;
use crate::raster::Raster;
use crate::shapes::{
    Circle, Freehand, ImageShape, Line, Rectangle, Rgba, Shape, ShapeStyle, Triangle,
};
use crate::text::{TextItem, DEFAULT_FONT_SIZE};
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Smallest side length a resize drag may produce, in page pixels.
pub const MIN_RESIZE: f64 = 50.0;

/// Largest side length a resize drag may produce.
pub const MAX_RESIZE: f64 = 2000.0;

/// Degrees added per press of the rotate key.
pub const ROTATE_STEP_DEGREES: f64 = 15.0;

/// The active drawing tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tool {
    Pencil,
    Eraser,
    Line,
    Rectangle,
    Circle,
    Triangle,
    Text,
    Image,
}

/// An in-flight drag over an already-placed entity.
#[derive(Debug, Clone, Copy)]
pub enum DragOp {
    /// Body drag; `offset` is pointer minus entity origin at grab time.
    Move { offset: Vec2 },
    /// Handle drag accumulating angle from the pointer's sweep about the
    /// entity center.
    Rotate {
        initial_angle: f64,
        initial_pointer_angle: f64,
    },
    /// Handle drag moving the drag corner; `offset` is pointer minus
    /// drag corner at grab time.
    Resize { offset: Vec2 },
}

/// What the controller is in the middle of.
#[derive(Debug, Clone)]
pub enum State {
    Idle,
    DraggingShape { id: u64, op: DragOp },
    DraggingText { id: u64, op: DragOp },
    /// A draft shape not yet in the page list, growing under the pointer.
    Painting { draft: Shape },
    /// The text tool clicked empty space; the first printable key will
    /// create a text item here.
    AwaitingText { position: Point },
}

/// Pointer and keyboard dispatcher over the current page.
pub struct Controller {
    pub tool: Tool,
    pub color: Rgba,
    pub stroke_width: f64,
    pub font_size: f64,
    /// Raster armed for the next image-tool click.
    pending_image: Option<Arc<Raster>>,
    state: State,
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}

/// Pointer angle about `center`, in degrees.
fn pointer_angle(center: Point, point: Point) -> f64 {
    to_degrees((point.y - center.y).atan2(point.x - center.x))
}

impl Controller {
    pub fn new() -> Self {
        Self {
            tool: Tool::Pencil,
            color: Rgba::black(),
            stroke_width: ShapeStyle::default().stroke_width,
            font_size: DEFAULT_FONT_SIZE,
            pending_image: None,
            state: State::Idle,
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        log::debug!("tool changed to {tool:?}");
        self.tool = tool;
    }

    /// Arm a raster for the next image-tool click.
    pub fn set_pending_image(&mut self, raster: Arc<Raster>) {
        self.pending_image = Some(raster);
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// The draft shape being painted, for the renderer to overlay.
    pub fn draft(&self) -> Option<&Shape> {
        match &self.state {
            State::Painting { draft } => Some(draft),
            _ => None,
        }
    }

    fn style(&self) -> ShapeStyle {
        ShapeStyle {
            color: self.color,
            stroke_width: self.stroke_width,
        }
    }

    /// Pointer pressed. Hits on existing entities start drags regardless
    /// of the active tool; empty space starts whatever the tool makes.
    pub fn pointer_down(&mut self, doc: &mut Document, point: Point, measure: &dyn TextMeasure) {
        let Some(page) = doc.current_page() else {
            return;
        };
        match hit_test(page, point, measure) {
            Hit::ShapeHandle(id, HandleKind::Rotate) => {
                let Some(shape) = page.shape(id) else { return };
                self.state = State::DraggingShape {
                    id,
                    op: DragOp::Rotate {
                        initial_angle: shape.angle(),
                        initial_pointer_angle: pointer_angle(shape.center(), point),
                    },
                };
            }
            Hit::ShapeHandle(id, HandleKind::Resize) => {
                let Some(shape) = page.shape(id) else { return };
                let Some(corners) = shape.corners() else { return };
                self.state = State::DraggingShape {
                    id,
                    op: DragOp::Resize {
                        offset: point - corners.drag_corner(),
                    },
                };
            }
            Hit::ShapeBody(id) => {
                let Some(shape) = page.shape(id) else { return };
                let offset = point - shape.origin();
                if let Some(page) = doc.current_page_mut() {
                    page.select_shape(id);
                }
                self.state = State::DraggingShape {
                    id,
                    op: DragOp::Move { offset },
                };
            }
            Hit::TextHandle(id, _) => {
                let Some(text) = page.text(id) else { return };
                self.state = State::DraggingText {
                    id,
                    op: DragOp::Rotate {
                        initial_angle: text.angle,
                        initial_pointer_angle: pointer_angle(text.center(measure), point),
                    },
                };
            }
            Hit::TextBody(id) => {
                let Some(text) = page.text(id) else { return };
                let caret = editor::caret_from_click(text, point, measure);
                let offset = point - Point::new(text.x, text.y);
                if let Some(page) = doc.current_page_mut() {
                    page.select_text(id, caret);
                }
                self.state = State::DraggingText {
                    id,
                    op: DragOp::Move { offset },
                };
            }
            Hit::Empty => self.begin_on_empty(doc, point),
        }
    }

    /// Empty-space press: start a draft, arm a text position, or place a
    /// pending image, per the active tool.
    fn begin_on_empty(&mut self, doc: &mut Document, point: Point) {
        let style = self.style();
        match self.tool {
            Tool::Pencil | Tool::Eraser => {
                // Freehand drafts leave the current selection alone;
                // only corner-shape drafts clear it.
                let id = doc.ids.next_shape_id();
                let is_eraser = self.tool == Tool::Eraser;
                self.state = State::Painting {
                    draft: Shape::Freehand(Freehand::new(id, point, style, is_eraser)),
                };
            }
            Tool::Line | Tool::Rectangle | Tool::Circle | Tool::Triangle => {
                let id = doc.ids.next_shape_id();
                let Some(page) = doc.current_page_mut() else {
                    return;
                };
                page.clear_selection();
                let draft = match self.tool {
                    Tool::Line => Shape::Line(Line::new(id, point, style)),
                    Tool::Rectangle => Shape::Rectangle(Rectangle::new(id, point, style)),
                    Tool::Circle => Shape::Circle(Circle::new(id, point, style)),
                    _ => Shape::Triangle(Triangle::new(id, point, style)),
                };
                self.state = State::Painting { draft };
            }
            Tool::Text => {
                let Some(page) = doc.current_page_mut() else {
                    return;
                };
                page.clear_selection();
                self.state = State::AwaitingText { position: point };
            }
            Tool::Image => {
                let Some(raster) = self.pending_image.take() else {
                    if let Some(page) = doc.current_page_mut() {
                        page.clear_selection();
                    }
                    self.state = State::Idle;
                    return;
                };
                let id = doc.ids.next_shape_id();
                let Some(page) = doc.current_page_mut() else {
                    return;
                };
                log::debug!("placing image shape {id} at ({}, {})", point.x, point.y);
                page.shapes
                    .push(Shape::Image(ImageShape::centered(id, point, raster)));
                page.select_shape(id);
                self.state = State::Idle;
            }
        }
    }

    /// Pointer moved while pressed.
    pub fn pointer_move(&mut self, doc: &mut Document, point: Point, measure: &dyn TextMeasure) {
        match &mut self.state {
            State::Idle | State::AwaitingText { .. } => {}
            State::Painting { draft } => match draft {
                Shape::Freehand(stroke) => stroke.add_point(point),
                other => other.set_drag_corner(point),
            },
            State::DraggingShape { id, op } => {
                let Some(shape) = doc.current_page_mut().and_then(|p| p.shape_mut(*id)) else {
                    return;
                };
                match *op {
                    DragOp::Move { offset } => {
                        let delta = (point - offset) - shape.origin();
                        shape.translate(delta);
                    }
                    DragOp::Rotate {
                        initial_angle,
                        initial_pointer_angle,
                    } => {
                        let swept = pointer_angle(shape.center(), point) - initial_pointer_angle;
                        shape.set_angle(initial_angle + swept);
                    }
                    DragOp::Resize { offset } => {
                        let corner = point - offset;
                        let Some(corners) = shape.corners() else {
                            return;
                        };
                        let width = (corner.x - corners.x1).abs();
                        let height = (corner.y - corners.y1).abs();
                        let in_bounds = |side: f64| (MIN_RESIZE..=MAX_RESIZE).contains(&side);
                        if in_bounds(width) && in_bounds(height) {
                            shape.set_drag_corner(corner);
                        }
                    }
                }
            }
            State::DraggingText { id, op } => {
                let Some(text) = doc.current_page_mut().and_then(|p| p.text_mut(*id)) else {
                    return;
                };
                match *op {
                    DragOp::Move { offset } => {
                        let target = point - offset;
                        text.translate(target - Point::new(text.x, text.y));
                    }
                    DragOp::Rotate {
                        initial_angle,
                        initial_pointer_angle,
                    } => {
                        let swept = pointer_angle(text.center(measure), point) - initial_pointer_angle;
                        text.angle = initial_angle + swept;
                    }
                    DragOp::Resize { .. } => {}
                }
            }
        }
    }

    /// Pointer released: drags end, drafts move into the page list. An
    /// armed text position survives until a key or the next press.
    pub fn pointer_up(&mut self, doc: &mut Document) {
        match std::mem::replace(&mut self.state, State::Idle) {
            State::Painting { draft } => {
                if let Some(page) = doc.current_page_mut() {
                    log::debug!("committing {} {}", draft.kind_name(), draft.id());
                    page.shapes.push(draft);
                }
            }
            State::AwaitingText { position } => {
                self.state = State::AwaitingText { position };
            }
            State::Idle | State::DraggingShape { .. } | State::DraggingText { .. } => {}
        }
    }

    /// The pointer leaving the page ends the gesture exactly like a
    /// release.
    pub fn pointer_leave(&mut self, doc: &mut Document) {
        self.pointer_up(doc);
    }

    /// Route a raw key. A selected text consumes it first; otherwise the
    /// rotate key turns the selected shape; otherwise an armed text
    /// position plus a printable character creates a text item.
    pub fn key_down(&mut self, doc: &mut Document, raw: &str) {
        let editing = doc
            .current_page()
            .map(|p| p.texts.iter().any(|t| t.selected))
            .unwrap_or(false);
        if editing {
            let Some(key) = editor::classify_key(raw) else {
                return;
            };
            if let Some(text) = doc.current_page_mut().and_then(|p| p.selected_text_mut()) {
                editor::apply_key(text, key);
            }
            return;
        }

        if raw == "r" || raw == "R" {
            if let Some(shape) = doc.current_page_mut().and_then(|p| p.selected_shape_mut()) {
                shape.rotate_by(ROTATE_STEP_DEGREES);
                return;
            }
        }

        if let State::AwaitingText { position } = self.state {
            let Some(EditorKey::Char(ch)) = editor::classify_key(raw) else {
                return;
            };
            let id = doc.ids.next_text_id();
            let Some(page) = doc.current_page_mut() else {
                return;
            };
            log::debug!("creating text {id} at ({}, {})", position.x, position.y);
            page.texts
                .push(TextItem::new(id, position, ch, self.color, self.font_size));
            self.state = State::Idle;
        }
    }
}
