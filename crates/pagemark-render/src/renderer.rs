//! The shared page-drawing routine.
//!
//! One full-redraw pass used identically by the live view and the
//! exporters: background, shapes in z-order, the in-flight draft, then
//! texts on top.

use crate::surface::{StrokeOptions, Surface};
use kurbo::Shape as _;
use kurbo::{BezPath, Ellipse, Point, Rect};
use pagemark_core::geometry::to_radians;
use pagemark_core::{Background, Page, Shape, TextItem, HANDLE_SIZE};
use peniko::Color;

/// Color of selection boxes and handles.
pub fn selection_color() -> Color {
    Color::from_rgba8(0, 0, 255, 255)
}

/// Color of the text caret.
pub fn caret_color() -> Color {
    Color::from_rgba8(255, 0, 0, 255)
}

/// Dash pattern of selection boxes, as (on, off) lengths.
pub const SELECTION_DASH: (f64, f64) = (5.0, 3.0);

fn rect_path(rect: Rect) -> BezPath {
    let mut path = BezPath::new();
    path.move_to((rect.x0, rect.y0));
    path.line_to((rect.x1, rect.y0));
    path.line_to((rect.x1, rect.y1));
    path.line_to((rect.x0, rect.y1));
    path.close_path();
    path
}

/// Pivot the current frame about `center` by `degrees`.
fn apply_rotation<S: Surface>(surface: &mut S, center: Point, degrees: f64) {
    if degrees != 0.0 {
        surface.translate(center.x, center.y);
        surface.rotate(to_radians(degrees));
        surface.translate(-center.x, -center.y);
    }
}

/// Dashed bounding box plus solid-outline handle squares, drawn inside
/// the rotated frame so they coincide with the hit tester's rotated
/// zones.
fn draw_selection_chrome<S: Surface>(surface: &mut S, bounds: Rect, with_resize: bool) {
    let (on, off) = SELECTION_DASH;
    surface.stroke_path(
        &rect_path(bounds),
        &StrokeOptions::dashed(selection_color(), 1.0, on, off),
    );
    let rotate = Rect::new(
        bounds.x1 - HANDLE_SIZE,
        bounds.y0,
        bounds.x1,
        bounds.y0 + HANDLE_SIZE,
    );
    surface.stroke_path(
        &rect_path(rotate),
        &StrokeOptions::solid(selection_color(), 1.0),
    );
    if with_resize {
        let resize = Rect::new(
            bounds.x1 - HANDLE_SIZE,
            bounds.y1 - HANDLE_SIZE,
            bounds.x1,
            bounds.y1,
        );
        surface.stroke_path(
            &rect_path(resize),
            &StrokeOptions::solid(selection_color(), 1.0),
        );
    }
}

fn draw_shape<S: Surface>(surface: &mut S, shape: &Shape, base_color: Color) {
    surface.save();
    apply_rotation(surface, shape.center(), shape.angle());
    match shape {
        Shape::Freehand(stroke) => {
            let mut path = BezPath::new();
            if let Some(first) = stroke.points.first() {
                path.move_to(*first);
                for p in &stroke.points[1..] {
                    path.line_to(*p);
                }
                if stroke.points.len() == 1 {
                    // A dot: round caps need a non-degenerate segment.
                    path.line_to(Point::new(first.x + 0.01, first.y));
                }
            }
            let color = if stroke.is_eraser {
                base_color
            } else {
                stroke.style.color.into()
            };
            surface.stroke_path(&path, &StrokeOptions::round(color, stroke.style.stroke_width));
        }
        Shape::Line(line) => {
            let mut path = BezPath::new();
            path.move_to(line.corners.start());
            path.line_to(line.corners.drag_corner());
            surface.stroke_path(
                &path,
                &StrokeOptions::round(line.style.color.into(), line.style.stroke_width),
            );
        }
        Shape::Rectangle(rect) => {
            surface.stroke_path(
                &rect_path(rect.corners.normalized()),
                &StrokeOptions::round(rect.style.color.into(), rect.style.stroke_width),
            );
        }
        Shape::Circle(circle) => {
            let bounds = circle.corners.normalized();
            let ellipse = Ellipse::new(
                bounds.center(),
                (bounds.width() / 2.0, bounds.height() / 2.0),
                0.0,
            );
            surface.stroke_path(
                &ellipse.to_path(0.1),
                &StrokeOptions::round(circle.style.color.into(), circle.style.stroke_width),
            );
        }
        Shape::Triangle(triangle) => {
            let [a, b, c] = triangle.vertices();
            let mut path = BezPath::new();
            path.move_to(a);
            path.line_to(b);
            path.line_to(c);
            path.close_path();
            surface.stroke_path(
                &path,
                &StrokeOptions::round(triangle.style.color.into(), triangle.style.stroke_width),
            );
        }
        Shape::Image(image) => {
            surface.draw_raster(&image.raster, image.corners.normalized());
        }
    }
    if shape.selected() {
        draw_selection_chrome(surface, shape.bounds(), shape.supports_resize());
    }
    surface.restore();
}

fn draw_text<S: Surface>(surface: &mut S, text: &TextItem) {
    let center = text.center(surface);
    let bounds = text.bounds(surface);
    let caret = text.cursor_position(surface);
    surface.save();
    apply_rotation(surface, center, text.angle);

    let line_height = text.line_height();
    let color: Color = text.color.into();
    for (index, line) in text.lines().iter().enumerate() {
        surface.fill_text(
            line,
            text.x,
            text.y + index as f64 * line_height,
            text.font_size,
            color,
        );
    }

    if text.selected {
        let (on, off) = SELECTION_DASH;
        surface.stroke_path(
            &rect_path(bounds),
            &StrokeOptions::dashed(selection_color(), 1.0, on, off),
        );
        let rotate = Rect::new(
            bounds.x1 - HANDLE_SIZE,
            bounds.y0,
            bounds.x1,
            bounds.y0 + HANDLE_SIZE,
        );
        surface.stroke_path(
            &rect_path(rotate),
            &StrokeOptions::solid(selection_color(), 1.0),
        );

        if let Some((line_index, x_offset)) = caret {
            let x = text.x + x_offset;
            let top = text.y - text.font_size + line_index as f64 * line_height;
            let mut path = BezPath::new();
            path.move_to(Point::new(x, top));
            path.line_to(Point::new(x, top + line_height));
            surface.stroke_path(&path, &StrokeOptions::solid(caret_color(), 1.0));
        }
    }
    surface.restore();
}

/// Redraw `page` from scratch onto `surface`, with an optional in-flight
/// draft shape layered between committed shapes and texts.
pub fn render_page<S: Surface>(surface: &mut S, page: &Page, draft: Option<&Shape>) {
    match &page.background {
        Background::Solid(color) => surface.clear(*color),
        Background::Raster(raster) => {
            surface.clear(page.base_color);
            surface.draw_raster(
                raster,
                Rect::new(0.0, 0.0, page.width as f64, page.height as f64),
            );
        }
    }
    for shape in &page.shapes {
        draw_shape(surface, shape, page.base_color);
    }
    if let Some(draft) = draft {
        draw_shape(surface, draft, page.base_color);
    }
    for text in &page.texts {
        draw_text(surface, text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster_surface::RasterSurface;
    use pagemark_core::shapes::{Freehand, Line, ShapeStyle};
    use pagemark_core::{default_base_color, Rgba};

    fn base_rgba() -> [u8; 4] {
        let c = default_base_color().to_rgba8();
        [c.r, c.g, c.b, c.a]
    }

    fn pixel(data: &[u8], width: u32, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * width + x) * 4) as usize;
        [data[i], data[i + 1], data[i + 2], data[i + 3]]
    }

    #[test]
    fn test_blank_page_fills_base_color() {
        let page = Page::blank(16, 16);
        let mut surface = RasterSurface::new(16, 16).unwrap();
        render_page(&mut surface, &page, None);
        let data = surface.to_rgba8();
        assert_eq!(pixel(&data, 16, 0, 0), base_rgba());
        assert_eq!(pixel(&data, 16, 15, 15), base_rgba());
    }

    #[test]
    fn test_line_stroke_marks_pixels() {
        let mut page = Page::blank(64, 64);
        let mut line = Line::new(
            1,
            Point::new(8.0, 32.0),
            ShapeStyle {
                color: Rgba::new(255, 0, 0, 255),
                stroke_width: 3.0,
            },
        );
        line.corners.drag_to(Point::new(56.0, 32.0));
        line.selected = false;
        page.shapes.push(Shape::Line(line));

        let mut surface = RasterSurface::new(64, 64).unwrap();
        render_page(&mut surface, &page, None);
        let data = surface.to_rgba8();
        let mid = pixel(&data, 64, 32, 32);
        assert_eq!(mid[0], 255);
        assert!(mid[1] < 100);
        // Far corner untouched.
        assert_eq!(pixel(&data, 64, 2, 2), base_rgba());
    }

    #[test]
    fn test_eraser_stroke_paints_base_color() {
        let mut page = Page::blank(64, 64);
        let mut ink = Freehand::new(
            1,
            Point::new(8.0, 32.0),
            ShapeStyle {
                color: Rgba::new(0, 0, 0, 255),
                stroke_width: 6.0,
            },
            false,
        );
        ink.add_point(Point::new(56.0, 32.0));
        page.shapes.push(Shape::Freehand(ink));

        let mut rub = Freehand::new(2, Point::new(8.0, 32.0), ShapeStyle::default(), true);
        rub.add_point(Point::new(56.0, 32.0));
        rub.style.stroke_width = 12.0;
        page.shapes.push(Shape::Freehand(rub));

        let mut surface = RasterSurface::new(64, 64).unwrap();
        render_page(&mut surface, &page, None);
        let data = surface.to_rgba8();
        assert_eq!(pixel(&data, 64, 32, 32), base_rgba());
    }

    #[test]
    fn test_selected_shape_gets_chrome() {
        let mut page = Page::blank(64, 64);
        let mut rect = pagemark_core::shapes::Rectangle::new(
            1,
            Point::new(10.0, 10.0),
            ShapeStyle {
                color: Rgba::new(0, 0, 0, 255),
                stroke_width: 1.0,
            },
        );
        rect.corners.drag_to(Point::new(50.0, 50.0));
        page.shapes.push(Shape::Rectangle(rect));

        let mut surface = RasterSurface::new(64, 64).unwrap();
        render_page(&mut surface, &page, None);
        let data = surface.to_rgba8();
        // The rotate handle at the top-right corner is outlined, not
        // filled: blue ink on its left edge, base color inside.
        let edge = pixel(&data, 64, 40, 15);
        let edge_left = pixel(&data, 64, 39, 15);
        assert!(edge[0] < 200 || edge_left[0] < 200);
        assert_eq!(pixel(&data, 64, 45, 15), base_rgba());
    }
}
