//! Pages: a background raster plus ordered shape and text lists.

use crate::raster::Raster;
use crate::shapes::{Shape, ShapeId};
use crate::text::{TextId, TextItem};
use peniko::Color;
use std::sync::Arc;

/// The light paper tint blank pages are filled with; also what eraser
/// strokes paint over raster backgrounds.
pub fn default_base_color() -> Color {
    Color::from_rgba8(0xf9, 0xf8, 0xf8, 0xff)
}

/// What fills the page behind all shapes and texts.
#[derive(Debug, Clone)]
pub enum Background {
    /// A plain fill (blank page).
    Solid(Color),
    /// A decoded import: image file or rendered PDF page.
    Raster(Arc<Raster>),
}

/// One canvas page. Shapes and texts render in list order; texts always
/// composite above every shape.
#[derive(Debug, Clone)]
pub struct Page {
    pub width: u32,
    pub height: u32,
    pub background: Background,
    /// Color eraser strokes paint with on this page.
    pub base_color: Color,
    pub shapes: Vec<Shape>,
    pub texts: Vec<TextItem>,
}

impl Page {
    /// A blank page filled with the default base color.
    pub fn blank(width: u32, height: u32) -> Self {
        let color = default_base_color();
        Self {
            width,
            height,
            background: Background::Solid(color),
            base_color: color,
            shapes: Vec::new(),
            texts: Vec::new(),
        }
    }

    /// A page backed by an externally decoded raster.
    pub fn from_raster(raster: Arc<Raster>) -> Self {
        Self {
            width: raster.width(),
            height: raster.height(),
            background: Background::Raster(raster),
            base_color: default_base_color(),
            shapes: Vec::new(),
            texts: Vec::new(),
        }
    }

    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    pub fn shape_mut(&mut self, id: ShapeId) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.id() == id)
    }

    pub fn text(&self, id: TextId) -> Option<&TextItem> {
        self.texts.iter().find(|t| t.id == id)
    }

    pub fn text_mut(&mut self, id: TextId) -> Option<&mut TextItem> {
        self.texts.iter_mut().find(|t| t.id == id)
    }

    /// Clear `selected` on every shape and text; dropping a text's
    /// selection also drops its caret.
    pub fn clear_selection(&mut self) {
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
        for text in &mut self.texts {
            text.selected = false;
            text.cursor_index = None;
        }
    }

    /// Select exactly one shape, clearing every other selection.
    pub fn select_shape(&mut self, id: ShapeId) {
        for shape in &mut self.shapes {
            shape.set_selected(shape.id() == id);
        }
        for text in &mut self.texts {
            text.selected = false;
            text.cursor_index = None;
        }
    }

    /// Select exactly one text and place its caret, clearing every other
    /// selection.
    pub fn select_text(&mut self, id: TextId, cursor_index: usize) {
        for shape in &mut self.shapes {
            shape.set_selected(false);
        }
        for text in &mut self.texts {
            if text.id == id {
                text.selected = true;
                text.cursor_index = Some(cursor_index);
            } else {
                text.selected = false;
                text.cursor_index = None;
            }
        }
    }

    /// The currently selected text, if any.
    pub fn selected_text_mut(&mut self) -> Option<&mut TextItem> {
        self.texts.iter_mut().find(|t| t.selected)
    }

    /// The currently selected shape, if any.
    pub fn selected_shape_mut(&mut self) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|s| s.selected())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shapes::{Rectangle, ShapeStyle};
    use kurbo::Point;

    fn page_with_two_rects() -> Page {
        let mut page = Page::blank(800, 600);
        page.shapes.push(Shape::Rectangle(Rectangle::new(
            1,
            Point::new(0.0, 0.0),
            ShapeStyle::default(),
        )));
        page.shapes.push(Shape::Rectangle(Rectangle::new(
            2,
            Point::new(10.0, 10.0),
            ShapeStyle::default(),
        )));
        page.texts.push(TextItem::new(
            1,
            Point::new(50.0, 50.0),
            'a',
            crate::shapes::Rgba::black(),
            16.0,
        ));
        page
    }

    #[test]
    fn test_select_shape_is_exclusive() {
        let mut page = page_with_two_rects();
        page.select_shape(2);
        assert!(!page.shape(1).unwrap().selected());
        assert!(page.shape(2).unwrap().selected());
        assert!(!page.texts[0].selected);
        assert_eq!(page.texts[0].cursor_index, None);
    }

    #[test]
    fn test_select_text_clears_shapes_and_places_caret() {
        let mut page = page_with_two_rects();
        page.select_shape(1);
        page.select_text(1, 0);
        assert!(!page.shape(1).unwrap().selected());
        assert!(page.texts[0].selected);
        assert_eq!(page.texts[0].cursor_index, Some(0));
    }
}
