//! Text blocks with caret-addressable multi-line content.

use crate::measure::TextMeasure;
use crate::shapes::Rgba;
use kurbo::{Point, Rect, Vec2};

/// Unique identifier for text items, allocated by the document.
///
/// Texts draw from their own id sequence, independent of shape ids.
pub type TextId = u64;

/// Selection-box margin around the rendered text, in page pixels.
pub const TEXT_MARGIN: f64 = 6.0;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f64 = 1.2;

/// Default font size for newly created text items.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// One block of text anchored at the first line's baseline.
///
/// `content` stays a single flat string; `\n` separates lines only for
/// caret addressing and rendering.
#[derive(Debug, Clone)]
pub struct TextItem {
    pub id: TextId,
    pub content: String,
    /// Left edge of every line.
    pub x: f64,
    /// Baseline of the first line.
    pub y: f64,
    pub color: Rgba,
    pub font_size: f64,
    pub angle: f64,
    pub selected: bool,
    /// Caret position in characters over the flat, newline-inclusive
    /// content; present only while the item is being edited.
    pub cursor_index: Option<usize>,
}

impl TextItem {
    /// Create a single-character item from the first keystroke after the
    /// text tool armed a position.
    pub fn new(id: TextId, position: Point, ch: char, color: Rgba, font_size: f64) -> Self {
        Self {
            id,
            content: ch.to_string(),
            x: position.x,
            y: position.y,
            color,
            font_size,
            angle: 0.0,
            selected: true,
            cursor_index: Some(1),
        }
    }

    pub fn lines(&self) -> Vec<&str> {
        self.content.split('\n').collect()
    }

    pub fn line_height(&self) -> f64 {
        self.font_size * LINE_HEIGHT_FACTOR
    }

    /// Length of the content in characters (the caret's address space).
    pub fn char_len(&self) -> usize {
        self.content.chars().count()
    }

    /// Widest rendered line.
    pub fn max_line_width(&self, measure: &dyn TextMeasure) -> f64 {
        self.lines()
            .iter()
            .map(|line| measure.line_width(line, self.font_size))
            .fold(0.0, f64::max)
    }

    /// The selection/hit box: rendered extent plus `TEXT_MARGIN`, with
    /// the trailing line-height overshoot below the last baseline
    /// trimmed off.
    pub fn bounds(&self, measure: &dyn TextMeasure) -> Rect {
        let line_height = self.line_height();
        let total_height = self.lines().len() as f64 * line_height;
        let width = self.max_line_width(measure) + TEXT_MARGIN * 2.0;
        let height = total_height + TEXT_MARGIN * 2.0 - (line_height - self.font_size);
        let left = self.x - TEXT_MARGIN;
        let top = self.y - self.font_size - TEXT_MARGIN;
        Rect::new(left, top, left + width, top + height)
    }

    /// Rotation pivot of the rendered block.
    pub fn center(&self, measure: &dyn TextMeasure) -> Point {
        let total_height = self.lines().len() as f64 * self.line_height();
        Point::new(
            self.x + self.max_line_width(measure) / 2.0,
            self.y - self.font_size + total_height / 2.0,
        )
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.x += delta.x;
        self.y += delta.y;
    }

    /// Resolve the caret's line index and x offset within that line.
    ///
    /// Returns `None` when no caret is present.
    pub fn cursor_position(&self, measure: &dyn TextMeasure) -> Option<(usize, f64)> {
        let cursor = self.cursor_index?;
        let lines = self.lines();
        let mut remaining = cursor;
        for (index, line) in lines.iter().enumerate() {
            let len = line.chars().count();
            if remaining <= len {
                let prefix: String = line.chars().take(remaining).collect();
                return Some((index, measure.line_width(&prefix, self.font_size)));
            }
            // One extra for the consumed newline.
            remaining -= len + 1;
        }
        // Past the end: caret sits after the last line.
        let last = lines.len() - 1;
        Some((last, measure.line_width(lines[last], self.font_size)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedMetrics;

    fn item(content: &str) -> TextItem {
        TextItem {
            id: 1,
            content: content.to_string(),
            x: 100.0,
            y: 200.0,
            color: Rgba::black(),
            font_size: 10.0,
            angle: 0.0,
            selected: true,
            cursor_index: None,
        }
    }

    #[test]
    fn test_bounds_formula() {
        let text = item("ab\ncd");
        let bounds = text.bounds(&FixedMetrics::default());
        // max line width 12, two lines of height 12 each.
        assert_eq!(bounds.x0, 94.0);
        assert_eq!(bounds.y0, 184.0);
        assert_eq!(bounds.width(), 12.0 + 12.0);
        assert_eq!(bounds.height(), 24.0 + 12.0 - 2.0);
    }

    #[test]
    fn test_cursor_position_crosses_lines() {
        let mut text = item("ab\ncd");
        let metrics = FixedMetrics::default();

        text.cursor_index = Some(1);
        assert_eq!(text.cursor_position(&metrics), Some((0, 6.0)));

        // Index 3 is the start of the second line ("ab\n" consumed).
        text.cursor_index = Some(3);
        assert_eq!(text.cursor_position(&metrics), Some((1, 0.0)));

        text.cursor_index = Some(5);
        assert_eq!(text.cursor_position(&metrics), Some((1, 12.0)));
    }

    #[test]
    fn test_cursor_position_absent_without_caret() {
        let text = item("ab");
        assert_eq!(text.cursor_position(&FixedMetrics::default()), None);
    }

    #[test]
    fn test_center_is_midpoint_of_rendered_block() {
        let text = item("abcd");
        let center = text.center(&FixedMetrics::default());
        assert_eq!(center.x, 100.0 + 12.0);
        assert_eq!(center.y, 200.0 - 10.0 + 6.0);
    }
}
