//! Caret-based editing of a selected text item.
//!
//! All indices are character offsets over the flat, newline-inclusive
//! content, never byte offsets.

use crate::measure::TextMeasure;
use crate::text::TextItem;
use kurbo::Point;

/// A keystroke the editor acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorKey {
    Left,
    Right,
    Enter,
    Backspace,
    Char(char),
}

/// Map a raw key name (the DOM `KeyboardEvent.key` convention) to an
/// editor action. Named keys the editor does not handle, modifiers
/// included, map to `None`.
pub fn classify_key(raw: &str) -> Option<EditorKey> {
    match raw {
        "ArrowLeft" => Some(EditorKey::Left),
        "ArrowRight" => Some(EditorKey::Right),
        "Enter" => Some(EditorKey::Enter),
        "Backspace" => Some(EditorKey::Backspace),
        _ => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(EditorKey::Char(ch)),
                _ => None,
            }
        }
    }
}

/// Byte offset of the `char_index`-th character.
fn byte_index(content: &str, char_index: usize) -> usize {
    content
        .char_indices()
        .nth(char_index)
        .map(|(offset, _)| offset)
        .unwrap_or(content.len())
}

/// Apply one keystroke to `text`, moving or mutating at its caret.
///
/// A text without a caret is left untouched. The caret always lands in
/// `[0, char_len]` afterwards.
pub fn apply_key(text: &mut TextItem, key: EditorKey) {
    let Some(cursor) = text.cursor_index else {
        return;
    };
    let cursor = cursor.min(text.char_len());
    match key {
        EditorKey::Left => {
            text.cursor_index = Some(cursor.saturating_sub(1));
        }
        EditorKey::Right => {
            text.cursor_index = Some((cursor + 1).min(text.char_len()));
        }
        EditorKey::Enter => {
            let at = byte_index(&text.content, cursor);
            text.content.insert(at, '\n');
            text.cursor_index = Some(cursor + 1);
        }
        EditorKey::Backspace => {
            if cursor > 0 {
                let at = byte_index(&text.content, cursor - 1);
                text.content.remove(at);
                text.cursor_index = Some(cursor - 1);
            }
        }
        EditorKey::Char(ch) => {
            let at = byte_index(&text.content, cursor);
            text.content.insert(at, ch);
            text.cursor_index = Some(cursor + 1);
        }
    }
}

/// Resolve a click inside a text's box to a caret index.
///
/// The clicked line is the vertical band of height `line_height`
/// starting at the line's top (baseline minus font size). A click that
/// falls in no band (the margin strips of the hit box) places the caret
/// at the end of the content. Within a line, the caret lands after the
/// longest prefix narrower than the click offset; clicks past the line
/// end land at the line end.
pub fn caret_from_click(text: &TextItem, point: Point, measure: &dyn TextMeasure) -> usize {
    let lines = text.lines();
    let top = text.y - text.font_size;
    let band = ((point.y - top) / text.line_height()).floor();
    if band < 0.0 || band >= lines.len() as f64 {
        return text.char_len();
    }
    let line_index = band as usize;

    let mut flat = 0;
    for line in lines.iter().take(line_index) {
        flat += line.chars().count() + 1;
    }

    let line = lines[line_index];
    let len = line.chars().count();
    for c in 0..len {
        let prefix: String = line.chars().take(c).collect();
        if point.x < text.x + measure.line_width(&prefix, text.font_size) {
            return flat + c;
        }
    }
    flat + len
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::FixedMetrics;
    use crate::shapes::Rgba;

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
            cursor_index: Some(0),
        }
    }

    #[test]
    fn test_classify_named_and_printable_keys() {
        assert_eq!(classify_key("ArrowLeft"), Some(EditorKey::Left));
        assert_eq!(classify_key("Enter"), Some(EditorKey::Enter));
        assert_eq!(classify_key("a"), Some(EditorKey::Char('a')));
        assert_eq!(classify_key(" "), Some(EditorKey::Char(' ')));
        assert_eq!(classify_key("Shift"), None);
        assert_eq!(classify_key("Control"), None);
        assert_eq!(classify_key("ArrowUp"), None);
        assert_eq!(classify_key("F5"), None);
    }

    #[test]
    fn test_insert_and_backspace_at_caret() {
        let mut text = item("ad");
        text.cursor_index = Some(1);
        apply_key(&mut text, EditorKey::Char('b'));
        apply_key(&mut text, EditorKey::Char('c'));
        assert_eq!(text.content, "abcd");
        assert_eq!(text.cursor_index, Some(3));

        apply_key(&mut text, EditorKey::Backspace);
        assert_eq!(text.content, "abd");
        assert_eq!(text.cursor_index, Some(2));
    }

    #[test]
    fn test_enter_splits_line_at_caret() {
        let mut text = item("abcd");
        text.cursor_index = Some(2);
        apply_key(&mut text, EditorKey::Enter);
        assert_eq!(text.content, "ab\ncd");
        assert_eq!(text.cursor_index, Some(3));
    }

    #[test]
    fn test_arrows_clamp_at_ends() {
        let mut text = item("ab");
        apply_key(&mut text, EditorKey::Left);
        assert_eq!(text.cursor_index, Some(0));
        apply_key(&mut text, EditorKey::Right);
        apply_key(&mut text, EditorKey::Right);
        apply_key(&mut text, EditorKey::Right);
        assert_eq!(text.cursor_index, Some(2));
    }

    #[test]
    fn test_backspace_at_start_is_inert() {
        let mut text = item("ab");
        apply_key(&mut text, EditorKey::Backspace);
        assert_eq!(text.content, "ab");
        assert_eq!(text.cursor_index, Some(0));
    }

    #[test]
    fn test_keys_ignored_without_caret() {
        let mut text = item("ab");
        text.cursor_index = None;
        apply_key(&mut text, EditorKey::Char('x'));
        assert_eq!(text.content, "ab");
        assert_eq!(text.cursor_index, None);
    }

    #[test]
    fn test_caret_from_click_second_line() {
        // fs 10, advance 0.6: 6px per char, line height 12. Second line
        // band starts at y = 202. Clicking between 'c' and 'd' lands the
        // caret at flat index 4 ("ab\nc|d").
        let text = item("ab\ncd");
        let metrics = FixedMetrics::default();
        let index = caret_from_click(&text, Point::new(104.0, 205.0), &metrics);
        assert_eq!(index, 4);
    }

    #[test]
    fn test_caret_from_click_past_line_end() {
        let text = item("ab\ncd");
        let metrics = FixedMetrics::default();
        assert_eq!(
            caret_from_click(&text, Point::new(180.0, 195.0), &metrics),
            2
        );
        assert_eq!(
            caret_from_click(&text, Point::new(180.0, 205.0), &metrics),
            5
        );
    }

    #[test]
    fn test_caret_from_click_outside_line_bands() {
        // Line bands for fs 10 run 190..202 and 202..214. The hit box
        // extends 6px beyond them at both ends; clicks there land the
        // caret at the end of the content.
        let text = item("ab\ncd");
        let metrics = FixedMetrics::default();
        assert_eq!(
            caret_from_click(&text, Point::new(99.0, 185.0), &metrics),
            5
        );
        assert_eq!(
            caret_from_click(&text, Point::new(99.0, 216.0), &metrics),
            5
        );
    }
}
