//! The document: ordered pages, a current-page pointer, and id
//! allocation.

use crate::page::Page;
use crate::shapes::ShapeId;
use crate::text::TextId;

/// Monotonic id source owned by the document.
///
/// Shapes and texts draw from two independent sequences; ids are never
/// reused, even across pages.
#[derive(Debug, Clone)]
pub struct IdAllocator {
    next_shape: ShapeId,
    next_text: TextId,
}

impl Default for IdAllocator {
    fn default() -> Self {
        Self {
            next_shape: 1,
            next_text: 1,
        }
    }
}

impl IdAllocator {
    pub fn next_shape_id(&mut self) -> ShapeId {
        let id = self.next_shape;
        self.next_shape += 1;
        id
    }

    pub fn next_text_id(&mut self) -> TextId {
        let id = self.next_text;
        self.next_text += 1;
        id
    }
}

/// All pages plus the current-page pointer.
#[derive(Debug, Clone, Default)]
pub struct Document {
    pages: Vec<Page>,
    current: usize,
    pub ids: IdAllocator,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished page. The first page added becomes current.
    pub fn add_page(&mut self, page: Page) {
        log::debug!(
            "page {} added ({}x{})",
            self.pages.len(),
            page.width,
            page.height
        );
        self.pages.push(page);
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn pages(&self) -> &[Page] {
        &self.pages
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Switch the current page; out-of-range indices are ignored.
    pub fn go_to_page(&mut self, index: usize) {
        if index < self.pages.len() {
            self.current = index;
        } else {
            log::debug!("ignoring navigation to out-of-range page {index}");
        }
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current)
    }

    pub fn current_page_mut(&mut self) -> Option<&mut Page> {
        self.pages.get_mut(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_sequences_are_independent() {
        let mut ids = IdAllocator::default();
        assert_eq!(ids.next_shape_id(), 1);
        assert_eq!(ids.next_shape_id(), 2);
        assert_eq!(ids.next_text_id(), 1);
        assert_eq!(ids.next_shape_id(), 3);
        assert_eq!(ids.next_text_id(), 2);
    }

    #[test]
    fn test_first_page_becomes_current() {
        let mut doc = Document::new();
        assert!(doc.current_page().is_none());
        doc.add_page(Page::blank(100, 100));
        assert_eq!(doc.current_index(), 0);
        assert!(doc.current_page().is_some());
    }

    #[test]
    fn test_out_of_range_navigation_is_ignored() {
        let mut doc = Document::new();
        doc.add_page(Page::blank(100, 100));
        doc.add_page(Page::blank(100, 100));
        doc.go_to_page(1);
        assert_eq!(doc.current_index(), 1);
        doc.go_to_page(5);
        assert_eq!(doc.current_index(), 1);
    }
}
