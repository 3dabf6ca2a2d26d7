//! Cursor movement shared by the category list and the result tables

use crate::interfaces::tui::constants::PAGE_SCROLL_STEP;

/// Position of the cursor inside a list of `len` visible rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListCursor {
    index: usize,
}

impl ListCursor {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Cursor position, or `None` when the list is empty
    pub fn position(&self, len: usize) -> Option<usize> {
        (len > 0).then(|| self.index.min(len - 1))
    }

    pub fn move_up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    pub fn move_down(&mut self, len: usize) {
        if self.index < len.saturating_sub(1) {
            self.index += 1;
        }
    }

    pub fn jump_to_top(&mut self) {
        self.index = 0;
    }

    pub fn jump_to_bottom(&mut self, len: usize) {
        self.index = len.saturating_sub(1);
    }

    pub fn page_up(&mut self) {
        self.index = self.index.saturating_sub(PAGE_SCROLL_STEP);
    }

    pub fn page_down(&mut self, len: usize) {
        let max_index = len.saturating_sub(1);
        self.index = (self.index + PAGE_SCROLL_STEP).min(max_index);
    }

    /// Keep the cursor inside the list after it shrank
    pub fn clamp(&mut self, len: usize) {
        self.index = self.index.min(len.saturating_sub(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_within_bounds() {
        let mut cursor = ListCursor::default();
        cursor.move_up();
        assert_eq!(cursor.index(), 0);

        cursor.move_down(3);
        cursor.move_down(3);
        cursor.move_down(3);
        assert_eq!(cursor.index(), 2);
    }

    #[test]
    fn test_paging() {
        let mut cursor = ListCursor::default();
        cursor.page_down(25);
        assert_eq!(cursor.index(), PAGE_SCROLL_STEP);
        cursor.page_down(12);
        assert_eq!(cursor.index(), 11);
        cursor.page_up();
        assert_eq!(cursor.index(), 1);
        cursor.page_up();
        assert_eq!(cursor.index(), 0);
    }

    #[test]
    fn test_clamp_and_position() {
        let mut cursor = ListCursor::default();
        cursor.jump_to_bottom(8);
        assert_eq!(cursor.index(), 7);
        cursor.clamp(3);
        assert_eq!(cursor.position(3), Some(2));
        assert_eq!(cursor.position(0), None);
    }
}
