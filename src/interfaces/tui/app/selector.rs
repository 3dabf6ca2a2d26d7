//! Category selector
//!
//! Category names sorted case-insensitively, a free-text filter that hides
//! (never removes) rows, and a multi-selection. Two named operations turn the
//! page into a [`Submission`]: [`CategorySelector::submit_selection`] and
//! [`CategorySelector::activate_current`].

use ratatui::widgets::ListState;
use std::collections::BTreeSet;

use super::navigation::ListCursor;
use crate::catalog::CategoryName;

/// Categories the user asked to see, in list order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Submission {
    categories: Vec<CategoryName>,
}

impl Submission {
    pub fn new<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CategoryName>,
    {
        Self {
            categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    pub fn categories(&self) -> &[CategoryName] {
        &self.categories
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }
}

#[derive(Debug, Default)]
pub struct CategorySelector {
    items: Vec<CategoryName>,
    filter: String,
    /// Indices into `items` of the rows that pass the filter
    visible: Vec<usize>,
    /// Indices into `items`; hidden rows keep their selection
    selected: BTreeSet<usize>,
    cursor: ListCursor,
    pub editing_filter: bool,
    pub(crate) list_state: ListState,
}

impl CategorySelector {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CategoryName>,
    {
        let mut items: Vec<CategoryName> = names.into_iter().map(Into::into).collect();
        items.sort_by_cached_key(|name| name.to_lowercase());
        let visible = (0..items.len()).collect();

        Self {
            items,
            visible,
            ..Self::default()
        }
    }

    pub fn items(&self) -> &[CategoryName] {
        &self.items
    }

    pub fn filter_text(&self) -> &str {
        &self.filter
    }

    /// Visible rows as `(item index, label)`, in display order
    pub fn visible_items(&self) -> impl Iterator<Item = (usize, &str)> {
        self.visible.iter().map(|&i| (i, self.items[i].as_str()))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.binary_search(&index).is_ok()
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected.contains(&index)
    }

    pub fn selected_count(&self) -> usize {
        self.selected.len()
    }

    /// Cursor row within the visible rows
    pub fn cursor_position(&self) -> Option<usize> {
        self.cursor.position(self.visible.len())
    }

    /// Item index under the cursor
    pub fn current(&self) -> Option<usize> {
        self.cursor_position().map(|pos| self.visible[pos])
    }

    // ========== 过滤 ==========

    /// Replace the filter text and re-evaluate which rows are visible
    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_string();
        let needle = self.filter.trim().to_lowercase();
        self.visible = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, name)| name.to_lowercase().contains(&needle))
            .map(|(i, _)| i)
            .collect();
        self.cursor.clamp(self.visible.len());
    }

    pub fn push_filter_char(&mut self, c: char) {
        let mut text = std::mem::take(&mut self.filter);
        text.push(c);
        self.set_filter(&text);
    }

    pub fn pop_filter_char(&mut self) {
        let mut text = std::mem::take(&mut self.filter);
        text.pop();
        self.set_filter(&text);
    }

    pub fn clear_filter(&mut self) {
        self.set_filter("");
    }

    // ========== 选择 ==========

    pub fn toggle_current(&mut self) {
        if let Some(index) = self.current()
            && !self.selected.remove(&index)
        {
            self.selected.insert(index);
        }
    }

    pub fn select_all_visible(&mut self) {
        self.selected.extend(self.visible.iter().copied());
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Explicit submit over the whole multi-selection
    pub fn submit_selection(&self) -> Submission {
        Submission::new(self.selected.iter().map(|&i| self.items[i].clone()))
    }

    /// Direct activation of the row under the cursor
    ///
    /// The activated row replaces any existing multi-selection.
    pub fn activate_current(&mut self) -> Option<Submission> {
        let index = self.current()?;
        self.selected.clear();
        self.selected.insert(index);
        Some(Submission::new([self.items[index].clone()]))
    }

    // ========== 光标 ==========

    pub fn move_up(&mut self) {
        self.cursor.move_up();
    }

    pub fn move_down(&mut self) {
        self.cursor.move_down(self.visible.len());
    }

    pub fn page_up(&mut self) {
        self.cursor.page_up();
    }

    pub fn page_down(&mut self) {
        self.cursor.page_down(self.visible.len());
    }

    pub fn jump_to_top(&mut self) {
        self.cursor.jump_to_top();
    }

    pub fn jump_to_bottom(&mut self) {
        self.cursor.jump_to_bottom(self.visible.len());
    }
}
