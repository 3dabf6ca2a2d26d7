//! Results view: one sortable, filterable table per submitted category

use ratatui::widgets::TableState;
use std::collections::HashSet;
use strum::{AsRefStr, EnumIter};

use super::navigation::ListCursor;
use crate::catalog::{CategoryName, LinkRecord};
use crate::interfaces::tui::constants::DESCRIPTION_PLACEHOLDER;

/// 表格列
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, AsRefStr)]
pub enum Column {
    Name,
    Link,
    Description,
}

impl Column {
    pub fn index(self) -> usize {
        match self {
            Column::Name => 0,
            Column::Link => 1,
            Column::Description => 2,
        }
    }

    /// Header key: `1`, `2`, `3`
    pub fn from_key(c: char) -> Option<Self> {
        match c {
            '1' => Some(Column::Name),
            '2' => Some(Column::Link),
            '3' => Some(Column::Description),
            _ => None,
        }
    }
}

/// One displayed row; an empty description already holds the placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    cells: [String; 3],
}

impl ResultRow {
    pub fn from_record(record: &LinkRecord) -> Self {
        let description = if record.description.is_empty() {
            DESCRIPTION_PLACEHOLDER.to_string()
        } else {
            record.description.clone()
        };
        Self {
            cells: [record.name.clone(), record.url.clone(), description],
        }
    }

    pub fn cell(&self, column: Column) -> &str {
        &self.cells[column.index()]
    }

    pub fn name(&self) -> &str {
        self.cell(Column::Name)
    }

    pub fn link(&self) -> &str {
        self.cell(Column::Link)
    }

    pub fn description(&self) -> &str {
        self.cell(Column::Description)
    }

    pub fn cells(&self) -> &[String; 3] {
        &self.cells
    }

    /// `needle` must already be lower-cased
    fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self
                .cells
                .iter()
                .any(|cell| cell.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortState {
    pub column: Column,
    pub ascending: bool,
}

/// 单个分类的结果表
#[derive(Debug)]
pub struct ResultsTable {
    category: CategoryName,
    rows: Vec<ResultRow>,
    filter: String,
    sort: Option<SortState>,
    /// Indices into `rows`, in display order
    visible: Vec<usize>,
    /// Indices into `rows`
    marked: HashSet<usize>,
    cursor: ListCursor,
    pub(crate) table_state: TableState,
}

impl ResultsTable {
    pub fn new(category: impl Into<CategoryName>, records: &[LinkRecord]) -> Self {
        let rows: Vec<ResultRow> = records.iter().map(ResultRow::from_record).collect();
        let visible = (0..rows.len()).collect();
        Self {
            category: category.into(),
            rows,
            filter: String::new(),
            sort: None,
            visible,
            marked: HashSet::new(),
            cursor: ListCursor::default(),
            table_state: TableState::default(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    pub fn sort(&self) -> Option<SortState> {
        self.sort
    }

    /// Visible rows as `(row index, row)`, in display order
    pub fn visible_rows(&self) -> impl Iterator<Item = (usize, &ResultRow)> {
        self.visible.iter().map(|&i| (i, &self.rows[i]))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    pub fn set_filter(&mut self, text: &str) {
        self.filter = text.to_string();
        self.refresh();
    }

    /// Header activation: a new column sorts ascending, the same column flips
    pub fn activate_header(&mut self, column: Column) {
        self.sort = Some(match self.sort {
            Some(state) if state.column == column => SortState {
                column,
                ascending: !state.ascending,
            },
            _ => SortState {
                column,
                ascending: true,
            },
        });
        self.refresh();
    }

    fn refresh(&mut self) {
        let needle = self.filter.to_lowercase();
        let rows = &self.rows;
        let mut visible: Vec<usize> = (0..rows.len())
            .filter(|&i| rows[i].matches(&needle))
            .collect();

        if let Some(SortState { column, ascending }) = self.sort {
            // Stable: ties keep insertion order in both directions
            visible.sort_by_cached_key(|&i| rows[i].cell(column).to_lowercase());
            if !ascending {
                visible.reverse();
                reverse_ties(&mut visible, |i| rows[i].cell(column).to_lowercase());
            }
        }

        self.visible = visible;
        self.cursor.clamp(self.visible.len());
    }

    // ========== 选择 ==========

    pub fn cursor_position(&self) -> Option<usize> {
        self.cursor.position(self.visible.len())
    }

    pub fn current_row(&self) -> Option<&ResultRow> {
        self.cursor_position().map(|pos| &self.rows[self.visible[pos]])
    }

    pub fn is_marked(&self, index: usize) -> bool {
        self.marked.contains(&index)
    }

    pub fn marked_count(&self) -> usize {
        self.marked.len()
    }

    pub fn toggle_mark_current(&mut self) {
        if let Some(pos) = self.cursor_position() {
            let index = self.visible[pos];
            if !self.marked.remove(&index) {
                self.marked.insert(index);
            }
        }
    }

    pub fn mark_all_visible(&mut self) {
        self.marked.extend(self.visible.iter().copied());
    }

    pub fn clear_marks(&mut self) {
        self.marked.clear();
    }

    /// Link of the row a direct activation lands on
    pub fn activated_links(&self) -> Vec<String> {
        self.current_row()
            .map(|row| vec![row.link().to_string()])
            .unwrap_or_default()
    }

    /// Links of the effective selection, in display order
    ///
    /// Marked rows hidden by the filter are not part of it. Without any
    /// visible mark the row under the cursor is the selection.
    pub fn selected_links(&self) -> Vec<String> {
        let marked: Vec<String> = self
            .visible_rows()
            .filter(|(i, _)| self.marked.contains(i))
            .map(|(_, row)| row.link().to_string())
            .collect();
        if marked.is_empty() {
            self.activated_links()
        } else {
            marked
        }
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

/// After reversing an ascending order, runs of equal keys come out reversed;
/// flip each run back so ties stay in insertion order.
fn reverse_ties<K: PartialEq>(order: &mut [usize], key: impl Fn(usize) -> K) {
    let mut start = 0;
    while start < order.len() {
        let current = key(order[start]);
        let mut end = start + 1;
        while end < order.len() && key(order[end]) == current {
            end += 1;
        }
        order[start..end].reverse();
        start = end;
    }
}

/// All tables of one submission plus the shared filter box
#[derive(Debug, Default)]
pub struct ResultsView {
    tabs: Vec<ResultsTable>,
    active: usize,
    filter_input: String,
    pub editing_filter: bool,
}

impl ResultsView {
    pub fn new(data: Vec<(CategoryName, Vec<LinkRecord>)>) -> Self {
        Self {
            tabs: data
                .into_iter()
                .map(|(category, records)| ResultsTable::new(category, &records))
                .collect(),
            ..Self::default()
        }
    }

    pub fn tabs(&self) -> &[ResultsTable] {
        &self.tabs
    }

    pub fn tab_titles(&self) -> Vec<&str> {
        self.tabs.iter().map(ResultsTable::category).collect()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn active_tab(&self) -> Option<&ResultsTable> {
        self.tabs.get(self.active)
    }

    pub fn active_tab_mut(&mut self) -> Option<&mut ResultsTable> {
        self.tabs.get_mut(self.active)
    }

    pub fn filter_input(&self) -> &str {
        &self.filter_input
    }

    /// Filter box changed: applies to the active tab only
    pub fn set_filter_text(&mut self, text: &str) {
        self.filter_input = text.to_string();
        if let Some(tab) = self.tabs.get_mut(self.active) {
            tab.set_filter(text);
        }
    }

    pub fn push_filter_char(&mut self, c: char) {
        let mut text = std::mem::take(&mut self.filter_input);
        text.push(c);
        self.set_filter_text(&text);
    }

    pub fn pop_filter_char(&mut self) {
        let mut text = std::mem::take(&mut self.filter_input);
        text.pop();
        self.set_filter_text(&text);
    }

    /// Switch tabs; the filter box text is re-applied to the new tab
    pub fn select_tab(&mut self, index: usize) {
        if index >= self.tabs.len() {
            return;
        }
        self.active = index;
        let text = self.filter_input.clone();
        self.tabs[index].set_filter(&text);
    }

    pub fn next_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.select_tab((self.active + 1) % self.tabs.len());
        }
    }

    pub fn prev_tab(&mut self) {
        if !self.tabs.is_empty() {
            self.select_tab((self.active + self.tabs.len() - 1) % self.tabs.len());
        }
    }
}
