use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

use super::widgets::FilterBar;
use crate::interfaces::tui::app::CategorySelector;
use crate::interfaces::tui::theme::Palette;

pub fn draw_selector_screen(
    frame: &mut Frame,
    area: Rect,
    selector: &mut CategorySelector,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(3)])
        .split(area);

    FilterBar::new("Filter categories", selector.filter_text())
        .placeholder(" press / to filter")
        .editing(selector.editing_filter)
        .counts(selector.visible_count(), selector.items().len())
        .render(frame, chunks[0], palette);

    let mut title = format!(
        "Categories ({}/{})",
        selector.visible_count(),
        selector.items().len()
    );
    if selector.selected_count() > 0 {
        title.push_str(&format!(" | {} selected", selector.selected_count()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(!selector.editing_filter))
        .title(title)
        .title_style(palette.title_style());

    if selector.visible_count() == 0 {
        let message = if selector.items().is_empty() {
            "No categories available"
        } else {
            "No categories match the filter"
        };
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(message, palette.muted_style())),
        ])
        .style(palette.base_style())
        .block(block)
        .alignment(ratatui::layout::Alignment::Center);
        frame.render_widget(empty, chunks[1]);
        return;
    }

    let items: Vec<ListItem> = selector
        .visible_items()
        .enumerate()
        .map(|(row, (index, label))| {
            let marker = if selector.is_selected(index) {
                Span::styled("[x] ", Style::default().fg(palette.link))
            } else {
                Span::styled("[ ] ", palette.muted_style())
            };
            let style = if row % 2 == 0 {
                palette.base_style()
            } else {
                palette.alternate_style()
            };
            ListItem::new(Line::from(vec![marker, Span::raw(label.to_string())])).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .style(palette.base_style())
        .highlight_style(palette.selection_style())
        .highlight_symbol("▶ ");

    let cursor = selector.cursor_position();
    selector.list_state.select(cursor);
    frame.render_stateful_widget(list, chunks[1], &mut selector.list_state);
}
