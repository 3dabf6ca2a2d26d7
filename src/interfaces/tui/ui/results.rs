use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Row, Table, Tabs},
};
use strum::IntoEnumIterator;

use super::widgets::FilterBar;
use crate::interfaces::tui::app::{Column, ResultsTable, ResultsView};
use crate::interfaces::tui::theme::Palette;

pub fn draw_results_screen(
    frame: &mut Frame,
    area: Rect,
    view: &mut ResultsView,
    palette: &Palette,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Length(3), // Filter
            Constraint::Min(3),    // Table
        ])
        .split(area);

    let tabs = Tabs::new(view.tab_titles())
        .select(view.active_index())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border_style(false))
                .title("Results")
                .title_style(palette.title_style()),
        )
        .style(Style::default().fg(palette.text))
        .highlight_style(palette.selection_style())
        .divider(Span::styled("|", palette.muted_style()));
    frame.render_widget(tabs, chunks[0]);

    let (visible, total) = view
        .active_tab()
        .map(|t| (t.visible_count(), t.rows().len()))
        .unwrap_or_default();
    FilterBar::new("Filter rows", view.filter_input())
        .placeholder(" press / to filter this tab")
        .editing(view.editing_filter)
        .counts(visible, total)
        .render(frame, chunks[1], palette);

    let editing = view.editing_filter;
    if let Some(table) = view.active_tab_mut() {
        draw_table(frame, chunks[2], table, palette, !editing);
    }
}

/// Header cell with sort indicator
fn format_header(column: Column, table: &ResultsTable, palette: &Palette) -> Span<'static> {
    let style = palette.header_style();
    match table.sort() {
        Some(sort) if sort.column == column => {
            let arrow = if sort.ascending { "▲" } else { "▼" };
            Span::styled(format!("{} {}", column.as_ref(), arrow), style)
        }
        _ => Span::styled(column.as_ref().to_string(), style),
    }
}

fn draw_table(
    frame: &mut Frame,
    area: Rect,
    table: &mut ResultsTable,
    palette: &Palette,
    focused: bool,
) {
    let mut title = format!(
        "{} ({}/{})",
        table.category(),
        table.visible_count(),
        table.rows().len()
    );
    if table.marked_count() > 0 {
        title.push_str(&format!(" | {} marked", table.marked_count()));
    }
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.border_style(focused))
        .title(title)
        .title_style(palette.title_style());

    if table.visible_count() == 0 {
        let message = if table.rows().is_empty() {
            "No records in this category"
        } else {
            "No rows match the filter"
        };
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(message, palette.muted_style())),
        ])
        .style(palette.base_style())
        .block(block)
        .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let mut header_cells = vec![Span::raw("  ")];
    header_cells.extend(Column::iter().map(|c| format_header(c, table, palette)));
    let header = Row::new(header_cells).bottom_margin(1);

    let rows: Vec<Row> = table
        .visible_rows()
        .enumerate()
        .map(|(position, (index, row))| {
            let marker = if table.is_marked(index) {
                Span::styled("● ", Style::default().fg(palette.link))
            } else {
                Span::raw("  ")
            };
            let style = if position % 2 == 0 {
                palette.base_style()
            } else {
                palette.alternate_style()
            };
            Row::new(vec![
                marker,
                Span::raw(row.name().to_string()),
                Span::styled(row.link().to_string(), palette.link_style()),
                Span::raw(row.description().to_string()),
            ])
            .style(style)
        })
        .collect();

    let widget = Table::new(
        rows,
        [
            Constraint::Length(2),      // Mark
            Constraint::Percentage(25), // Name
            Constraint::Percentage(35), // Link
            Constraint::Min(20),        // Description
        ],
    )
    .header(header)
    .block(block)
    .style(palette.base_style())
    .row_highlight_style(palette.selection_style())
    .highlight_symbol("▶ ")
    .column_spacing(1);

    let cursor = table.cursor_position();
    table.table_state.select(cursor);
    frame.render_stateful_widget(widget, area, &mut table.table_state);
}
