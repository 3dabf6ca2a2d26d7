use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::app::{App, ViewState};
use crate::interfaces::tui::constants::APP_NAME;
use crate::interfaces::tui::theme::Palette;

/// Draw title bar with version and theme
pub fn draw_title_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let muted = palette.muted_style();
    let title_text = vec![Line::from(vec![
        Span::styled(APP_NAME, palette.title_style()),
        Span::styled(format!(" v{} ", env!("CARGO_PKG_VERSION")), muted),
        Span::styled("| ", muted),
        Span::styled(
            format!("Categories: {} ", app.catalog.len()),
            Style::default().fg(palette.warning),
        ),
        Span::styled("| ", muted),
        Span::styled(
            format!("Theme: {}", app.theme.as_ref()),
            Style::default().fg(palette.text),
        ),
    ])];

    let title = Paragraph::new(title_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.border_style(false)),
        )
        .alignment(Alignment::Center);

    frame.render_widget(title, area);
}

/// Draw status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let text = if app.status_message.is_empty() {
        "Ready"
    } else {
        app.status_message.as_str()
    };

    let status = Paragraph::new(text)
        .style(Style::default().fg(palette.text))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(palette.muted_style()),
        )
        .alignment(Alignment::Center);

    frame.render_widget(status, area);
}

/// Draw footer with keyboard shortcuts
pub fn draw_footer(frame: &mut Frame, app: &App, palette: &Palette, area: Rect) {
    let editing = match app.view {
        ViewState::Selecting => app.selector.editing_filter,
        ViewState::ViewingResults => app.results.as_ref().is_some_and(|r| r.editing_filter),
    };

    let shortcuts: &[(&str, &str)] = match (editing, app.view) {
        (true, ViewState::Selecting) => &[("Enter/Esc", "Done"), ("Backspace", "Delete")],
        (true, ViewState::ViewingResults) => &[
            ("Enter", "Done"),
            ("Backspace", "Delete"),
            ("Esc", "Back"),
        ],
        (false, ViewState::Selecting) => &[
            ("Space", "Toggle"),
            ("a/c", "All/Clear"),
            ("/", "Filter"),
            ("Enter", "Open one"),
            ("s", "Submit"),
            ("t", "Theme"),
            ("?", "Help"),
            ("q", "Quit"),
        ],
        (false, ViewState::ViewingResults) => &[
            ("Tab", "Next tab"),
            ("1-3", "Sort"),
            ("Space", "Mark"),
            ("Enter", "Open"),
            ("o", "Open marked"),
            ("y", "Copy"),
            ("/", "Filter"),
            ("Esc", "Back"),
        ],
    };

    let mut spans = Vec::new();
    for (i, (key, desc)) in shortcuts.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", palette.muted_style()));
        }
        spans.push(Span::styled(format!("[{}]", key), palette.title_style()));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(palette.text),
        ));
    }

    let footer = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);

    frame.render_widget(footer, area);
}
