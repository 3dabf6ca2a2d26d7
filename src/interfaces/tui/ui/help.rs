use ratatui::{
    Frame,
    layout::{Margin, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

use super::widgets::Popup;
use crate::interfaces::tui::constants::popup;
use crate::interfaces::tui::theme::Palette;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "NAVIGATION",
        &[
            ("Up/Down, j/k", "Move cursor"),
            ("Home/End, g/G", "Jump to top / bottom"),
            ("PageUp/PageDown", "Scroll 10 rows"),
            ("Tab/Shift-Tab, ←/→", "Switch result tab"),
            ("Esc, b", "Back to categories"),
        ],
    ),
    (
        "SELECTION",
        &[
            ("Space", "Toggle row"),
            ("a", "Select all visible"),
            ("c", "Clear selection"),
            ("/", "Edit filter (Enter to finish)"),
            ("1 / 2 / 3", "Sort by Name / Link / Description"),
        ],
    ),
    (
        "ACTIONS",
        &[
            ("Enter", "Open category / open link"),
            ("s", "Show selected categories"),
            ("o", "Open selected links"),
            ("y", "Copy selected links"),
        ],
    ),
    (
        "GENERAL",
        &[
            ("t, Ctrl-T", "Toggle dark / light theme"),
            ("?", "This help"),
            ("q, Ctrl-C", "Quit"),
        ],
    ),
];

pub fn draw_help_popup(frame: &mut Frame, palette: &Palette, area: Rect) {
    let inner = Popup::new("Help - Keyboard Shortcuts", popup::HELP, palette)
        .margin(Margin::new(3, 1))
        .render(frame, area);

    let mut lines = Vec::new();
    for (heading, keys) in SECTIONS {
        lines.push(Line::from(Span::styled(*heading, palette.header_style())));
        for (key, description) in *keys {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<22}", key), palette.title_style()),
                Span::styled(*description, Style::default().fg(palette.text)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::from(Span::styled(
        "Press any key to close",
        palette.muted_style(),
    )));

    frame.render_widget(Paragraph::new(lines), inner);
}
