use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::widgets::Popup;
use crate::interfaces::tui::app::Warning;
use crate::interfaces::tui::constants::popup;
use crate::interfaces::tui::theme::Palette;

pub fn draw_warning_popup(frame: &mut Frame, warning: &Warning, palette: &Palette, area: Rect) {
    let inner = Popup::new(&warning.title, popup::WARNING, palette)
        .theme_color(palette.warning)
        .render(frame, area);

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            warning.message.as_str(),
            Style::default().fg(palette.text),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[Enter]", palette.header_style()),
            Span::styled(" OK", palette.muted_style()),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}
