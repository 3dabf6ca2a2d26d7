//! 过滤输入框
//!
//! 选择页和结果页共用：编辑中显示光标和高亮边框，空值时显示占位提示

use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::interfaces::tui::theme::Palette;

pub struct FilterBar<'a> {
    title: &'a str,
    value: &'a str,
    placeholder: &'a str,
    editing: bool,
    /// 匹配数 / 总数
    counts: Option<(usize, usize)>,
}

impl<'a> FilterBar<'a> {
    pub fn new(title: &'a str, value: &'a str) -> Self {
        Self {
            title,
            value,
            placeholder: "",
            editing: false,
            counts: None,
        }
    }

    pub fn editing(mut self, editing: bool) -> Self {
        self.editing = editing;
        self
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn counts(mut self, visible: usize, total: usize) -> Self {
        self.counts = Some((visible, total));
        self
    }

    fn display_title(&self) -> String {
        match self.counts {
            Some((visible, total)) if !self.value.is_empty() => {
                format!("{} ({}/{} matches)", self.title, visible, total)
            }
            _ => self.title.to_string(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, palette: &Palette) {
        let mut spans = vec![Span::styled("/", palette.header_style())];
        if self.value.is_empty() && !self.editing {
            spans.push(Span::styled(self.placeholder, palette.muted_style()));
        } else {
            spans.push(Span::styled(self.value, Style::default().fg(palette.text)));
        }
        if self.editing {
            spans.push(Span::styled(
                "_",
                Style::default()
                    .fg(palette.warning)
                    .add_modifier(Modifier::RAPID_BLINK),
            ));
        }

        let block = Block::default()
            .title(self.display_title())
            .title_style(palette.title_style())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(palette.border_style(self.editing));

        frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_shows_counts_only_when_filtering() {
        let bar = FilterBar::new("Filter", "").counts(3, 10);
        assert_eq!(bar.display_title(), "Filter");

        let bar = FilterBar::new("Filter", "dns").counts(1, 10);
        assert_eq!(bar.display_title(), "Filter (1/10 matches)");
    }
}
