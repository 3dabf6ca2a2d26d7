//! 居中弹窗
//!
//! 先清空底层内容，再画双线边框；返回去掉内边距后的区域供调用方填充

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Clear},
};

use crate::interfaces::tui::constants::PopupSize;
use crate::interfaces::tui::theme::Palette;

pub struct Popup<'a> {
    title: &'a str,
    /// 边框和标题
    accent: Color,
    background: Color,
    size: PopupSize,
    padding: Margin,
}

impl<'a> Popup<'a> {
    pub fn new(title: &'a str, size: PopupSize, palette: &Palette) -> Self {
        Self {
            title,
            accent: palette.accent,
            background: palette.base,
            size,
            padding: Margin::new(2, 1),
        }
    }

    pub fn theme_color(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    pub fn margin(mut self, padding: Margin) -> Self {
        self.padding = padding;
        self
    }

    /// Draw the frame of the popup and return its content area
    pub fn render(&self, frame: &mut Frame, area: Rect) -> Rect {
        let outer = centered_rect(self.size, area);
        frame.render_widget(Clear, outer);

        let accent = Style::default().fg(self.accent);
        let block = Block::bordered()
            .border_type(BorderType::Double)
            .border_style(accent)
            .title(self.title)
            .title_style(accent.add_modifier(Modifier::BOLD))
            .style(Style::default().bg(self.background));
        frame.render_widget(block, outer);

        outer.inner(self.padding)
    }
}

/// Percentage-sized rectangle in the middle of `area`
fn centered_rect(size: PopupSize, area: Rect) -> Rect {
    let [band] = Layout::vertical([Constraint::Percentage(size.height)])
        .flex(Flex::Center)
        .areas(area);
    let [popup] = Layout::horizontal([Constraint::Percentage(size.width)])
        .flex(Flex::Center)
        .areas(band);
    popup
}
