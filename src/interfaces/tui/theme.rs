//! Dark / light palettes
//!
//! The active [`Theme`] is a plain value owned by the app. Rendering asks it
//! for a [`Palette`] and paints the whole frame through [`apply_palette`].

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    widgets::Block,
};
use strum::{AsRefStr, EnumIter};

/// 主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, EnumIter, AsRefStr)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The checkable flag: dark is "on"
    pub fn is_dark(self) -> bool {
        matches!(self, Theme::Dark)
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn palette(self) -> Palette {
        match self {
            Theme::Dark => DARK,
            Theme::Light => LIGHT,
        }
    }
}

/// Fixed set of colors the UI is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    /// Window background
    pub window: Color,
    /// Background of lists and tables
    pub base: Color,
    /// Alternating row background
    pub alternate_base: Color,
    pub text: Color,
    pub disabled: Color,
    pub highlight: Color,
    pub highlighted_text: Color,
    pub link: Color,
    /// Borders, titles, key hints
    pub accent: Color,
    pub warning: Color,
}

pub const DARK: Palette = Palette {
    window: Color::Rgb(37, 37, 38),
    base: Color::Rgb(30, 30, 30),
    alternate_base: Color::Rgb(45, 45, 48),
    text: Color::Rgb(220, 220, 220),
    disabled: Color::Rgb(127, 127, 127),
    highlight: Color::Rgb(14, 99, 156),
    highlighted_text: Color::Rgb(255, 255, 255),
    link: Color::Rgb(85, 170, 255),
    accent: Color::Rgb(86, 182, 194),
    warning: Color::Rgb(229, 192, 123),
};

pub const LIGHT: Palette = Palette {
    window: Color::Rgb(239, 239, 239),
    base: Color::Rgb(255, 255, 255),
    alternate_base: Color::Rgb(247, 247, 247),
    text: Color::Rgb(0, 0, 0),
    disabled: Color::Rgb(190, 190, 190),
    highlight: Color::Rgb(48, 140, 198),
    highlighted_text: Color::Rgb(255, 255, 255),
    link: Color::Rgb(0, 0, 255),
    accent: Color::Rgb(0, 110, 140),
    warning: Color::Rgb(176, 96, 0),
};

impl Palette {
    pub fn window_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.window)
    }

    pub fn base_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.base)
    }

    pub fn alternate_style(&self) -> Style {
        Style::default().fg(self.text).bg(self.alternate_base)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    pub fn link_style(&self) -> Style {
        Style::default().fg(self.link)
    }

    pub fn selection_style(&self) -> Style {
        Style::default()
            .fg(self.highlighted_text)
            .bg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.warning)
        } else {
            Style::default().fg(self.accent)
        }
    }

    pub fn title_style(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn header_style(&self) -> Style {
        Style::default()
            .fg(self.warning)
            .add_modifier(Modifier::BOLD)
    }
}

/// Repaint the whole frame with the palette's window colors
pub fn apply_palette(frame: &mut Frame, palette: &Palette) {
    let area = frame.area();
    frame.render_widget(Block::default().style(palette.window_style()), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert!(Theme::default().is_dark());
    }

    #[test]
    fn test_toggle_twice_restores_palette() {
        for theme in Theme::iter() {
            let original = theme.palette();
            assert_eq!(theme.toggled().toggled().palette(), original);
            assert_ne!(theme.toggled().palette(), original);
        }
    }

    #[test]
    fn test_dark_palette_values() {
        assert_eq!(DARK.window, Color::Rgb(37, 37, 38));
        assert_eq!(DARK.highlight, Color::Rgb(14, 99, 156));
        assert_eq!(LIGHT.base, Color::Rgb(255, 255, 255));
    }
}
