//! Category selector page

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
};

use super::is_plain_char;
use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::app::{CategorySelector, Submission};
use crate::interfaces::tui::component::Component;
use crate::interfaces::tui::theme::Palette;
use crate::interfaces::tui::ui::draw_selector_screen;

impl Component for CategorySelector {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.editing_filter {
            return handle_filter_input(self, key);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Home | KeyCode::Char('g') => self.jump_to_top(),
            KeyCode::End | KeyCode::Char('G') => self.jump_to_bottom(),
            KeyCode::PageUp => self.page_up(),
            KeyCode::PageDown => self.page_down(),
            KeyCode::Char(' ') => self.toggle_current(),
            KeyCode::Char('a') => self.select_all_visible(),
            KeyCode::Char('c') => self.clear_selection(),
            KeyCode::Char('/') => self.editing_filter = true,
            KeyCode::Esc => {
                if !self.filter_text().is_empty() {
                    self.clear_filter();
                }
            }
            // 无可见行时提交空选择，触发警告
            KeyCode::Enter => {
                return Action::Submit(self.activate_current().unwrap_or_default());
            }
            KeyCode::Char('s') => return Action::Submit(self.submit_selection()),
            KeyCode::Char('t') => return Action::ToggleTheme,
            KeyCode::Char('?') => return Action::ShowHelp,
            KeyCode::Char('q') => return Action::Quit,
            _ => {}
        }
        Action::Noop
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        draw_selector_screen(frame, area, self, palette);
    }
}

fn handle_filter_input(selector: &mut CategorySelector, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => selector.editing_filter = false,
        KeyCode::Backspace => selector.pop_filter_char(),
        KeyCode::Up => selector.move_up(),
        KeyCode::Down => selector.move_down(),
        KeyCode::Char(c) if is_plain_char(&key) => selector.push_filter_char(c),
        _ => {}
    }
    Action::Noop
}
