//! Results page: tabs, table navigation, open / copy

use ratatui::{
    Frame,
    crossterm::event::{KeyCode, KeyEvent},
    layout::Rect,
};

use super::is_plain_char;
use crate::interfaces::tui::action::Action;
use crate::interfaces::tui::app::{Column, ResultsView};
use crate::interfaces::tui::component::Component;
use crate::interfaces::tui::theme::Palette;
use crate::interfaces::tui::ui::draw_results_screen;

impl Component for ResultsView {
    fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab | KeyCode::Right => {
                self.next_tab();
                return Action::Noop;
            }
            KeyCode::BackTab | KeyCode::Left => {
                self.prev_tab();
                return Action::Noop;
            }
            // 编辑过滤时 Esc 同样返回
            KeyCode::Esc => {
                self.editing_filter = false;
                return Action::Back;
            }
            _ => {}
        }

        if self.editing_filter {
            return handle_filter_input(self, key);
        }

        match key.code {
            KeyCode::Char('b') => return Action::Back,
            KeyCode::Char('/') => self.editing_filter = true,
            KeyCode::Char('t') => return Action::ToggleTheme,
            KeyCode::Char('?') => return Action::ShowHelp,
            _ => {}
        }

        let Some(table) = self.active_tab_mut() else {
            return Action::Noop;
        };
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => table.move_up(),
            KeyCode::Down | KeyCode::Char('j') => table.move_down(),
            KeyCode::Home | KeyCode::Char('g') => table.jump_to_top(),
            KeyCode::End | KeyCode::Char('G') => table.jump_to_bottom(),
            KeyCode::PageUp => table.page_up(),
            KeyCode::PageDown => table.page_down(),
            KeyCode::Char(' ') => table.toggle_mark_current(),
            KeyCode::Char('a') => table.mark_all_visible(),
            KeyCode::Char('c') => table.clear_marks(),
            KeyCode::Char(c @ '1'..='3') => {
                if let Some(column) = Column::from_key(c) {
                    table.activate_header(column);
                }
            }
            KeyCode::Enter => return Action::OpenLinks(table.activated_links()),
            KeyCode::Char('o') => return Action::OpenLinks(table.selected_links()),
            KeyCode::Char('y') => return Action::CopyLinks(table.selected_links()),
            _ => {}
        }
        Action::Noop
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, palette: &Palette) {
        draw_results_screen(frame, area, self, palette);
    }
}

fn handle_filter_input(view: &mut ResultsView, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Enter => view.editing_filter = false,
        KeyCode::Backspace => view.pop_filter_char(),
        KeyCode::Up => {
            if let Some(table) = view.active_tab_mut() {
                table.move_up();
            }
        }
        KeyCode::Down => {
            if let Some(table) = view.active_tab_mut() {
                table.move_down();
            }
        }
        KeyCode::Char(c) if is_plain_char(&key) => view.push_filter_char(c),
        _ => {}
    }
    Action::Noop
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::LinkRecord;
    use ratatui::crossterm::event::KeyModifiers;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn view() -> ResultsView {
        ResultsView::new(vec![
            (
                "Servers".to_string(),
                vec![
                    LinkRecord::new("Shodan", "https://www.shodan.io", ""),
                    LinkRecord::new("Broken", "nope", ""),
                ],
            ),
            ("DNS".to_string(), vec![]),
        ])
    }

    #[test]
    fn test_enter_opens_activated_row() {
        let mut view = view();
        assert_eq!(
            view.handle_key(press(KeyCode::Enter)),
            Action::OpenLinks(vec!["https://www.shodan.io".to_string()])
        );
    }

    #[test]
    fn test_bulk_copy_uses_marks() {
        let mut view = view();
        view.handle_key(press(KeyCode::Char('a')));
        assert_eq!(
            view.handle_key(press(KeyCode::Char('y'))),
            Action::CopyLinks(vec![
                "https://www.shodan.io".to_string(),
                "nope".to_string()
            ])
        );
    }

    #[test]
    fn test_header_keys_sort() {
        let mut view = view();
        view.handle_key(press(KeyCode::Char('1')));
        let first = view
            .active_tab()
            .and_then(|t| t.visible_rows().next().map(|(_, r)| r.name().to_string()));
        assert_eq!(first.as_deref(), Some("Broken"));
    }

    #[test]
    fn test_filter_editing_swallows_b_but_not_esc() {
        let mut view = view();
        view.handle_key(press(KeyCode::Char('/')));
        assert_eq!(view.handle_key(press(KeyCode::Char('b'))), Action::Noop);
        assert_eq!(view.filter_input(), "b");

        view.handle_key(press(KeyCode::Enter));
        assert!(!view.editing_filter);
        assert_eq!(view.filter_input(), "b");

        view.handle_key(press(KeyCode::Char('/')));
        assert_eq!(view.handle_key(press(KeyCode::Esc)), Action::Back);
        assert!(!view.editing_filter);
    }

    #[test]
    fn test_tab_keys_cycle() {
        let mut view = view();
        view.handle_key(press(KeyCode::Tab));
        assert_eq!(view.active_index(), 1);
        view.handle_key(press(KeyCode::BackTab));
        assert_eq!(view.active_index(), 0);
        // 空表上的操作无效果
        view.handle_key(press(KeyCode::Right));
        assert_eq!(
            view.handle_key(press(KeyCode::Char('o'))),
            Action::OpenLinks(vec![])
        );
    }
}
