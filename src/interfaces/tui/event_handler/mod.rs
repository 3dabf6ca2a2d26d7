//! Event handling for TUI
//!
//! Global keys and modal popups are handled here; everything else is
//! delegated to the component of the current page:
//! - selector_screen: category list
//! - results_screen: result tabs

use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::interfaces::tui::app::{App, ViewState};
use crate::interfaces::tui::component::Component;

mod results_screen;
mod selector_screen;

/// Handle one key event, returns whether the app should exit
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> bool {
    // Windows 上同一次按键会收到 Press 和 Release
    if key.kind != KeyEventKind::Press {
        return false;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && matches!(key.code, KeyCode::Char('c')) {
        return true;
    }

    // 警告弹窗吞掉所有按键，直到确认
    if app.warning.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
            app.dismiss_warning();
        }
        return false;
    }

    if app.show_help {
        app.show_help = false;
        return false;
    }

    if ctrl && matches!(key.code, KeyCode::Char('t')) {
        app.toggle_theme();
        return false;
    }

    let action = match app.view {
        ViewState::Selecting => app.selector.handle_key(key),
        ViewState::ViewingResults => match app.results.as_mut() {
            Some(results) => results.handle_key(key),
            None => return false,
        },
    };
    app.dispatch(action)
}

/// Text input ignores Ctrl / Alt chords
fn is_plain_char(key: &KeyEvent) -> bool {
    !key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}
