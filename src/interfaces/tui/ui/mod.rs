// UI submodules
mod common;
mod help;
mod results;
mod selector;
mod warning;
pub mod widgets;

// Re-export common utilities
pub use common::{draw_footer, draw_status_bar, draw_title_bar};

// Re-export screen drawing functions
pub use help::draw_help_popup;
pub use results::draw_results_screen;
pub use selector::draw_selector_screen;
pub use warning::draw_warning_popup;

use super::app::{App, ViewState};
use super::component::Component;
use super::theme::apply_palette;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Main UI rendering entry point
pub fn ui(frame: &mut Frame, app: &mut App) {
    let palette = app.theme.palette();
    apply_palette(frame, &palette);

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(8),    // Page
            Constraint::Length(3), // Status
            Constraint::Length(2), // Footer
        ])
        .split(frame.area());

    draw_title_bar(frame, app, &palette, main_chunks[0]);

    match app.view {
        ViewState::Selecting => app.selector.render(frame, main_chunks[1], &palette),
        ViewState::ViewingResults => {
            if let Some(results) = app.results.as_mut() {
                results.render(frame, main_chunks[1], &palette);
            }
        }
    }

    draw_status_bar(frame, app, &palette, main_chunks[2]);
    draw_footer(frame, app, &palette, main_chunks[3]);

    // 弹窗在最上层
    let area = frame.area();
    if app.show_help {
        draw_help_popup(frame, &palette, area);
    }
    if let Some(warning) = &app.warning {
        draw_warning_popup(frame, warning, &palette, area);
    }
}
