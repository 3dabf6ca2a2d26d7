//! Terminal User Interface (TUI) module
//!
//! Interactive browser for the link catalog: pick categories, then open or
//! copy links from per-category tables.

use std::io::{self, Stderr};

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, Event},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{debug, info};

pub mod action;
pub mod app;
pub mod component;
pub mod constants;
pub mod event_handler;
pub mod theme;
mod ui;

use crate::catalog::Catalog;
use crate::errors::{DeckError, Result};
use app::App;
pub use ui::ui;

type DeckTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Run the TUI application
///
/// Blocks until the user quits.
pub fn run_tui(catalog: Catalog) -> Result<()> {
    let mut terminal = setup_terminal().map_err(terminal_error)?;

    let mut app = App::with_system_services(catalog);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    restore_terminal(&mut terminal).map_err(terminal_error)?;

    res.map_err(terminal_error)
}

fn setup_terminal() -> io::Result<DeckTerminal> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stderr);
    Terminal::new(backend)
}

fn restore_terminal(terminal: &mut DeckTerminal) -> io::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn terminal_error(e: io::Error) -> DeckError {
    DeckError::terminal(e.to_string())
}

/// Main application loop
fn run_app(terminal: &mut DeckTerminal, app: &mut App) -> io::Result<()> {
    info!("TUI started with {} categories", app.catalog.len());
    loop {
        terminal.draw(|f| ui(f, app))?;

        match event::read()? {
            Event::Key(key) => {
                if event_handler::handle_key_event(app, key) {
                    debug!("Quit requested");
                    return Ok(());
                }
            }
            // 下一轮循环会按新尺寸重绘
            Event::Resize(_, _) => {}
            _ => {}
        }
    }
}
