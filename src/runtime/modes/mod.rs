//! Mode routing
//!
//! This module provides unified entry points for the execution modes:
//! - TUI mode (default, interactive browser)
//! - CLI mode (one-shot commands)

pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;

pub use cli::run_cli;

#[cfg(feature = "tui")]
pub use tui::run_tui;

use crate::cli::Commands;
use crate::system::RunMode;

/// Mode detection result
#[derive(Debug, PartialEq)]
pub enum Mode {
    #[cfg(feature = "tui")]
    Tui,
    Cli(Commands),
    /// No subcommand and no TUI compiled in
    Unknown,
}

impl Mode {
    pub fn run_mode(&self) -> RunMode {
        match self {
            #[cfg(feature = "tui")]
            Mode::Tui => RunMode::Tui,
            _ => RunMode::Cli,
        }
    }
}

/// Pick the mode from the parsed subcommand
///
/// No subcommand means the TUI when it is compiled in.
pub fn detect_mode(command: Option<Commands>) -> Mode {
    match command {
        #[cfg(feature = "tui")]
        Some(Commands::Tui) | None => Mode::Tui,
        #[cfg(not(feature = "tui"))]
        None => Mode::Unknown,
        Some(cmd) => Mode::Cli(cmd),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subcommands_route_to_cli() {
        let mode = detect_mode(Some(Commands::List { categories: vec![] }));
        assert_eq!(mode.run_mode(), RunMode::Cli);
        assert!(matches!(mode, Mode::Cli(Commands::List { .. })));
    }

    #[cfg(feature = "tui")]
    #[test]
    fn test_default_is_tui() {
        assert_eq!(detect_mode(None), Mode::Tui);
        assert_eq!(detect_mode(Some(Commands::Tui)), Mode::Tui);
        assert_eq!(Mode::Tui.run_mode(), RunMode::Tui);
    }
}
