//! User interfaces: one-shot CLI commands and the interactive TUI

pub mod cli;

#[cfg(feature = "tui")]
pub mod tui;
