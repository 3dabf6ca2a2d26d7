//! Application lifecycle and execution modes
//!
//! - `lifetime`: startup (config, logging, panic hook, catalog)
//! - `modes`: routing between the TUI and one-shot CLI commands

pub mod lifetime;
pub mod modes;
