//! TUI mode
//!
//! Startup has already run; this hands the catalog to the interactive browser.

use anyhow::{Context, Result};

use crate::runtime::lifetime::startup::StartupContext;

/// Run TUI mode until the user quits
pub fn run_tui(ctx: StartupContext) -> Result<()> {
    crate::interfaces::tui::run_tui(ctx.catalog).context("Terminal UI failed")
}
