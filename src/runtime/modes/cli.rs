//! CLI mode
//!
//! This module contains the CLI mode startup logic.
//! It delegates to the actual CLI implementation.

use crate::cli::Commands;
use crate::interfaces::cli::CliError;
use crate::runtime::lifetime::startup::StartupContext;

/// Run one CLI command against the loaded catalog
pub fn run_cli(cmd: Commands, ctx: &StartupContext) -> Result<(), CliError> {
    crate::interfaces::cli::run_cli_command(cmd, &ctx.catalog)
}
