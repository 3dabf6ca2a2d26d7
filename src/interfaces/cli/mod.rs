//! CLI interface module
//!
//! Non-interactive commands: printing the catalog and generating a config file.

pub mod commands;

use crate::catalog::Catalog;
use crate::cli::Commands;
use crate::errors::DeckError;
use commands::{config_generate, list_categories};
use std::fmt;
use std::io;

#[derive(Debug)]
pub enum CliError {
    CatalogError(String),
    CommandError(String),
}

impl CliError {
    /// Format as simple output
    pub fn format_simple(&self) -> String {
        match self {
            CliError::CatalogError(msg) => format!("Catalog error: {}", msg),
            CliError::CommandError(msg) => format!("Command error: {}", msg),
        }
    }

    /// Format as colored output
    pub fn format_colored(&self) -> String {
        use colored::Colorize;
        match self {
            CliError::CatalogError(msg) => {
                format!("{} {}", "Catalog error:".yellow().bold(), msg.white())
            }
            CliError::CommandError(msg) => {
                format!("{} {}", "Command error:".red().bold(), msg.white())
            }
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for CliError {}

impl From<DeckError> for CliError {
    fn from(err: DeckError) -> Self {
        CliError::CommandError(err.to_string())
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::CommandError(format!("Failed to write output: {}", err))
    }
}

/// Run a CLI command from clap-parsed input
pub fn run_cli_command(cmd: Commands, catalog: &Catalog) -> Result<(), CliError> {
    match cmd {
        Commands::List { categories } => {
            let stdout = io::stdout();
            list_categories(&mut stdout.lock(), catalog, &categories)
        }
        Commands::ConfigGen { output, force } => config_generate(&output, force),
        #[cfg(feature = "tui")]
        Commands::Tui => Err(CliError::CommandError(
            "TUI is not a CLI command".to_string(),
        )),
    }
}
