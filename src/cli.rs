//! Command-line interface definitions using clap
//!
//! This module defines the CLI structure for searchdeck using clap's derive macros.

use clap::{Parser, Subcommand};

/// searchdeck - browse a catalog of search engine links
#[derive(Parser, Debug)]
#[command(name = "searchdeck")]
#[command(version)]
#[command(about = "Browse, filter and open categorized search engine links", long_about = None)]
pub struct Cli {
    /// Configuration file (default: searchdeck.toml, optional)
    #[arg(long, short = 'c', global = true)]
    pub config: Option<String>,

    /// Catalog file (TOML or JSON), overrides catalog.path
    #[arg(long, global = true)]
    pub catalog: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Start TUI mode (default)
    #[cfg(feature = "tui")]
    Tui,

    /// List categories, or the links of the given categories
    List {
        /// Category names (case-sensitive)
        categories: Vec<String>,
    },

    /// Generate a sample configuration file
    ConfigGen {
        /// Output file path
        #[arg(default_value = "searchdeck.example.toml")]
        output: String,

        /// Overwrite an existing file
        #[arg(long, short = 'f')]
        force: bool,
    },
}
