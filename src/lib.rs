//! searchdeck - a terminal browser for categorized search engine links
//!
//! Browse a static catalog of web links grouped by category, filter and
//! multi-select categories, view them in sortable/filterable tables and open
//! or copy the selected links.
//!
//! # Features
//! - **tui**: Terminal user interface (default)
//!
//! # Architecture
//! - `catalog`: The read-only dataset and its sources (built-in, TOML, JSON)
//! - `interfaces`: User interfaces (CLI, TUI)
//! - `services`: Link opener and clipboard collaborators
//! - `config`: Configuration management
//! - `runtime`: Application lifecycle and execution modes
//! - `system`: Logging and panic handling

pub mod catalog;
pub mod cli;
pub mod config;
pub mod errors;
pub mod interfaces;
pub mod runtime;
pub mod services;
pub mod system;
pub mod utils;
