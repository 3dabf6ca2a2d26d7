//! CLI command implementations
//!
//! This module re-exports all CLI command functions.

mod config_gen;
mod list;

pub use config_gen::config_generate;
pub use list::list_categories;
