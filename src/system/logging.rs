//! Logging system initialization
//!
//! This module provides functions to initialize the tracing/logging system
//! based on application configuration.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling;

use super::panic_handler::RunMode;
use crate::config::LoggingConfig;
use crate::errors::{DeckError, Result};

/// Initialize logging system based on configuration
///
/// **Note**: This should be called only once during application startup,
/// after the configuration has been loaded.
///
/// # Returns
/// * `Ok(Some(guard))` - The guard must be kept alive for the duration of the
///   program so that non-blocking writes are flushed
/// * `Ok(None)` - Logging is disabled (console output while the TUI owns the
///   terminal)
pub fn init_logging(config: &LoggingConfig, mode: RunMode) -> Result<Option<WorkerGuard>> {
    let writer: Box<dyn std::io::Write + Send + Sync> = match config.file_path() {
        Some(log_file) if config.enable_rotation => {
            // Use rolling log files
            let path = std::path::Path::new(log_file);
            let dir = path
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .unwrap_or(std::path::Path::new("."));
            let prefix = path
                .file_name()
                .and_then(|f| f.to_str())
                .unwrap_or("searchdeck.log")
                .trim_end_matches(".log");
            let appender = rolling::Builder::new()
                .rotation(rolling::Rotation::DAILY)
                .filename_prefix(prefix)
                .filename_suffix("log")
                .max_log_files(config.max_backups.max(1) as usize)
                .build(dir)
                .map_err(|e| DeckError::config(format!("rolling log appender: {}", e)))?;
            Box::new(appender)
        }
        Some(log_file) => {
            // Non-rotating, append to file
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)?;
            Box::new(file)
        }
        // The TUI draws on the terminal; console logs would tear the screen
        None if mode == RunMode::Tui => return Ok(None),
        None => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = tracing_subscriber::EnvFilter::try_new(&config.level)
        .map_err(|e| DeckError::config(format!("invalid log level '{}': {}", config.level, e)))?;

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(config.file_path().is_none());

    let installed = if config.format == "json" {
        subscriber_builder.json().try_init()
    } else {
        subscriber_builder.try_init()
    };
    installed.map_err(|e| DeckError::config(format!("logging already initialized: {}", e)))?;

    Ok(Some(guard))
}
