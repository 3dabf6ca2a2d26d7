//! Panic handler module
//!
//! Every panic is appended to crash.log. In TUI mode the terminal is put back
//! into cooked mode first so the short message on stderr is readable.

use chrono::Utc;
use std::backtrace::Backtrace;
use std::fs::OpenOptions;
use std::io::Write;
use std::panic::{self, PanicHookInfo};
use std::path::Path;

/// Crash report file
pub const CRASH_LOG: &str = "crash.log";

const RULE: &str = "==========================================";

/// Running mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Cli,
    Tui,
}

/// One panic, ready to be written out
struct CrashReport {
    timestamp: String,
    message: String,
    location: String,
    backtrace: String,
}

impl CrashReport {
    fn capture(info: &PanicHookInfo<'_>) -> Self {
        let payload = info.payload();
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "Unknown panic".to_string());

        let location = info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        Self {
            timestamp: Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string(),
            message,
            location,
            backtrace: format!("{:?}", Backtrace::force_capture()),
        }
    }

    fn render(&self) -> String {
        format!(
            "{RULE}\nCrash Report - {}\n{RULE}\nMessage: {}\nLocation: {}\n\nBacktrace:\n{}\n{RULE}\n\n",
            self.timestamp, self.message, self.location, self.backtrace
        )
    }

    fn append_to(&self, path: &Path) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(self.render().as_bytes())
    }
}

/// Install custom panic hook
pub fn install_panic_hook(mode: RunMode) {
    panic::set_hook(Box::new(move |info| {
        if mode == RunMode::Tui {
            restore_terminal();
        }

        let report = CrashReport::capture(info);
        if let Err(e) = report.append_to(Path::new(CRASH_LOG)) {
            eprintln!("Failed to write crash log: {}", e);
        }

        eprintln!();
        eprintln!("searchdeck panicked: {}", report.message);
        eprintln!("Details saved to {}", CRASH_LOG);
        eprintln!();
    }));
}

#[cfg(feature = "tui")]
fn restore_terminal() {
    use ratatui::crossterm::{
        execute,
        terminal::{LeaveAlternateScreen, disable_raw_mode},
    };

    let _ = disable_raw_mode();
    let _ = execute!(std::io::stderr(), LeaveAlternateScreen);
}

#[cfg(not(feature = "tui"))]
fn restore_terminal() {}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> CrashReport {
        CrashReport {
            timestamp: "2026-01-01 00:00:00 UTC".to_string(),
            message: "index out of bounds".to_string(),
            location: "src/main.rs:1:1".to_string(),
            backtrace: "<backtrace>".to_string(),
        }
    }

    #[test]
    fn test_report_layout() {
        let text = report().render();
        assert!(text.starts_with(RULE));
        assert!(text.contains("Crash Report - 2026-01-01 00:00:00 UTC"));
        assert!(text.contains("Message: index out of bounds"));
        assert!(text.contains("Location: src/main.rs:1:1"));
        assert!(text.contains("Backtrace:\n<backtrace>"));
    }

    #[test]
    fn test_reports_are_appended() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join(CRASH_LOG);
        report().append_to(&path).unwrap();
        report().append_to(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.matches("Crash Report").count(), 2);
    }
}
