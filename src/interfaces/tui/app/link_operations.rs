//! Open / copy operations

use tracing::{debug, warn};

use super::state::App;
use crate::utils::{join_links, openable_links};

impl App {
    /// Hand every link-like value to the opener
    ///
    /// Failures are logged and skipped. Returns how many were opened.
    pub fn open_links(&mut self, values: &[String]) -> usize {
        let links = openable_links(values);
        if links.is_empty() {
            debug!("Nothing to open among {} value(s)", values.len());
            self.set_status("No links to open");
            return 0;
        }

        let mut opened = 0;
        for link in &links {
            match self.opener.open(link) {
                Ok(()) => opened += 1,
                Err(e) => warn!("Failed to open {}: {}", link, e),
            }
        }
        self.set_status(format!("Opened {} link(s)", opened));
        opened
    }

    /// Replace the clipboard with the newline-joined links
    ///
    /// The clipboard is written even when no value is a link, which empties
    /// it. Returns how many links were copied.
    pub fn copy_links(&mut self, values: &[String]) -> usize {
        let links = openable_links(values);

        match self.clipboard.set_text(&join_links(&links)) {
            Ok(()) if links.is_empty() => {
                debug!("Nothing to copy among {} value(s)", values.len());
                self.set_status("No links to copy");
                0
            }
            Ok(()) => {
                self.set_status(format!("Copied {} link(s)", links.len()));
                links.len()
            }
            Err(e) => {
                warn!("Failed to write clipboard: {}", e);
                0
            }
        }
    }
}
