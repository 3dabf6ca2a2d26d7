//! External collaborators
//!
//! The browser never talks to the platform directly: opening a link and
//! writing the clipboard go through these traits so the UI can be driven
//! with in-memory fakes.

mod clipboard;
mod opener;

pub use clipboard::ClipboardSink;
pub use opener::LinkOpener;

#[cfg(feature = "tui")]
pub use clipboard::SystemClipboard;
#[cfg(feature = "tui")]
pub use opener::SystemOpener;
