use crate::errors::Result;

/// Hands a URL to whatever opens links on this platform
///
/// The caller never waits on the result beyond logging it.
pub trait LinkOpener {
    fn open(&mut self, url: &str) -> Result<()>;
}

/// Platform default handler (browser)
#[cfg(feature = "tui")]
#[derive(Debug, Default)]
pub struct SystemOpener;

#[cfg(feature = "tui")]
impl LinkOpener for SystemOpener {
    fn open(&mut self, url: &str) -> Result<()> {
        open::that_detached(url)
            .map_err(|e| crate::errors::DeckError::link_open(format!("{}: {}", url, e)))
    }
}
