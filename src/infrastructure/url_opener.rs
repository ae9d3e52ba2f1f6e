//! Opens web view routes in the system browser.

use thiserror::Error;
use tracing::{info, warn};

#[derive(Debug, Error)]
pub enum OpenError {
    #[error("refusing to open non-http url: {0}")]
    UnsupportedScheme(String),
    #[error("failed to open url: {0}")]
    Launch(#[from] opener::OpenError),
}

pub struct UrlOpener;

impl UrlOpener {
    /// Opens `url` with the platform handler.
    ///
    /// # Errors
    ///
    /// Returns `OpenError` for non-http(s) URLs or when no handler could be launched.
    pub fn open(url: &str) -> Result<(), OpenError> {
        if !Self::is_web_url(url) {
            warn!(url, "Refusing to open url");
            return Err(OpenError::UnsupportedScheme(url.to_string()));
        }

        info!(url, "Opening url");
        opener::open(url)?;
        Ok(())
    }

    #[must_use]
    pub fn is_web_url(url: &str) -> bool {
        ["https://", "http://"].iter().any(|scheme| {
            url.get(..scheme.len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
        })
    }
}
