//! Capture Provider Trait
//!
//! Interface implemented by every capture backend (local browser, remote
//! API, noop).

use async_trait::async_trait;

use crate::error::CaptureResult;

/// A rendered page: the screenshot bytes plus the document title, which
/// travels with every completed capture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedPage {
    /// PNG-encoded screenshot
    pub image: Vec<u8>,
    /// Page title, empty when the page has none or it could not be read
    pub title: String,
}

#[async_trait]
pub trait CaptureProvider: Send + Sync {
    /// Render the given URL and return the screenshot with the page title
    async fn capture_page(&self, url: &str) -> CaptureResult<CapturedPage>;

    /// Name of this provider (for logging/debugging)
    fn provider_name(&self) -> &'static str;

    /// Whether the provider is usable in the current environment
    async fn is_available(&self) -> bool;
}
