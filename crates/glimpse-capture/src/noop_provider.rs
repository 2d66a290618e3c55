//! No-op Capture Provider
//!
//! For environments where captures are not wanted or no browser is present
//! (CI, minimal containers).

use async_trait::async_trait;
use tracing::debug;

use crate::error::{CaptureError, CaptureResult};
use crate::provider::{CaptureProvider, CapturedPage};

/// Provider that never produces an image. Every capture attempt reports a
/// failure, which downstream turns into the "missing" outcome.
///
/// Enable via environment variable: `GLIMPSE_CAPTURE_PROVIDER=noop`
pub struct NoopCaptureProvider;

impl NoopCaptureProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoopCaptureProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptureProvider for NoopCaptureProvider {
    async fn capture_page(&self, url: &str) -> CaptureResult<CapturedPage> {
        debug!("NoopCaptureProvider: skipping capture of {} (noop mode)", url);
        Err(CaptureError::CaptureFailed(
            "Capture provider is disabled (noop mode). Set GLIMPSE_CAPTURE_PROVIDER to 'local' or 'remote' to enable.".to_string()
        ))
    }

    fn provider_name(&self) -> &'static str {
        "noop"
    }

    async fn is_available(&self) -> bool {
        true
    }
}
