//! Endpoint Capture
//!
//! Takes screenshots of monitored service endpoints. Supports a local
//! headless Chrome backend, a remote capture API, and a noop backend for
//! environments without a browser.

pub mod error;
pub mod local_provider;
pub mod noop_provider;
pub mod provider;
pub mod remote_provider;
pub mod service;

pub use error::{CaptureError, CaptureResult};
pub use local_provider::LocalCaptureProvider;
pub use noop_provider::NoopCaptureProvider;
pub use provider::{CaptureProvider, CapturedPage};
pub use remote_provider::RemoteCaptureProvider;
pub use service::{CaptureService, StoredCapture};

/// Trait for capture service operations (used for dependency injection and testing)
#[async_trait::async_trait]
pub trait CaptureServiceTrait: Send + Sync {
    /// Capture a page without storing it
    async fn capture_page(&self, url: &str) -> CaptureResult<CapturedPage>;

    /// Capture a page and write the image under the storage directory
    async fn capture_and_store(&self, url: &str, filename: &str) -> CaptureResult<StoredCapture>;

    /// Whether captures are enabled in configuration
    fn is_enabled(&self) -> bool;

    /// Name of the current provider
    fn provider_name(&self) -> &'static str;

    /// Whether the provider is usable in the current environment
    async fn is_provider_available(&self) -> bool;
}

#[async_trait::async_trait]
impl CaptureServiceTrait for CaptureService {
    async fn capture_page(&self, url: &str) -> CaptureResult<CapturedPage> {
        self.capture_page(url).await
    }

    async fn capture_and_store(&self, url: &str, filename: &str) -> CaptureResult<StoredCapture> {
        self.capture_and_store(url, filename).await
    }

    fn is_enabled(&self) -> bool {
        self.is_enabled()
    }

    fn provider_name(&self) -> &'static str {
        self.provider_name()
    }

    async fn is_provider_available(&self) -> bool {
        self.is_provider_available().await
    }
}
