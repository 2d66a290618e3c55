//! Capture Service
//!
//! Resolves the configured provider and manages image storage.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tracing::{debug, error, info, warn};

use glimpse_core::CaptureSettings;

use crate::error::{CaptureError, CaptureResult};
use crate::local_provider::LocalCaptureProvider;
use crate::noop_provider::NoopCaptureProvider;
use crate::provider::{CaptureProvider, CapturedPage};
use crate::remote_provider::RemoteCaptureProvider;

/// A capture written to storage, addressed by its public locator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCapture {
    /// Address under which the image is served
    pub locator: String,
    /// Filesystem path of the stored image
    pub path: PathBuf,
    /// Title of the captured page
    pub title: String,
}

/// Capture service owning the provider and storage configuration
pub struct CaptureService {
    settings: CaptureSettings,
    provider: Arc<dyn CaptureProvider>,
}

impl CaptureService {
    /// Create a capture service from settings.
    ///
    /// Provider selection priority:
    /// 1. Environment variable `GLIMPSE_CAPTURE_PROVIDER` (values: "noop", "local", "remote")
    /// 2. `capture.provider` in settings
    /// 3. Default to "local" (headless Chrome)
    pub fn from_settings(settings: CaptureSettings) -> CaptureResult<Self> {
        let env_provider = std::env::var("GLIMPSE_CAPTURE_PROVIDER").ok();

        let provider: Arc<dyn CaptureProvider> = match env_provider.as_deref() {
            Some("noop") | Some("disabled") | Some("none") => {
                info!(
                    "Using noop capture provider (GLIMPSE_CAPTURE_PROVIDER={}). Captures are disabled.",
                    env_provider.as_deref().unwrap_or("noop")
                );
                Arc::new(NoopCaptureProvider::new())
            }
            Some("remote") => {
                if settings.service_url.is_empty() {
                    return Err(CaptureError::Configuration(
                        "GLIMPSE_CAPTURE_PROVIDER=remote but capture.service_url is not configured"
                            .to_string(),
                    ));
                }
                info!(
                    "Using remote capture provider at {} (from GLIMPSE_CAPTURE_PROVIDER)",
                    settings.service_url
                );
                Arc::new(RemoteCaptureProvider::new(
                    settings.service_url.clone(),
                    None,
                )?)
            }
            Some("local") => {
                info!("Using local headless Chrome capture provider (from GLIMPSE_CAPTURE_PROVIDER)");
                Arc::new(LocalCaptureProvider::new())
            }
            Some(unknown) => {
                warn!(
                    "Unknown GLIMPSE_CAPTURE_PROVIDER value '{}', falling back to settings",
                    unknown
                );
                Self::provider_from_settings(&settings)?
            }
            None => Self::provider_from_settings(&settings)?,
        };

        Ok(Self { settings, provider })
    }

    fn provider_from_settings(
        settings: &CaptureSettings,
    ) -> CaptureResult<Arc<dyn CaptureProvider>> {
        match settings.provider.as_str() {
            "noop" => {
                info!("Using noop capture provider (from settings)");
                Ok(Arc::new(NoopCaptureProvider::new()))
            }
            "remote" if !settings.service_url.is_empty() => {
                info!("Using remote capture provider at {}", settings.service_url);
                Ok(Arc::new(RemoteCaptureProvider::new(
                    settings.service_url.clone(),
                    None,
                )?))
            }
            _ => {
                info!("Using local headless Chrome capture provider");
                Ok(Arc::new(LocalCaptureProvider::new()))
            }
        }
    }

    /// Create a capture service with an explicit provider (useful for testing)
    pub fn with_provider(settings: CaptureSettings, provider: Arc<dyn CaptureProvider>) -> Self {
        Self { settings, provider }
    }

    pub fn is_enabled(&self) -> bool {
        self.settings.enabled
    }

    pub fn provider_name(&self) -> &'static str {
        self.provider.provider_name()
    }

    pub async fn is_provider_available(&self) -> bool {
        self.provider.is_available().await
    }

    /// Capture a page without storing it
    pub async fn capture_page(&self, url: &str) -> CaptureResult<CapturedPage> {
        debug!("Capturing page at {}", url);
        self.provider.capture_page(url).await
    }

    /// Capture a page and write the image under the storage directory.
    /// `filename` may contain subdirectories; they are created as needed.
    pub async fn capture_and_store(&self, url: &str, filename: &str) -> CaptureResult<StoredCapture> {
        debug!("Capturing {} and storing as {}", url, filename);

        let page = self.provider.capture_page(url).await?;

        let path = Path::new(&self.settings.storage_dir).join(filename);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                error!("Failed to create capture directory: {}", e);
                CaptureError::Io(e)
            })?;
        }

        fs::write(&path, &page.image).await.map_err(|e| {
            error!("Failed to write capture to {}: {}", path.display(), e);
            CaptureError::Io(e)
        })?;

        info!(
            "Capture stored at {} ({} bytes)",
            path.display(),
            page.image.len()
        );

        Ok(StoredCapture {
            locator: format!("/captures/{}", filename),
            path,
            title: page.title,
        })
    }
}
