//! Local Capture Provider using Headless Chrome

use async_trait::async_trait;
use headless_chrome::protocol::cdp::Page::CaptureScreenshotFormatOption;
use headless_chrome::{Browser, LaunchOptions};
use std::time::Duration;
use tracing::{debug, error, info, warn};

use crate::error::{CaptureError, CaptureResult};
use crate::provider::{CaptureProvider, CapturedPage};

/// Renders endpoints in a locally launched headless Chrome
pub struct LocalCaptureProvider {
    /// Page load timeout in seconds
    timeout_seconds: u64,
    viewport_width: u32,
    viewport_height: u32,
}

impl LocalCaptureProvider {
    pub fn new() -> Self {
        Self {
            timeout_seconds: 30,
            viewport_width: 1920,
            viewport_height: 1080,
        }
    }

    pub fn with_config(timeout_seconds: u64, viewport_width: u32, viewport_height: u32) -> Self {
        Self {
            timeout_seconds,
            viewport_width,
            viewport_height,
        }
    }

    fn launch_options(&self) -> CaptureResult<LaunchOptions<'static>> {
        LaunchOptions::default_builder()
            .headless(true)
            .sandbox(false)
            .idle_browser_timeout(Duration::from_secs(self.timeout_seconds))
            .window_size(Some((self.viewport_width, self.viewport_height)))
            .build()
            .map_err(|e| CaptureError::BrowserError(format!("Failed to build options: {}", e)))
    }
}

impl Default for LocalCaptureProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs in a blocking task: headless_chrome is a synchronous API
fn render_page(options: LaunchOptions<'static>, url: &str) -> CaptureResult<CapturedPage> {
    let browser = Browser::new(options)
        .map_err(|e| CaptureError::BrowserError(format!("Failed to launch browser: {}", e)))?;

    let tab = browser
        .new_tab()
        .map_err(|e| CaptureError::BrowserError(format!("Failed to create tab: {}", e)))?;

    tab.navigate_to(url)
        .map_err(|e| CaptureError::BrowserError(format!("Failed to navigate: {}", e)))?;
    tab.wait_until_navigated()
        .map_err(|e| CaptureError::BrowserError(format!("Navigation timeout: {}", e)))?;

    // Title read failures degrade to an empty title rather than losing the capture
    let title = match tab.get_title() {
        Ok(title) => title,
        Err(e) => {
            warn!("Could not read page title of {}: {}", url, e);
            String::new()
        }
    };

    let image = tab
        .capture_screenshot(
            CaptureScreenshotFormatOption::Png,
            None, // quality, JPEG only
            None, // clip region
            true, // capture beyond viewport
        )
        .map_err(|e| CaptureError::BrowserError(format!("Screenshot capture failed: {}", e)))?;

    Ok(CapturedPage { image, title })
}

#[async_trait]
impl CaptureProvider for LocalCaptureProvider {
    async fn capture_page(&self, url: &str) -> CaptureResult<CapturedPage> {
        debug!("Capturing {} with local headless Chrome", url);

        if url::Url::parse(url).is_err() {
            return Err(CaptureError::InvalidTarget(format!("Invalid URL: {}", url)));
        }

        let options = self.launch_options()?;
        let target = url.to_string();

        let page = tokio::task::spawn_blocking(move || render_page(options, &target))
            .await
            .map_err(|e| {
                error!("Capture task panicked: {}", e);
                CaptureError::CaptureFailed(format!("Task execution failed: {}", e))
            })??;

        info!(
            "Captured {} ({} bytes, title: {:?})",
            url,
            page.image.len(),
            page.title
        );
        Ok(page)
    }

    fn provider_name(&self) -> &'static str {
        "local-headless-chrome"
    }

    async fn is_available(&self) -> bool {
        // Launching the browser is the only reliable probe for Chrome
        tokio::task::spawn_blocking(|| {
            let options = LaunchOptions::default_builder()
                .headless(true)
                .sandbox(false)
                .idle_browser_timeout(Duration::from_secs(5))
                .build();

            match options {
                Ok(opts) => Browser::new(opts).is_ok(),
                Err(_) => false,
            }
        })
        .await
        .unwrap_or(false)
    }
}
