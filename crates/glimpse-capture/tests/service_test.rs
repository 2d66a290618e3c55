//! Service-level tests for capture storage and provider wiring

use std::sync::Arc;

use glimpse_capture::{
    CaptureError, CaptureProvider, CaptureService, CaptureServiceTrait, CapturedPage,
    NoopCaptureProvider,
};
use glimpse_core::CaptureSettings;

/// Provider double returning a fixed page
struct FixedPageProvider {
    page: CapturedPage,
}

#[async_trait::async_trait]
impl CaptureProvider for FixedPageProvider {
    async fn capture_page(&self, _url: &str) -> Result<CapturedPage, CaptureError> {
        Ok(self.page.clone())
    }

    fn provider_name(&self) -> &'static str {
        "fixed-page"
    }

    async fn is_available(&self) -> bool {
        true
    }
}

fn settings_with_storage(dir: &std::path::Path) -> CaptureSettings {
    CaptureSettings {
        storage_dir: dir.to_string_lossy().into_owned(),
        ..CaptureSettings::default()
    }
}

#[tokio::test]
async fn test_capture_and_store_writes_image_and_builds_locator() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(FixedPageProvider {
        page: CapturedPage {
            image: vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A],
            title: "Router admin".to_string(),
        },
    });
    let service = CaptureService::with_provider(settings_with_storage(dir.path()), provider);

    let stored = service
        .capture_and_store("http://192.0.2.10:80/", "http-1.png")
        .await
        .unwrap();

    assert_eq!(stored.locator, "/captures/http-1.png");
    assert_eq!(stored.title, "Router admin");
    assert_eq!(stored.path, dir.path().join("http-1.png"));

    let written = std::fs::read(&stored.path).unwrap();
    assert_eq!(written, vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);
}

#[tokio::test]
async fn test_capture_and_store_creates_nested_directories() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(FixedPageProvider {
        page: CapturedPage {
            image: vec![1, 2, 3],
            title: String::new(),
        },
    });
    let service = CaptureService::with_provider(settings_with_storage(dir.path()), provider);

    let stored = service
        .capture_and_store("https://192.0.2.10:443/", "svc-7/https-1.png")
        .await
        .unwrap();

    assert_eq!(stored.locator, "/captures/svc-7/https-1.png");
    assert!(dir.path().join("svc-7").join("https-1.png").exists());
}

#[tokio::test]
async fn test_capture_failure_propagates_and_stores_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let service = CaptureService::with_provider(
        settings_with_storage(dir.path()),
        Arc::new(NoopCaptureProvider::new()),
    );

    let result = service
        .capture_and_store("http://192.0.2.10:80/", "http-1.png")
        .await;

    assert!(matches!(result, Err(CaptureError::CaptureFailed(_))));
    assert!(!dir.path().join("http-1.png").exists());
}

#[tokio::test]
async fn test_service_reflects_settings_and_provider() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = settings_with_storage(dir.path());
    settings.enabled = false;
    let service =
        CaptureService::with_provider(settings, Arc::new(NoopCaptureProvider::new()));

    assert!(!service.is_enabled());
    assert_eq!(service.provider_name(), "noop");
    assert!(service.is_provider_available().await);
}

#[tokio::test]
async fn test_trait_object_dispatch() {
    let dir = tempfile::tempdir().unwrap();
    let provider = Arc::new(FixedPageProvider {
        page: CapturedPage {
            image: vec![9, 9, 9],
            title: "Printer status".to_string(),
        },
    });
    let service: Arc<dyn CaptureServiceTrait> = Arc::new(CaptureService::with_provider(
        settings_with_storage(dir.path()),
        provider,
    ));

    let page = service.capture_page("http://192.0.2.7:80/").await.unwrap();
    assert_eq!(page.title, "Printer status");
    assert_eq!(service.provider_name(), "fixed-page");
}
