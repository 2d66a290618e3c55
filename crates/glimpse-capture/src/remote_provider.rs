//! Remote Capture Provider
//!
//! Delegates rendering to an external capture service API.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

use crate::error::{CaptureError, CaptureResult};
use crate::provider::{CaptureProvider, CapturedPage};

pub struct RemoteCaptureProvider {
    /// Base URL of the capture service
    service_url: String,
    /// Bearer token, when the service requires one
    api_key: Option<String>,
    client: Client,
}

#[derive(Serialize)]
struct CaptureApiRequest {
    url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    full_page: Option<bool>,
}

#[derive(Deserialize)]
struct CaptureApiResponse {
    #[serde(default)]
    success: bool,
    /// Base64 encoded image
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl RemoteCaptureProvider {
    pub fn new(service_url: String, api_key: Option<String>) -> CaptureResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| {
                error!("Failed to create HTTP client: {}", e);
                CaptureError::HttpRequest(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            service_url,
            api_key,
            client,
        })
    }
}

#[async_trait]
impl CaptureProvider for RemoteCaptureProvider {
    async fn capture_page(&self, url: &str) -> CaptureResult<CapturedPage> {
        debug!(
            "Capturing {} via remote service at {}",
            url, self.service_url
        );

        if url::Url::parse(url).is_err() {
            return Err(CaptureError::InvalidTarget(format!("Invalid URL: {}", url)));
        }

        let body = CaptureApiRequest {
            url: url.to_string(),
            width: Some(1920),
            height: Some(1080),
            full_page: Some(false),
        };

        let mut request = self.client.post(&self.service_url).json(&body);
        if let Some(ref api_key) = self.api_key {
            request = request.header("Authorization", format!("Bearer {}", api_key));
        }

        let response = request.send().await.map_err(|e| {
            error!("Request to capture service failed: {}", e);
            CaptureError::HttpRequest(format!("Request failed: {}", e))
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_default();
            error!("Capture service returned {}: {}", status, error_text);
            return Err(CaptureError::HttpRequest(format!(
                "Service returned error {}: {}",
                status, error_text
            )));
        }

        let api_response: CaptureApiResponse = response.json().await.map_err(|e| {
            error!("Failed to parse capture service response: {}", e);
            CaptureError::HttpRequest(format!("Failed to parse response: {}", e))
        })?;

        if !api_response.success {
            let message = api_response
                .error
                .unwrap_or_else(|| "Unknown error".to_string());
            error!("Capture service reported failure: {}", message);
            return Err(CaptureError::ProviderError(message));
        }

        let encoded = api_response
            .image
            .ok_or_else(|| CaptureError::ProviderError("No image data in response".to_string()))?;

        use base64::Engine;
        let image = base64::engine::general_purpose::STANDARD
            .decode(&encoded)
            .map_err(|e| {
                error!("Failed to decode base64 image: {}", e);
                CaptureError::ProviderError(format!("Failed to decode image: {}", e))
            })?;

        let title = api_response.title.unwrap_or_default();

        info!(
            "Captured {} via remote service ({} bytes, title: {:?})",
            url,
            image.len(),
            title
        );

        Ok(CapturedPage { image, title })
    }

    fn provider_name(&self) -> &'static str {
        "remote-api"
    }

    async fn is_available(&self) -> bool {
        let health_url = format!("{}/health", self.service_url.trim_end_matches('/'));
        self.client
            .get(&health_url)
            .timeout(Duration::from_secs(5))
            .send()
            .await
            .map(|r| r.status().is_success())
            .unwrap_or(false)
    }
}
