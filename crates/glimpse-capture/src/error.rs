//! Capture Error Types

use thiserror::Error;

pub type CaptureResult<T> = Result<T, CaptureError>;

#[derive(Error, Debug)]
pub enum CaptureError {
    #[error("Endpoint capture failed: {0}")]
    CaptureFailed(String),

    #[error("Invalid capture target: {0}")]
    InvalidTarget(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    HttpRequest(String),

    #[error("Browser error: {0}")]
    BrowserError(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Capture provider error: {0}")]
    ProviderError(String),
}
