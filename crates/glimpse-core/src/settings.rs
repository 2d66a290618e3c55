//! Capture configuration
//!
//! All fields have defaults so a bare config section still produces a
//! working setup.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct CaptureSettings {
    /// Whether endpoint captures are enabled at all
    pub enabled: bool,
    /// Provider to use: "local", "remote" or "noop".
    /// The `GLIMPSE_CAPTURE_PROVIDER` environment variable overrides this.
    pub provider: String,
    /// Base URL of the external capture API (remote provider only)
    pub service_url: String,
    /// Directory where captured images are written
    pub storage_dir: String,
}

impl Default for CaptureSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            provider: "local".to_string(),
            service_url: String::new(),
            storage_dir: "./static".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = CaptureSettings::default();
        assert!(settings.enabled);
        assert_eq!(settings.provider, "local");
        assert!(settings.service_url.is_empty());
        assert_eq!(settings.storage_dir, "./static");
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let settings: CaptureSettings =
            serde_json::from_str(r#"{"provider":"remote","service_url":"http://cap.internal"}"#)
                .unwrap();
        assert!(settings.enabled);
        assert_eq!(settings.provider, "remote");
        assert_eq!(settings.service_url, "http://cap.internal");
        assert_eq!(settings.storage_dir, "./static");
    }
}
