//! Transient user-facing notifications

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NoticeSeverity {
    Info,
    Warning,
    Error,
}

impl NoticeSeverity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }
}

/// A toast-style notification shown outside any result slot. Delivery and
/// auto-dismissal are the renderer's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notice {
    pub severity: NoticeSeverity,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

impl Notice {
    pub fn new(severity: NoticeSeverity, text: impl Into<String>) -> Self {
        Self {
            severity,
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    pub fn info(text: impl Into<String>) -> Self {
        Self::new(NoticeSeverity::Info, text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(NoticeSeverity::Warning, text)
    }
}
