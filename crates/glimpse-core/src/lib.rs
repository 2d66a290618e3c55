//! Core types shared across all Glimpse crates

pub mod events;
pub mod messages;
pub mod notice;
pub mod protocol;
pub mod settings;

// Re-export commonly used types
pub use events::{ClientMessage, ServerEvent};
pub use messages::{MessageCatalog, MessageKey};
pub use notice::{Notice, NoticeSeverity};
pub use protocol::{AccessProtocol, UnknownProtocol};
pub use settings::CaptureSettings;

// Re-export external dependencies
pub use serde;
pub use serde_json;
pub use thiserror;
