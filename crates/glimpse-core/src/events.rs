//! Wire contract for the screenshot exchange
//!
//! Frames are JSON objects tagged by an `event` field. Direction is relative
//! to the viewer: `ClientMessage` goes up to the hub, `ServerEvent` is pushed
//! down to every viewer in the room.
//!
//! A frame naming a protocol outside the supported set fails to decode; the
//! consumer is expected to log and skip that one frame rather than tear down
//! its subscription.

use serde::{Deserialize, Serialize};

use crate::protocol::AccessProtocol;

/// Messages sent from a viewer to the exchange hub
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ClientMessage {
    /// Ask the hub to capture a fresh screenshot of one protocol endpoint
    TakeScreenshotRequest { protocol: AccessProtocol },
}

impl ClientMessage {
    pub fn protocol(&self) -> AccessProtocol {
        match self {
            Self::TakeScreenshotRequest { protocol } => *protocol,
        }
    }

    pub fn decode(frame: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(frame)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Events pushed from the hub to every viewer in the room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Some viewer's request was accepted; a capture attempt is underway
    ScreenshotRequestAccepted {
        by_actor: String,
        protocol: AccessProtocol,
    },
    /// The capture attempt finished. `locator` is the address of the stored
    /// image, or `None` when no image could be produced.
    ScreenshotCompleted {
        protocol: AccessProtocol,
        locator: Option<String>,
        title: String,
    },
}

impl ServerEvent {
    pub fn protocol(&self) -> AccessProtocol {
        match self {
            Self::ScreenshotRequestAccepted { protocol, .. } => *protocol,
            Self::ScreenshotCompleted { protocol, .. } => *protocol,
        }
    }

    pub fn decode(frame: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(frame)
    }

    pub fn encode(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}
