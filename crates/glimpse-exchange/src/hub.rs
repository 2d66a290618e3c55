//! Screenshot Exchange Hub
//!
//! Server half of the exchange: consumes submitted requests, runs the
//! capture, and broadcasts the accepted/completed events every viewer in the
//! room renders from.

use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

use glimpse_capture::CaptureServiceTrait;
use glimpse_core::{AccessProtocol, ClientMessage, ServerEvent};

use crate::channel::{ExchangeChannel, SubmittedRequest};

/// The monitored service endpoint screenshots are taken of
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitoredEndpoint {
    pub host: String,
    pub port: u16,
}

impl MonitoredEndpoint {
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Capture target address for one protocol
    pub fn target_url(&self, protocol: AccessProtocol) -> String {
        format!("{}://{}:{}/", protocol.scheme(), self.host, self.port)
    }
}

pub struct ScreenshotExchangeHub {
    channel: Arc<ExchangeChannel>,
    capture: Arc<dyn CaptureServiceTrait>,
    endpoint: MonitoredEndpoint,
}

impl ScreenshotExchangeHub {
    pub fn new(
        channel: Arc<ExchangeChannel>,
        capture: Arc<dyn CaptureServiceTrait>,
        endpoint: MonitoredEndpoint,
    ) -> Self {
        Self {
            channel,
            capture,
            endpoint,
        }
    }

    /// Consume the request stream until it closes. Each request is handled to
    /// completion before the next one starts, which serializes captures for
    /// the room.
    pub async fn serve(&self, mut requests: mpsc::Receiver<SubmittedRequest>) {
        while let Some(submitted) = requests.recv().await {
            self.handle(submitted).await;
        }
        debug!("request stream closed, hub stopping");
    }

    async fn handle(&self, submitted: SubmittedRequest) {
        let SubmittedRequest { by_actor, request } = submitted;
        let ClientMessage::TakeScreenshotRequest { protocol } = request;

        info!(actor = %by_actor, %protocol, "screenshot requested");
        self.channel.publish(ServerEvent::ScreenshotRequestAccepted {
            by_actor,
            protocol,
        });

        let url = self.endpoint.target_url(protocol);
        let filename = format!("{}-{}.png", protocol, Uuid::new_v4());

        // A failed capture is a defined outcome for the room, not a dropped
        // request: the completed event goes out either way.
        let event = match self.capture.capture_and_store(&url, &filename).await {
            Ok(stored) => ServerEvent::ScreenshotCompleted {
                protocol,
                locator: Some(stored.locator),
                title: stored.title,
            },
            Err(e) => {
                warn!(%protocol, target = %url, "endpoint capture failed: {}", e);
                ServerEvent::ScreenshotCompleted {
                    protocol,
                    locator: None,
                    title: String::new(),
                }
            }
        };
        self.channel.publish(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_url_per_protocol() {
        let endpoint = MonitoredEndpoint::new("192.0.2.10", 8443);
        assert_eq!(
            endpoint.target_url(AccessProtocol::Http),
            "http://192.0.2.10:8443/"
        );
        assert_eq!(
            endpoint.target_url(AccessProtocol::Https),
            "https://192.0.2.10:8443/"
        );
    }
}
