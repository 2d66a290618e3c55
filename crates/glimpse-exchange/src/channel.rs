//! Exchange Channel
//!
//! The shared push channel of one service room. Requests from viewers flow
//! up over a bounded queue; server events fan out to every subscriber.
//!
//! The channel is injected into client and hub explicitly, and it exposes an
//! explicit readiness gate: transports mark it ready once the underlying
//! connection is up. A request submitted before that point waits for
//! readiness instead of failing, so nothing sent early is lost. If the
//! channel never becomes ready the sender simply stays parked, which leaves
//! the feature inert rather than broken.

use std::sync::Arc;
use tokio::sync::{broadcast, mpsc, watch};
use tracing::{debug, warn};

use glimpse_core::{ClientMessage, ServerEvent};

use crate::error::{ExchangeError, ExchangeResult};

/// A request as the hub sees it: the wire message plus the identity the
/// transport attached at submission time. The wire payload itself carries
/// only the protocol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmittedRequest {
    pub by_actor: String,
    pub request: ClientMessage,
}

pub struct ExchangeChannel {
    requests: mpsc::Sender<SubmittedRequest>,
    events: broadcast::Sender<ServerEvent>,
    ready_tx: watch::Sender<bool>,
    ready_rx: watch::Receiver<bool>,
}

impl ExchangeChannel {
    /// Create a channel. Returns the shared handle and the request stream
    /// the hub consumes. The channel starts not-ready.
    pub fn create(buffer: usize) -> (Arc<ExchangeChannel>, mpsc::Receiver<SubmittedRequest>) {
        let (requests, request_rx) = mpsc::channel(buffer);
        let (events, _) = broadcast::channel(buffer);
        let (ready_tx, ready_rx) = watch::channel(false);
        let channel = Arc::new(ExchangeChannel {
            requests,
            events,
            ready_tx,
            ready_rx,
        });
        (channel, request_rx)
    }

    /// Mark the underlying connection as up. Unblocks every pending
    /// `ready()` and `submit()` call.
    pub fn mark_ready(&self) {
        debug!("exchange channel marked ready");
        let _ = self.ready_tx.send(true);
    }

    pub fn is_ready(&self) -> bool {
        *self.ready_rx.borrow()
    }

    /// Resolves once `mark_ready` has been called. Never fails: the readiness
    /// sender lives as long as the channel itself.
    pub async fn ready(&self) {
        let mut ready = self.ready_rx.clone();
        let _ = ready.wait_for(|up| *up).await;
    }

    /// Submit a request on behalf of an actor. Waits for readiness first, so
    /// a request issued before the channel is up is delivered once it is.
    pub async fn submit(&self, by_actor: &str, request: ClientMessage) -> ExchangeResult<()> {
        self.ready().await;
        self.requests
            .send(SubmittedRequest {
                by_actor: by_actor.to_string(),
                request,
            })
            .await
            .map_err(|e| ExchangeError::SubmitFailed(e.to_string()))
    }

    /// Broadcast a server event to every subscriber. Returns how many
    /// subscribers received it; an empty room is logged, not an error.
    pub fn publish(&self, event: ServerEvent) -> usize {
        if self.events.receiver_count() == 0 {
            warn!(?event, "no subscribers on exchange channel, event dropped");
            return 0;
        }
        match self.events.send(event) {
            Ok(delivered) => delivered,
            Err(e) => {
                warn!("failed to broadcast exchange event: {}", e);
                0
            }
        }
    }

    pub fn subscribe(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.events.subscribe(),
        }
    }

    /// How many subscribers are currently listening for events
    pub fn subscriber_count(&self) -> usize {
        self.events.receiver_count()
    }
}

/// Wrapper mapping broadcast receive errors to exchange errors
pub struct EventReceiver {
    receiver: broadcast::Receiver<ServerEvent>,
}

impl EventReceiver {
    pub async fn recv(&mut self) -> ExchangeResult<ServerEvent> {
        self.receiver.recv().await.map_err(|e| match e {
            broadcast::error::RecvError::Closed => ExchangeError::ChannelClosed,
            broadcast::error::RecvError::Lagged(skipped) => ExchangeError::Lagged(skipped),
        })
    }
}
