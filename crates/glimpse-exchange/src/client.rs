//! Screenshot Exchange Client
//!
//! Bridges user-initiated capture requests and server-pushed results for the
//! supported protocols, rendering state transitions into per-protocol result
//! slots.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use glimpse_core::{
    AccessProtocol, ClientMessage, MessageCatalog, MessageKey, Notice, ServerEvent,
};

use crate::channel::ExchangeChannel;
use crate::error::{ExchangeError, ExchangeResult};
use crate::render::SlotRenderer;
use crate::slot::SlotState;

pub struct ScreenshotExchangeClient {
    /// Display name of the local user, attached to outgoing requests
    actor: String,
    channel: Arc<ExchangeChannel>,
    renderer: Arc<dyn SlotRenderer>,
    catalog: MessageCatalog,
    slots: Mutex<HashMap<AccessProtocol, SlotState>>,
}

impl ScreenshotExchangeClient {
    /// Slots for every supported protocol are seeded up front, so every
    /// inbound event finds its slot.
    pub fn new(
        actor: impl Into<String>,
        channel: Arc<ExchangeChannel>,
        renderer: Arc<dyn SlotRenderer>,
        catalog: MessageCatalog,
    ) -> Self {
        let slots = AccessProtocol::ALL
            .iter()
            .map(|protocol| (*protocol, SlotState::placeholder()))
            .collect();
        Self {
            actor: actor.into(),
            channel,
            renderer,
            catalog,
            slots: Mutex::new(slots),
        }
    }

    pub fn actor(&self) -> &str {
        &self.actor
    }

    /// Whether the exchange channel has become ready
    pub fn is_connected(&self) -> bool {
        self.channel.is_ready()
    }

    /// Ask the hub for a fresh capture of one protocol endpoint.
    ///
    /// No slot changes happen here: the pending spinner is rendered only when
    /// the hub's accepted broadcast comes back, so every viewer in the room
    /// (this one included) transitions from the same event.
    pub async fn request_screenshot(&self, protocol: AccessProtocol) -> ExchangeResult<()> {
        self.channel
            .submit(
                &self.actor,
                ClientMessage::TakeScreenshotRequest { protocol },
            )
            .await
    }

    /// Apply one server event to the slot it names and render the result
    pub async fn apply(&self, event: ServerEvent) {
        match event {
            ServerEvent::ScreenshotRequestAccepted { by_actor, protocol } => {
                self.on_accepted(&by_actor, protocol).await
            }
            ServerEvent::ScreenshotCompleted {
                protocol,
                locator,
                title,
            } => self.on_completed(protocol, locator, title).await,
        }
    }

    /// Decode and apply a raw frame. A malformed frame (including one naming
    /// an unsupported protocol) is rejected here without touching any slot,
    /// so one bad frame costs one event, not the subscription.
    pub async fn apply_frame(&self, frame: &str) -> ExchangeResult<()> {
        let event = ServerEvent::decode(frame)?;
        self.apply(event).await;
        Ok(())
    }

    async fn on_accepted(&self, by_actor: &str, protocol: AccessProtocol) {
        let notice = Notice::info(self.catalog.format(
            MessageKey::ScreenshotRequested,
            &[("actor", by_actor), ("protocol", protocol.as_str())],
        ));
        self.renderer.notify(&notice);

        let mut slots = self.slots.lock().await;
        let slot = slots.entry(protocol).or_default();
        slot.accept();
        self.renderer.render(protocol, slot);
    }

    async fn on_completed(&self, protocol: AccessProtocol, locator: Option<String>, title: String) {
        let mut slots = self.slots.lock().await;
        let slot = slots.entry(protocol).or_default();
        slot.complete(locator, title);
        self.renderer.render(protocol, slot);
    }

    /// Current state of every result slot
    pub async fn slot_states(&self) -> HashMap<AccessProtocol, SlotState> {
        self.slots.lock().await.clone()
    }

    /// Event pump: waits for channel readiness, subscribes, then applies
    /// events strictly in arrival order until the channel closes.
    ///
    /// Two rapid requests for the same protocol can interleave their accepted
    /// and completed events; arrival order wins, so a late accepted event puts
    /// the slot back to pending. Serializing per-protocol requests is the
    /// hub's call, not ours.
    pub async fn run(&self) {
        self.channel.ready().await;
        debug!(actor = %self.actor, "exchange channel ready, subscribing");
        let mut events = self.channel.subscribe();
        loop {
            match events.recv().await {
                Ok(event) => self.apply(event).await,
                Err(ExchangeError::Lagged(skipped)) => {
                    warn!(skipped, "event receiver lagged, some slot updates were missed");
                }
                Err(_) => {
                    debug!("exchange channel closed, stopping event pump");
                    break;
                }
            }
        }
    }
}
