//! Screenshot Exchange
//!
//! Real-time exchange of endpoint screenshots over a shared push channel.
//! Viewers submit take-screenshot requests; the hub captures the endpoint
//! and broadcasts accepted/completed events that every viewer renders into
//! per-protocol result slots.

pub mod channel;
pub mod client;
pub mod error;
pub mod handlers;
pub mod hub;
pub mod render;
pub mod slot;

pub use channel::{EventReceiver, ExchangeChannel, SubmittedRequest};
pub use client::ScreenshotExchangeClient;
pub use error::{ExchangeError, ExchangeResult};
pub use handlers::{configure_routes, ExchangeApiDoc, ExchangeState};
pub use hub::{MonitoredEndpoint, ScreenshotExchangeHub};
pub use render::{SlotRenderer, TracingRenderer};
pub use slot::{SlotState, SlotView};
