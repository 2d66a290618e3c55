//! Renderer seam
//!
//! The exchange computes slot states; a renderer draws them. Implementations
//! run on the event pump and must not block.

use tracing::{error, info, warn};

use glimpse_core::{AccessProtocol, MessageCatalog, MessageKey, Notice, NoticeSeverity};

use crate::slot::{SlotState, SlotView};

pub trait SlotRenderer: Send + Sync {
    /// Draw the current state of one protocol's result slot
    fn render(&self, protocol: AccessProtocol, state: &SlotState);

    /// Surface a transient notification outside any slot
    fn notify(&self, notice: &Notice);
}

/// Renderer that writes every update to the log. The default for headless
/// deployments and the CLI.
pub struct TracingRenderer {
    catalog: MessageCatalog,
}

impl TracingRenderer {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self { catalog }
    }
}

impl Default for TracingRenderer {
    fn default() -> Self {
        Self::new(MessageCatalog::new())
    }
}

impl SlotRenderer for TracingRenderer {
    fn render(&self, protocol: AccessProtocol, state: &SlotState) {
        match &state.view {
            SlotView::Placeholder => info!(%protocol, "slot shows placeholder"),
            SlotView::Pending => info!(
                %protocol,
                label = %self.catalog.resolve(MessageKey::LoadingScreenshot),
                "slot shows pending spinner"
            ),
            SlotView::Image { locator } => {
                info!(%protocol, %locator, title = %state.title, "slot shows captured image")
            }
            SlotView::Missing => info!(
                %protocol,
                label = %self.catalog.resolve(MessageKey::ScreenshotMissing),
                title = %state.title,
                "slot shows missing placeholder"
            ),
        }
    }

    fn notify(&self, notice: &Notice) {
        match notice.severity {
            NoticeSeverity::Info => info!("{}", notice.text),
            NoticeSeverity::Warning => warn!("{}", notice.text),
            NoticeSeverity::Error => error!("{}", notice.text),
        }
    }
}
