//! Result Slot State Machine
//!
//! Each protocol has one result slot showing the latest screenshot state.
//! The slot is a plain value: exactly one visual variant at a time, mapped
//! to output by a renderer. New content replaces old content, never
//! accumulates alongside it.
//!
//! Transitions: `Placeholder -> Pending -> (Image | Missing)`, looping back
//! to `Pending` on each newly accepted request. There is no terminal state;
//! a request that never completes leaves the slot pending.

/// The single visual child of a result slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SlotView {
    /// Nothing captured yet
    Placeholder,
    /// A capture attempt is underway (spinner)
    Pending,
    /// A captured image, addressed by its locator
    Image { locator: String },
    /// The capture attempt finished without an image (de-emphasized placeholder)
    Missing,
}

impl SlotView {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Placeholder => "placeholder",
            Self::Pending => "pending",
            Self::Image { .. } => "image",
            Self::Missing => "missing",
        }
    }

    pub fn locator(&self) -> Option<&str> {
        match self {
            Self::Image { locator } => Some(locator),
            _ => None,
        }
    }
}

/// One result slot: the rendered view plus its title line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotState {
    pub view: SlotView,
    pub title: String,
}

impl SlotState {
    pub fn placeholder() -> Self {
        Self {
            view: SlotView::Placeholder,
            title: String::new(),
        }
    }

    /// A request was accepted somewhere in the room: show the spinner and
    /// drop the stale title.
    pub fn accept(&mut self) {
        self.view = SlotView::Pending;
        self.title.clear();
    }

    /// A capture attempt finished. Locator nullability is the only
    /// success/failure discriminator; the title is set either way.
    pub fn complete(&mut self, locator: Option<String>, title: String) {
        self.view = match locator {
            Some(locator) => SlotView::Image { locator },
            None => SlotView::Missing,
        };
        self.title = title;
    }
}

impl Default for SlotState {
    fn default() -> Self {
        Self::placeholder()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accept_shows_spinner_and_clears_title() {
        let mut slot = SlotState {
            view: SlotView::Image {
                locator: "/captures/old.png".to_string(),
            },
            title: "Old capture".to_string(),
        };

        slot.accept();

        assert_eq!(slot.view, SlotView::Pending);
        assert!(slot.title.is_empty());
    }

    #[test]
    fn test_complete_with_locator_shows_image() {
        let mut slot = SlotState::placeholder();
        slot.accept();
        slot.complete(Some("/captures/new.png".to_string()), "Login page".to_string());

        assert_eq!(slot.view.kind(), "image");
        assert_eq!(slot.view.locator(), Some("/captures/new.png"));
        assert_eq!(slot.title, "Login page");
    }

    #[test]
    fn test_complete_without_locator_shows_missing() {
        let mut slot = SlotState::placeholder();
        slot.accept();
        slot.complete(None, String::new());

        assert_eq!(slot.view, SlotView::Missing);
        assert!(slot.title.is_empty());
    }

    #[test]
    fn test_title_is_set_even_on_missing_result() {
        let mut slot = SlotState::placeholder();
        slot.complete(None, "Unreachable host".to_string());
        assert_eq!(slot.title, "Unreachable host");
    }

    #[test]
    fn test_repeated_complete_keeps_single_view() {
        let mut slot = SlotState::placeholder();
        slot.complete(Some("/captures/a.png".to_string()), "A".to_string());
        slot.complete(Some("/captures/b.png".to_string()), "B".to_string());

        // The second result replaces the first entirely
        assert_eq!(slot.view.locator(), Some("/captures/b.png"));
        assert_eq!(slot.title, "B");
    }

    #[test]
    fn test_new_request_loops_back_to_pending() {
        let mut slot = SlotState::placeholder();
        slot.accept();
        slot.complete(Some("/captures/a.png".to_string()), "A".to_string());
        slot.accept();

        assert_eq!(slot.view, SlotView::Pending);
        assert!(slot.title.is_empty());
    }
}
