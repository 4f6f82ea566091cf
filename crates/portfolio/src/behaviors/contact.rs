//! Client-only contact form acknowledgment. Nothing is sent anywhere.

use portfolio_scene::{Child, Element};

pub const SUCCESS_TEXT: &str = "✓ Message Sent!";
pub const SUCCESS_BACKGROUND: &str = "linear-gradient(135deg, #10b981 0%, #059669 100%)";

/// Content the submit button shows while acknowledged.
pub fn success_content() -> Vec<Child> {
    vec![Element::new("span").text(SUCCESS_TEXT).into()]
}

/// Submit button content and background captured before acknowledging.
#[derive(Clone, Debug, PartialEq)]
pub struct SavedButton<C> {
    pub content: C,
    pub background: Option<String>,
}

/// `C` is whatever the host uses to snapshot button content: markup in the
/// headless page, an `innerHTML` string in the browser.
#[derive(Clone, Debug, PartialEq)]
pub enum ContactAck<C> {
    Idle,
    Acknowledged(SavedButton<C>),
}

impl<C> Default for ContactAck<C> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<C> ContactAck<C> {
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, Self::Acknowledged(_))
    }

    /// Enter the acknowledged state. Returns `false` when already
    /// acknowledged; the first snapshot is kept so the reset restores the
    /// button's real original content.
    pub fn submit(&mut self, saved: SavedButton<C>) -> bool {
        if self.is_acknowledged() {
            return false;
        }
        *self = Self::Acknowledged(saved);
        true
    }

    /// Leave the acknowledged state, handing back what must be restored.
    pub fn reset(&mut self) -> Option<SavedButton<C>> {
        match std::mem::take(self) {
            Self::Acknowledged(saved) => Some(saved),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn saved(content: &str) -> SavedButton<String> {
        SavedButton {
            content: content.to_string(),
            background: None,
        }
    }

    #[test]
    fn submit_then_reset_restores_original() {
        let mut ack = ContactAck::default();
        assert!(ack.submit(saved("<span>Send</span>")));
        assert!(ack.is_acknowledged());
        assert_eq!(ack.reset(), Some(saved("<span>Send</span>")));
        assert_eq!(ack, ContactAck::Idle);
    }

    #[test]
    fn resubmit_while_acknowledged_keeps_first_snapshot() {
        let mut ack = ContactAck::default();
        ack.submit(saved("<span>Send</span>"));
        assert!(!ack.submit(saved("<span>✓ Message Sent!</span>")));
        assert_eq!(ack.reset().map(|s| s.content), Some("<span>Send</span>".to_string()));
    }

    #[test]
    fn reset_when_idle_is_noop() {
        let mut ack = ContactAck::<String>::default();
        assert_eq!(ack.reset(), None);
    }

    #[test]
    fn success_content_is_single_span() {
        let content = success_content();
        assert_eq!(content.len(), 1);
        match &content[0] {
            Child::Element(span) => assert_eq!(span.text_content(), SUCCESS_TEXT),
            Child::Text(_) => panic!("expected span"),
        }
    }
}
