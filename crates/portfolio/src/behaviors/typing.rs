//! Hero typing animation: idle → running → complete, one character per tick.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TypingState {
    Idle,
    Running,
    Complete,
}

/// Text to show after a tick. `is_last` means the driving timer should be
/// cancelled now.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypingFrame {
    pub text: String,
    pub is_last: bool,
}

#[derive(Clone, Debug)]
pub struct TypingEffect {
    chars: Vec<char>,
    revealed: usize,
    state: TypingState,
}

impl Default for TypingEffect {
    fn default() -> Self {
        Self::new()
    }
}

impl TypingEffect {
    pub fn new() -> Self {
        Self {
            chars: Vec::new(),
            revealed: 0,
            state: TypingState::Idle,
        }
    }

    pub fn state(&self) -> TypingState {
        self.state
    }

    /// Capture `full_text` and begin revealing it. Returns `true` when a tick
    /// timer is needed. Only the first call has any effect.
    pub fn start(&mut self, full_text: &str) -> bool {
        if self.state != TypingState::Idle {
            return false;
        }
        self.chars = full_text.chars().collect();
        self.revealed = 0;
        if self.chars.is_empty() {
            self.state = TypingState::Complete;
            false
        } else {
            self.state = TypingState::Running;
            true
        }
    }

    pub fn tick(&mut self) -> Option<TypingFrame> {
        if self.state != TypingState::Running {
            return None;
        }
        self.revealed += 1;
        let is_last = self.revealed >= self.chars.len();
        if is_last {
            self.state = TypingState::Complete;
            log::debug!("typing effect complete");
        }
        Some(TypingFrame {
            text: self.visible_text(),
            is_last,
        })
    }

    pub fn visible_text(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_one_character_per_tick_then_stops() {
        let mut typing = TypingEffect::new();
        assert!(typing.start("Hi"));
        assert_eq!(typing.state(), TypingState::Running);

        assert_eq!(
            typing.tick(),
            Some(TypingFrame {
                text: "H".to_string(),
                is_last: false
            })
        );
        assert_eq!(
            typing.tick(),
            Some(TypingFrame {
                text: "Hi".to_string(),
                is_last: true
            })
        );
        assert_eq!(typing.state(), TypingState::Complete);
        assert_eq!(typing.tick(), None);
    }

    #[test]
    fn empty_text_needs_no_timer() {
        let mut typing = TypingEffect::new();
        assert!(!typing.start(""));
        assert_eq!(typing.state(), TypingState::Complete);
        assert_eq!(typing.tick(), None);
    }

    #[test]
    fn cannot_be_restarted() {
        let mut typing = TypingEffect::new();
        assert!(typing.start("ab"));
        assert!(!typing.start("other"));
        typing.tick();
        typing.tick();
        assert!(!typing.start("again"));
        assert_eq!(typing.visible_text(), "ab");
    }

    #[test]
    fn counts_characters_not_bytes() {
        let mut typing = TypingEffect::new();
        typing.start("né");
        assert_eq!(typing.tick().map(|frame| frame.text), Some("n".to_string()));
        assert_eq!(typing.tick().map(|frame| frame.text), Some("né".to_string()));
    }
}
