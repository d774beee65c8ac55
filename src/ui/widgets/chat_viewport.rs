use crate::modules::chat::{ChatSession, StateChange, StateObserver};

/// Scroll position of the chat log. Sticks to the bottom until the user
/// scrolls up, and snaps back whenever the log or loading state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatViewport {
    offset: u16,
    follow_tail: bool,
}

impl ChatViewport {
    pub fn new() -> Self {
        Self {
            offset: 0,
            follow_tail: true,
        }
    }

    pub fn is_following(&self) -> bool {
        self.follow_tail
    }

    pub fn scroll_up(&mut self, rows: u16) {
        self.follow_tail = false;
        self.offset = self.offset.saturating_sub(rows);
    }

    pub fn scroll_down(&mut self, rows: u16) {
        self.offset = self.offset.saturating_add(rows);
    }

    /// Clamp against the rendered content and return the row to start at.
    pub fn resolve(&mut self, content_rows: u16, visible_rows: u16) -> u16 {
        let max = content_rows.saturating_sub(visible_rows);
        if self.follow_tail || self.offset >= max {
            self.offset = max;
            self.follow_tail = true;
        }
        self.offset
    }
}

impl Default for ChatViewport {
    fn default() -> Self {
        Self::new()
    }
}

impl StateObserver for ChatViewport {
    fn observe(&mut self, change: StateChange, _session: &ChatSession) {
        if matches!(change, StateChange::Messages | StateChange::Loading) {
            self.follow_tail = true;
        }
    }
}
