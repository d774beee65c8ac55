use crate::modules::chat::Message;

use super::ChatSession;

impl ChatSession {
    pub fn new() -> Self {
        Self {
            messages: vec![Message::greeting()],
            input: String::new(),
            loading: false,
            changes: Vec::new(),
        }
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
