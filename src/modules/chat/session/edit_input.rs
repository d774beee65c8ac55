use crate::modules::chat::StateChange;

use super::ChatSession;

impl ChatSession {
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
        self.record(StateChange::Input);
    }

    pub fn insert_char(&mut self, ch: char) {
        self.input.push(ch);
        self.record(StateChange::Input);
    }

    pub fn insert_newline(&mut self) {
        self.insert_char('\n');
    }

    pub fn backspace(&mut self) {
        if self.input.pop().is_some() {
            self.record(StateChange::Input);
        }
    }

    pub fn clear_input(&mut self) {
        if !self.input.is_empty() {
            self.input.clear();
            self.record(StateChange::Input);
        }
    }
}
