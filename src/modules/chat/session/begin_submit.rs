use crate::log_info;
use crate::modules::chat::{Message, StateChange};

use super::ChatSession;

impl ChatSession {
    /// Move the input into the log and enter the loading state.
    ///
    /// Returns the history payload for the query endpoint: the content of
    /// every message already in the log followed by the new question.
    /// Returns `None` (and changes nothing) when the input is blank or a
    /// query is already in flight.
    pub fn begin_submit(&mut self) -> Option<Vec<String>> {
        if self.input.trim().is_empty() || self.loading {
            return None;
        }

        let question = std::mem::take(&mut self.input);

        let mut history: Vec<String> = self.messages.iter().map(|m| m.content.clone()).collect();
        history.push(question.clone());

        log_info!("Submitting question ({} turns of history)", history.len());

        self.messages.push(Message::user(question));
        self.loading = true;

        self.record(StateChange::Messages);
        self.record(StateChange::Input);
        self.record(StateChange::Loading);

        Some(history)
    }
}
