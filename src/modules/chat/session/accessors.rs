use crate::modules::chat::{without_greeting, KnowledgeCard, Message};

use super::ChatSession;

impl ChatSession {
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True once anything beyond the greeting has been said.
    pub fn can_save(&self) -> bool {
        self.messages.len() > 1
    }

    pub fn transcript(&self) -> Vec<Message> {
        without_greeting(&self.messages)
    }

    /// Every knowledge card in the log, oldest answer first.
    pub fn cards(&self) -> Vec<&KnowledgeCard> {
        self.messages.iter().flat_map(|m| m.cards()).collect()
    }
}
