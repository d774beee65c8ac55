mod load;
mod persist;
mod save;
mod save_analyzed;
mod delete;

pub use save_analyzed::fetch_analysis;

use crate::modules::archive::VerifiedConversation;
use crate::util::database::Database;

/// Saved conversations in save order, mirrored to local storage.
#[derive(Debug)]
pub struct ConversationArchive {
    database: Database,
    conversations: Vec<VerifiedConversation>,
}

impl ConversationArchive {
    /// Conversations in the order they were saved.
    pub fn conversations(&self) -> &[VerifiedConversation] {
        &self.conversations
    }

    /// Display order: most recently saved first.
    pub fn newest_first(&self) -> Vec<&VerifiedConversation> {
        let mut sorted: Vec<&VerifiedConversation> = self.conversations.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }

    pub fn get(&self, id: &str) -> Option<&VerifiedConversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }
}
