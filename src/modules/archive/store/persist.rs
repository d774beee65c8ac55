use crate::error::Result;
use crate::modules::archive::{VerifiedConversation, STORAGE_KEY};

use super::ConversationArchive;

impl ConversationArchive {
    /// Write `next` to storage, then adopt it as the current archive.
    pub(super) fn replace(&mut self, next: Vec<VerifiedConversation>) -> Result<()> {
        let raw = serde_json::to_string(&next)?;
        self.database.set_item(STORAGE_KEY, &raw)?;
        self.conversations = next;
        Ok(())
    }
}
