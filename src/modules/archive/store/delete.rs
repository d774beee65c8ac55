use crate::error::Result;
use crate::log_info;

use super::ConversationArchive;

impl ConversationArchive {
    /// Remove the conversation with `id`. Returns whether one was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool> {
        if self.get(id).is_none() {
            return Ok(false);
        }

        let next = self
            .conversations
            .iter()
            .filter(|c| c.id != id)
            .cloned()
            .collect();
        self.replace(next)?;

        log_info!("Deleted conversation {}, {} remain", id, self.conversations.len());
        Ok(true)
    }
}
