use crate::error::Result;
use crate::modules::archive::{VerifiedConversation, STORAGE_KEY};
use crate::util::database::Database;
use crate::{log_info, log_warn};

use super::ConversationArchive;

impl ConversationArchive {
    /// Read the persisted archive. Unparseable data is logged and ignored.
    pub fn load(database: Database) -> Result<Self> {
        let conversations = match database.get_item(STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<VerifiedConversation>>(&raw) {
                Ok(conversations) => conversations,
                Err(e) => {
                    log_warn!("Stored conversations are unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        log_info!("Loaded {} verified conversations", conversations.len());

        Ok(Self {
            database,
            conversations,
        })
    }
}
