use crate::error::Result;
use crate::modules::bookmarks::{BookmarkedCard, STORAGE_KEY};
use crate::util::database::Database;
use crate::{log_info, log_warn};

use super::BookmarkStore;

impl BookmarkStore {
    /// Read the persisted list. Unparseable data is logged and ignored.
    pub fn load(database: Database) -> Result<Self> {
        let bookmarks = match database.get_item(STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str::<Vec<BookmarkedCard>>(&raw) {
                Ok(bookmarks) => bookmarks,
                Err(e) => {
                    log_warn!("Stored bookmarks are unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            None => Vec::new(),
        };

        log_info!("Loaded {} bookmarks", bookmarks.len());

        Ok(Self { database, bookmarks })
    }
}
