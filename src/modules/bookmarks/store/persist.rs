use crate::error::Result;
use crate::modules::bookmarks::{BookmarkedCard, STORAGE_KEY};

use super::BookmarkStore;

impl BookmarkStore {
    /// Write `next` to storage, then adopt it as the current list.
    pub(super) fn replace(&mut self, next: Vec<BookmarkedCard>) -> Result<()> {
        let raw = serde_json::to_string(&next)?;
        self.database.set_item(STORAGE_KEY, &raw)?;
        self.bookmarks = next;
        Ok(())
    }
}
