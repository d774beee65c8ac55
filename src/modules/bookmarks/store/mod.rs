mod load;
mod persist;
mod find_question_for_card;
mod toggle;
mod grouped;

pub use find_question_for_card::find_question_for_card;

use crate::modules::bookmarks::{synthetic_key, BookmarkedCard};
use crate::modules::chat::KnowledgeCard;
use crate::util::database::Database;

/// In-memory bookmark list mirrored to local storage on every change.
#[derive(Debug)]
pub struct BookmarkStore {
    database: Database,
    bookmarks: Vec<BookmarkedCard>,
}

impl BookmarkStore {
    pub fn bookmarks(&self) -> &[BookmarkedCard] {
        &self.bookmarks
    }

    pub fn len(&self) -> usize {
        self.bookmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookmarks.is_empty()
    }

    pub fn is_bookmarked(&self, card: &KnowledgeCard) -> bool {
        let key = synthetic_key(card);
        self.bookmarks.iter().any(|b| b.key() == key)
    }
}
