// src/modules/bookmarks/mod.rs
//! Starred knowledge cards, grouped by the question that produced them

pub mod store;

pub use store::{find_question_for_card, BookmarkStore};

use serde::{Deserialize, Serialize};

use crate::modules::chat::KnowledgeCard;

/// Local storage key for the bookmark list.
pub const STORAGE_KEY: &str = "bookmarks";

/// Question label for cards whose originating question can't be found.
pub const OTHER_QUESTION: &str = "Other";

/// Identity of a card for bookmarking purposes.
pub fn synthetic_key(card: &KnowledgeCard) -> String {
    format!("{}-{}", card.summary, card.source)
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookmarkedCard {
    #[serde(flatten)]
    pub card: KnowledgeCard,
    /// Capture time, epoch milliseconds
    pub timestamp: i64,
    #[serde(default)]
    pub question: String,
}

impl BookmarkedCard {
    pub fn key(&self) -> String {
        synthetic_key(&self.card)
    }

    /// Question this bookmark is filed under.
    pub fn group_label(&self) -> &str {
        if self.question.is_empty() {
            OTHER_QUESTION
        } else {
            &self.question
        }
    }
}

/// Bookmarks sharing an originating question, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkGroup {
    pub question: String,
    pub bookmarks: Vec<BookmarkedCard>,
}

impl BookmarkGroup {
    pub fn latest_timestamp(&self) -> i64 {
        self.bookmarks.iter().map(|b| b.timestamp).max().unwrap_or(i64::MIN)
    }
}
