use crate::error::Result;
use crate::log_info;
use crate::modules::bookmarks::{synthetic_key, BookmarkedCard};
use crate::modules::chat::{KnowledgeCard, Message};

use super::{find_question_for_card, BookmarkStore};

impl BookmarkStore {
    /// Star or un-star `card`, stamping new bookmarks with the current time.
    ///
    /// Returns whether the card is bookmarked afterwards.
    pub fn toggle(&mut self, card: &KnowledgeCard, messages: &[Message]) -> Result<bool> {
        self.toggle_at(card, messages, chrono::Utc::now().timestamp_millis())
    }

    pub fn toggle_at(
        &mut self,
        card: &KnowledgeCard,
        messages: &[Message],
        timestamp: i64,
    ) -> Result<bool> {
        let key = synthetic_key(card);

        if self.is_bookmarked(card) {
            let next = self
                .bookmarks
                .iter()
                .filter(|b| b.key() != key)
                .cloned()
                .collect();
            self.replace(next)?;
            log_info!("Removed bookmark {}", key);
            return Ok(false);
        }

        let question = find_question_for_card(card, messages);
        log_info!("Bookmarked {} under question {:?}", key, question);

        let mut next = self.bookmarks.clone();
        next.push(BookmarkedCard {
            card: card.clone(),
            timestamp,
            question,
        });
        self.replace(next)?;
        Ok(true)
    }
}
