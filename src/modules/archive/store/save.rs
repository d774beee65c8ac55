use crate::error::{Result, WikiRagError};
use crate::log_info;
use crate::modules::archive::{ConversationAnalysis, VerifiedConversation};
use crate::modules::chat::{without_greeting, Message};

use super::ConversationArchive;

impl ConversationArchive {
    pub fn save(
        &mut self,
        title: &str,
        messages: &[Message],
        analysis: Option<ConversationAnalysis>,
    ) -> Result<&VerifiedConversation> {
        self.save_at(title, messages, analysis, chrono::Utc::now().timestamp_millis())
    }

    /// Archive `messages` (greeting dropped) under `title`.
    ///
    /// The id is the save time in epoch millis, bumped past every existing
    /// entry so ids and timestamps strictly increase.
    pub fn save_at(
        &mut self,
        title: &str,
        messages: &[Message],
        analysis: Option<ConversationAnalysis>,
        now_millis: i64,
    ) -> Result<&VerifiedConversation> {
        let timestamp = match self.conversations.iter().map(|c| c.timestamp).max() {
            Some(latest) if latest >= now_millis => latest + 1,
            _ => now_millis,
        };

        let conversation = VerifiedConversation {
            id: timestamp.to_string(),
            title: title.to_string(),
            messages: without_greeting(messages),
            timestamp,
            analysis,
        };

        log_info!(
            "Saving conversation {} ({:?}, {} messages, analysis: {})",
            conversation.id,
            conversation.title,
            conversation.messages.len(),
            conversation.analysis.is_some()
        );

        let mut next = self.conversations.clone();
        next.push(conversation);
        self.replace(next)?;

        self.conversations
            .last()
            .ok_or_else(|| WikiRagError::from("archive empty after save"))
    }
}
