use crate::error::Result;
use crate::log_warn;
use crate::modules::archive::{ConversationAnalysis, VerifiedConversation};
use crate::modules::chat::{without_greeting, Message};
use crate::util::api::BackendClient;

use super::ConversationArchive;

/// Ask the backend to analyze `messages`. A failed analysis is logged and
/// comes back as `None`; the conversation is then saved without one.
pub async fn fetch_analysis(
    client: &BackendClient,
    messages: &[Message],
) -> Option<ConversationAnalysis> {
    match client.analyze(messages).await {
        Ok(analysis) => Some(analysis),
        Err(e) => {
            log_warn!("Analysis failed, saving without it: {}", e);
            None
        }
    }
}

impl ConversationArchive {
    /// Analyze, then save.
    pub async fn save_analyzed(
        &mut self,
        client: &BackendClient,
        title: &str,
        messages: &[Message],
    ) -> Result<&VerifiedConversation> {
        let transcript = without_greeting(messages);
        let analysis = fetch_analysis(client, &transcript).await;
        self.save(title, &transcript, analysis)
    }
}
