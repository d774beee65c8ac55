use crate::error::Result;
use crate::log_debug;
use crate::modules::archive::ConversationAnalysis;
use crate::modules::chat::Message;

use super::{AnalyzeMessage, AnalyzeRequest, BackendClient};

impl BackendClient {
    /// Request the post-hoc analysis of a finished conversation.
    #[tracing::instrument(skip(self, messages), fields(messages = messages.len()))]
    pub async fn analyze(&self, messages: &[Message]) -> Result<ConversationAnalysis> {
        let request = AnalyzeRequest {
            messages: messages
                .iter()
                .map(|m| AnalyzeMessage {
                    role: m.role,
                    content: &m.content,
                })
                .collect(),
        };

        let analysis: ConversationAnalysis = self.post_json("/api/analyze", &request).await?;

        log_debug!(
            "Analysis received: {} insights, {} verifications",
            analysis.metacognitive_insights.len(),
            analysis.external_verifications.len()
        );

        Ok(analysis)
    }
}
