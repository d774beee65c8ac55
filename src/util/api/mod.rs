// src/util/api/mod.rs
//! HTTP client for the WikiRAG backend (`/api/query`, `/api/analyze`)

mod analyze;
mod query;

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::{Result, WikiRagError};
use crate::modules::chat::{KnowledgeCard, Message, Role};

#[derive(Debug, Clone, Serialize)]
pub struct QueryRequest<'a> {
    pub question: &'a [String],
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct QueryResponse {
    pub answer: String,
    #[serde(default)]
    pub cards: Option<Vec<KnowledgeCard>>,
}

impl QueryResponse {
    pub fn into_message(self) -> Message {
        Message::assistant(self.answer, self.cards.unwrap_or_default())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeMessage<'a> {
    pub role: Role,
    pub content: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest<'a> {
    pub messages: Vec<AnalyzeMessage<'a>>,
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: reqwest::Client,
}

impl BackendClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// POST `body` as JSON and decode a JSON reply. Non-2xx is an error.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: serde::de::DeserializeOwned,
    {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!(path, status = status.as_u16(), "backend responded");
        if !status.is_success() {
            return Err(WikiRagError::StatusError(status.as_u16()));
        }

        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_response_without_cards() {
        let response: QueryResponse = serde_json::from_str(r#"{"answer":"hi"}"#).unwrap();
        assert_eq!(response.into_message().cards(), &[] as &[KnowledgeCard]);

        let response: QueryResponse =
            serde_json::from_str(r#"{"answer":"hi","cards":null}"#).unwrap();
        assert!(response.cards.is_none());
    }

    #[test]
    fn test_query_response_requires_answer() {
        assert!(serde_json::from_str::<QueryResponse>(r#"{"cards":[]}"#).is_err());
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = BackendClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.endpoint("/api/query"), "http://localhost:8000/api/query");
    }
}
