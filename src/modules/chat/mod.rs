// src/modules/chat/mod.rs
//! Chat session state: message log, input buffer, loading flag

pub mod observer;
pub mod session;

pub use observer::{StateChange, StateObserver};
pub use session::{fetch_answer, ChatSession};

use serde::{Deserialize, Serialize};

/// First assistant message of every session. Never saved or analyzed.
pub const GREETING: &str =
    "Hello! I'm a Wikipedia-based AI assistant. What would you like to know?";

/// Appended in place of an answer when the query round trip fails.
pub const ERROR_REPLY: &str = "Sorry, something went wrong. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A knowledge snippet the backend attached to an answer.
/// No stable id is guaranteed; identity is `(summary, source)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeCard {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub summary: String,
    pub source: String,
}

impl KnowledgeCard {
    pub fn new(summary: impl Into<String>, source: impl Into<String>) -> Self {
        Self {
            id: None,
            summary: summary.into(),
            source: source.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cards: Option<Vec<KnowledgeCard>>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            cards: None,
        }
    }

    pub fn assistant(content: impl Into<String>, cards: Vec<KnowledgeCard>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            cards: Some(cards),
        }
    }

    pub fn greeting() -> Self {
        Self::assistant(GREETING, Vec::new())
    }

    pub fn error_reply() -> Self {
        Self {
            role: Role::Assistant,
            content: ERROR_REPLY.to_string(),
            cards: None,
        }
    }

    pub fn is_greeting(&self) -> bool {
        self.role == Role::Assistant && self.content == GREETING
    }

    pub fn cards(&self) -> &[KnowledgeCard] {
        self.cards.as_deref().unwrap_or(&[])
    }
}

/// The log as it gets saved and analyzed: everything but the greeting.
pub fn without_greeting(messages: &[Message]) -> Vec<Message> {
    messages
        .iter()
        .filter(|m| !m.is_greeting())
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_wire_format() {
        let msg = Message::assistant(
            "Osmosis is diffusion of water.",
            vec![KnowledgeCard::new("Osmosis", "https://en.wikipedia.org/wiki/Osmosis")],
        );
        let value = serde_json::to_value(&msg).unwrap();

        assert_eq!(value["role"], "assistant");
        assert_eq!(value["cards"][0]["summary"], "Osmosis");
        assert!(value["cards"][0].get("id").is_none());
        assert!(serde_json::to_value(Message::user("hi")).unwrap().get("cards").is_none());
    }

    #[test]
    fn test_without_greeting_only_drops_the_greeting() {
        let messages = vec![
            Message::greeting(),
            Message::user(GREETING),
            Message::assistant("answer", Vec::new()),
        ];
        let filtered = without_greeting(&messages);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0].role, Role::User);
    }
}
