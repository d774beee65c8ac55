// src/modules/archive/mod.rs
//! Verified conversations: saved transcripts plus their backend analysis

pub mod export;
pub mod save_dialog;
pub mod store;

pub use export::{export_markdown, render_markdown};
pub use save_dialog::SaveDialog;
pub use store::{fetch_analysis, ConversationArchive};

use serde::{Deserialize, Serialize};

use crate::modules::chat::Message;

/// Local storage key for the archive.
pub const STORAGE_KEY: &str = "verifiedConversations";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetacognitiveInsight {
    pub topic: String,
    pub card_id: String,
    #[serde(default)]
    pub search_keywords: Vec<String>,
}

impl MetacognitiveInsight {
    pub fn kind(&self) -> InsightKind {
        InsightKind::from_card_id(&self.card_id)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExternalVerification {
    pub topic: String,
    pub summary: String,
    pub source: String,
    #[serde(default)]
    pub follow_up_questions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationAnalysis {
    pub overall_summary: String,
    #[serde(default)]
    pub metacognitive_insights: Vec<MetacognitiveInsight>,
    #[serde(default)]
    pub external_verifications: Vec<ExternalVerification>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analyzed_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message_count: Option<u64>,
}

impl ConversationAnalysis {
    /// All follow-up questions, in verification order.
    pub fn follow_up_questions(&self) -> Vec<&str> {
        self.external_verifications
            .iter()
            .flat_map(|v| v.follow_up_questions.iter().map(String::as_str))
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifiedConversation {
    pub id: String,
    pub title: String,
    pub messages: Vec<Message>,
    /// Save time, epoch milliseconds
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub analysis: Option<ConversationAnalysis>,
}

/// Category of a metacognitive insight, keyed by its card reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsightKind {
    TradeOff,
    Context,
    Precondition,
    EdgeCase,
    Other,
}

impl InsightKind {
    pub fn from_card_id(card_id: &str) -> Self {
        match card_id {
            "CARD_TRADE_OFF" => InsightKind::TradeOff,
            "CARD_CONTEXT" => InsightKind::Context,
            "CARD_PRECONDITION" => InsightKind::Precondition,
            "CARD_EDGE_CASE" => InsightKind::EdgeCase,
            _ => InsightKind::Other,
        }
    }

    pub fn icon(&self) -> &str {
        match self {
            InsightKind::TradeOff => "⚖️",
            InsightKind::Context => "💡",
            InsightKind::Precondition => "🎯",
            InsightKind::EdgeCase => "🐛",
            InsightKind::Other => "📝",
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            InsightKind::TradeOff => "Trade-off",
            InsightKind::Context => "Context",
            InsightKind::Precondition => "Precondition",
            InsightKind::EdgeCase => "Edge case",
            InsightKind::Other => "Note",
        }
    }
}
