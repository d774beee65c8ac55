use chrono::{Local, TimeZone};
use std::fmt::Write;

use crate::modules::archive::{ConversationAnalysis, VerifiedConversation};
use crate::modules::chat::{Message, Role};

/// Render a saved conversation as a standalone markdown document.
pub fn render_markdown(conversation: &VerifiedConversation) -> String {
    let mut md = String::new();

    let _ = writeln!(md, "# {}\n", conversation.title);
    let _ = writeln!(md, "*Saved: {}*\n", format_saved_at(conversation.timestamp));
    md.push_str("---\n\n");

    if let Some(analysis) = &conversation.analysis {
        write_analysis(&mut md, analysis);
    }

    md.push_str("## 💬 Transcript\n\n");
    for message in &conversation.messages {
        write_message(&mut md, message);
    }

    md
}

fn format_saved_at(timestamp: i64) -> String {
    match Local.timestamp_millis_opt(timestamp).single() {
        Some(at) => at.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => timestamp.to_string(),
    }
}

fn write_analysis(md: &mut String, analysis: &ConversationAnalysis) {
    md.push_str("## Conversation analysis\n\n");
    let _ = writeln!(md, "### Overall summary\n{}\n", analysis.overall_summary);

    if !analysis.metacognitive_insights.is_empty() {
        md.push_str("### 🧠 Metacognitive insights\n\n");
        for (idx, insight) in analysis.metacognitive_insights.iter().enumerate() {
            let _ = writeln!(md, "{}. **{}** ({})", idx + 1, insight.topic, insight.card_id);
            let _ = writeln!(md, "   - Search keywords: {}\n", insight.search_keywords.join(", "));
        }
    }

    if !analysis.external_verifications.is_empty() {
        md.push_str("### 🔍 External verification\n\n");
        for (idx, verification) in analysis.external_verifications.iter().enumerate() {
            let _ = writeln!(md, "{}. **{}**", idx + 1, verification.topic);
            let _ = writeln!(md, "   - {}", verification.summary);
            let _ = writeln!(md, "   - Source: [{0}]({0})", verification.source);
            for question in &verification.follow_up_questions {
                let _ = writeln!(md, "   - Follow-up: {}", question);
            }
            md.push('\n');
        }
    }

    md.push_str("---\n\n");
}

fn write_message(md: &mut String, message: &Message) {
    match message.role {
        Role::User => {
            let _ = writeln!(md, "### 👤 Question\n\n{}\n", message.content);
        }
        Role::Assistant => {
            let _ = writeln!(md, "### 🤖 Answer\n\n{}\n", message.content);

            let cards = message.cards();
            if !cards.is_empty() {
                md.push_str("#### 📚 Related knowledge cards\n\n");
                for (idx, card) in cards.iter().enumerate() {
                    let _ = writeln!(md, "{}. {}", idx + 1, card.summary);
                    let _ = writeln!(md, "   - Source: [{0}]({0})\n", card.source);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::archive::{ExternalVerification, MetacognitiveInsight};
    use crate::modules::chat::KnowledgeCard;

    fn conversation(analysis: Option<ConversationAnalysis>) -> VerifiedConversation {
        VerifiedConversation {
            id: "1700000000000".to_string(),
            title: "Osmosis".to_string(),
            messages: vec![
                Message::user("What is osmosis?"),
                Message::assistant(
                    "Diffusion of water across a membrane.",
                    vec![KnowledgeCard::new("Osmosis", "https://en.wikipedia.org/wiki/Osmosis")],
                ),
            ],
            timestamp: 1_700_000_000_000,
            analysis,
        }
    }

    #[test]
    fn test_transcript_without_analysis() {
        let md = render_markdown(&conversation(None));

        assert!(md.starts_with("# Osmosis\n\n*Saved: "));
        assert!(!md.contains("Conversation analysis"));
        assert!(md.contains("### 👤 Question\n\nWhat is osmosis?\n"));
        assert!(md.contains("### 🤖 Answer\n\nDiffusion of water across a membrane.\n"));
        assert!(md.contains("1. Osmosis\n   - Source: [https://en.wikipedia.org/wiki/Osmosis](https://en.wikipedia.org/wiki/Osmosis)"));
    }

    #[test]
    fn test_analysis_precedes_transcript() {
        let analysis = ConversationAnalysis {
            overall_summary: "A short talk about osmosis.".to_string(),
            metacognitive_insights: vec![MetacognitiveInsight {
                topic: "Membrane permeability".to_string(),
                card_id: "CARD_PRECONDITION".to_string(),
                search_keywords: vec!["semipermeable".to_string(), "membrane".to_string()],
            }],
            external_verifications: vec![ExternalVerification {
                topic: "Reverse osmosis".to_string(),
                summary: "Pressure can reverse the flow.".to_string(),
                source: "https://en.wikipedia.org/wiki/Reverse_osmosis".to_string(),
                follow_up_questions: vec!["How does desalination work?".to_string()],
            }],
            analyzed_at: None,
            message_count: Some(2),
        };
        let md = render_markdown(&conversation(Some(analysis)));

        let analysis_at = md.find("## Conversation analysis").unwrap();
        let transcript_at = md.find("## 💬 Transcript").unwrap();
        assert!(analysis_at < transcript_at);
        assert!(md.contains("### Overall summary\nA short talk about osmosis.\n"));
        assert!(md.contains("1. **Membrane permeability** (CARD_PRECONDITION)"));
        assert!(md.contains("Search keywords: semipermeable, membrane"));
        assert!(md.contains("1. **Reverse osmosis**"));
        assert!(md.contains("Follow-up: How does desalination work?"));
    }
}
