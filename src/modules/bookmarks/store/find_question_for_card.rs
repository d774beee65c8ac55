use crate::modules::bookmarks::{synthetic_key, OTHER_QUESTION};
use crate::modules::chat::{KnowledgeCard, Message, Role};

/// Resolve the user question that produced `card`.
///
/// Walks the log backward. For each assistant message carrying the card
/// (newest first), the nearest user message before it is the answer. An
/// assistant message with no user message before it does not stop the scan.
pub fn find_question_for_card(card: &KnowledgeCard, messages: &[Message]) -> String {
    let key = synthetic_key(card);

    for (i, msg) in messages.iter().enumerate().rev() {
        if msg.role != Role::Assistant {
            continue;
        }
        if !msg.cards().iter().any(|c| synthetic_key(c) == key) {
            continue;
        }
        if let Some(question) = messages[..i].iter().rev().find(|m| m.role == Role::User) {
            return question.content.clone();
        }
    }

    OTHER_QUESTION.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(summary: &str) -> KnowledgeCard {
        KnowledgeCard::new(summary, format!("https://en.wikipedia.org/wiki/{}", summary))
    }

    #[test]
    fn test_nearest_preceding_question_wins() {
        let messages = vec![
            Message::greeting(),
            Message::user("What is osmosis?"),
            Message::assistant("...", vec![card("Osmosis")]),
            Message::user("And diffusion?"),
            Message::assistant("...", vec![card("Diffusion")]),
        ];

        assert_eq!(find_question_for_card(&card("Osmosis"), &messages), "What is osmosis?");
        assert_eq!(find_question_for_card(&card("Diffusion"), &messages), "And diffusion?");
    }

    #[test]
    fn test_latest_answer_containing_card_is_used() {
        let messages = vec![
            Message::user("first"),
            Message::assistant("...", vec![card("Osmosis")]),
            Message::user("second"),
            Message::assistant("...", vec![card("Osmosis")]),
        ];

        assert_eq!(find_question_for_card(&card("Osmosis"), &messages), "second");
    }

    #[test]
    fn test_unknown_card_falls_back_to_other() {
        let messages = vec![Message::user("q"), Message::assistant("a", vec![card("A")])];
        assert_eq!(find_question_for_card(&card("B"), &messages), OTHER_QUESTION);
    }

    #[test]
    fn test_card_without_prior_question_falls_back_to_other() {
        let messages = vec![Message::assistant("a", vec![card("A")])];
        assert_eq!(find_question_for_card(&card("A"), &messages), OTHER_QUESTION);
    }
}
