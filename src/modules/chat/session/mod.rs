mod new;
mod edit_input;
mod begin_submit;
mod complete_submit;
mod submit;
mod accessors;

pub use submit::fetch_answer;

use crate::modules::chat::{Message, StateChange};

/// Owns the conversation shown in the chat view.
#[derive(Debug)]
pub struct ChatSession {
    messages: Vec<Message>,
    input: String,
    loading: bool,
    changes: Vec<StateChange>,
}

impl ChatSession {
    fn record(&mut self, change: StateChange) {
        if !self.changes.contains(&change) {
            self.changes.push(change);
        }
    }

    /// Drain the transitions recorded since the last call, oldest first.
    pub fn take_changes(&mut self) -> Vec<StateChange> {
        std::mem::take(&mut self.changes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::chat::{KnowledgeCard, Role, ERROR_REPLY, GREETING};
    use crate::util::api::QueryResponse;

    #[test]
    fn test_new_session_holds_only_greeting() {
        let session = ChatSession::new();
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].content, GREETING);
        assert!(!session.is_loading());
        assert!(!session.can_save());
    }

    #[test]
    fn test_begin_submit_builds_history_and_sets_loading() {
        let mut session = ChatSession::new();
        session.set_input("What is osmosis?");

        let history = session.begin_submit().expect("submission should start");

        assert_eq!(history, vec![GREETING.to_string(), "What is osmosis?".to_string()]);
        assert!(session.is_loading());
        assert_eq!(session.input(), "");
        let last = session.messages().last().unwrap();
        assert_eq!(last.role, Role::User);
        assert_eq!(last.content, "What is osmosis?");
    }

    #[test]
    fn test_submission_blocked_while_loading() {
        let mut session = ChatSession::new();
        session.set_input("first");
        session.begin_submit().unwrap();

        session.set_input("second");
        assert!(session.begin_submit().is_none());
        assert_eq!(session.messages().len(), 2);
        assert_eq!(session.input(), "second");
    }

    #[test]
    fn test_blank_input_is_ignored() {
        let mut session = ChatSession::new();
        session.set_input("   \n ");
        assert!(session.begin_submit().is_none());
        assert!(!session.is_loading());
    }

    #[test]
    fn test_complete_submit_appends_answer_with_cards() {
        let mut session = ChatSession::new();
        session.set_input("What is osmosis?");
        session.begin_submit().unwrap();

        session.complete_submit(Some(QueryResponse {
            answer: "Water moving across a membrane.".to_string(),
            cards: Some(vec![KnowledgeCard::new("Osmosis", "https://en.wikipedia.org/wiki/Osmosis")]),
        }));

        assert!(!session.is_loading());
        let last = session.messages().last().unwrap();
        assert_eq!(last.content, "Water moving across a membrane.");
        assert_eq!(last.cards().len(), 1);
        assert_eq!(session.cards().len(), 1);
        assert!(session.can_save());
    }

    #[test]
    fn test_failed_query_appends_error_reply() {
        let mut session = ChatSession::new();
        session.set_input("What is osmosis?");
        session.begin_submit().unwrap();

        session.complete_submit(None);

        assert!(!session.is_loading());
        assert_eq!(session.messages().last().unwrap().content, ERROR_REPLY);
        assert!(session.messages().last().unwrap().cards.is_none());
    }

    #[test]
    fn test_changes_are_recorded_once_and_drained() {
        let mut session = ChatSession::new();
        session.insert_char('a');
        session.insert_char('b');
        assert_eq!(session.take_changes(), vec![StateChange::Input]);

        session.begin_submit().unwrap();
        let changes = session.take_changes();
        assert!(changes.contains(&StateChange::Messages));
        assert!(changes.contains(&StateChange::Loading));
        assert!(changes.contains(&StateChange::Input));
        assert!(session.take_changes().is_empty());
    }

    #[test]
    fn test_input_editing() {
        let mut session = ChatSession::new();
        session.insert_char('a');
        session.insert_newline();
        session.insert_char('b');
        assert_eq!(session.input(), "a\nb");

        session.backspace();
        session.backspace();
        assert_eq!(session.input(), "a");
    }

    #[test]
    fn test_transcript_drops_greeting() {
        let mut session = ChatSession::new();
        session.set_input("q");
        session.begin_submit().unwrap();
        session.complete_submit(None);

        let transcript = session.transcript();
        assert_eq!(transcript.len(), 2);
        assert!(transcript.iter().all(|m| !m.is_greeting()));
    }
}
