// src/modules/relay.rs
//! Re-asking an analysis follow-up question as a new chat turn

use std::time::Duration;

use crate::log_info;
use crate::modules::chat::ChatSession;
use crate::modules::navigation::View;

/// A follow-up question waiting for its scheduled submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFollowUp {
    pub question: String,
    pub delay: Duration,
}

/// Switch to chat and put `question` in the input. The caller schedules
/// [`release_follow_up`] after the returned delay.
pub fn stage_follow_up(
    question: &str,
    delay: Duration,
    session: &mut ChatSession,
    view: &mut View,
) -> PendingFollowUp {
    log_info!("Relaying follow-up question {:?}", question);

    *view = View::Chat;
    session.set_input(question);

    PendingFollowUp {
        question: question.to_string(),
        delay,
    }
}

/// The scheduled half of the relay: submit `question` through the ordinary
/// submit path. Returns the query history, or `None` if submission was refused.
pub fn release_follow_up(question: &str, session: &mut ChatSession) -> Option<Vec<String>> {
    session.set_input(question);
    session.begin_submit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_switches_view_and_fills_input() {
        let mut session = ChatSession::new();
        let mut view = View::Verified;

        let pending = stage_follow_up(
            "How does desalination work?",
            Duration::from_millis(100),
            &mut session,
            &mut view,
        );

        assert_eq!(view, View::Chat);
        assert_eq!(session.input(), "How does desalination work?");
        assert_eq!(pending.delay, Duration::from_millis(100));
        assert_eq!(session.messages().len(), 1);
    }

    #[test]
    fn test_release_submits_question() {
        let mut session = ChatSession::new();
        let history = release_follow_up("How does desalination work?", &mut session).unwrap();

        assert_eq!(history.last().map(String::as_str), Some("How does desalination work?"));
        assert!(session.is_loading());
        assert_eq!(session.input(), "");
    }

    #[test]
    fn test_release_refused_while_loading() {
        let mut session = ChatSession::new();
        session.set_input("first");
        session.begin_submit().unwrap();

        assert!(release_follow_up("second", &mut session).is_none());
    }
}
