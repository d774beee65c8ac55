use crate::event::AppEvent;
use crate::modules::relay::{release_follow_up, stage_follow_up};

use super::App;

impl App {
    /// Switch to chat with `question` in the input and schedule its submit.
    pub(super) fn ask_follow_up(&mut self, question: &str) {
        let pending = stage_follow_up(
            question,
            self.config.follow_up_delay(),
            &mut self.session,
            &mut self.view,
        );
        self.events
            .schedule(AppEvent::FollowUpDue(pending.question), pending.delay);
    }

    pub(super) fn release_follow_up(&mut self, question: &str) {
        if let Some(history) = release_follow_up(question, &mut self.session) {
            self.spawn_query(history);
        }
    }
}
