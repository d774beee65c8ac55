use crate::modules::chat::StateObserver;

use super::App;

impl App {
    /// Run every session observer for the transitions since the last call.
    pub(super) fn notify_observers(&mut self) {
        let changes = self.session.take_changes();
        if changes.is_empty() {
            return;
        }

        let observers: [&mut dyn StateObserver; 3] =
            [&mut self.viewport, &mut self.input_box, &mut self.card_cursor];

        for observer in observers {
            for change in &changes {
                observer.observe(*change, &self.session);
            }
        }
    }
}
