use crate::event::AppEvent;
use crate::log_error;
use crate::modules::chat::fetch_answer;

use super::App;

impl App {
    /// Start a query for the current input, unless one is already running.
    pub fn submit_chat(&mut self) {
        if let Some(history) = self.session.begin_submit() {
            self.spawn_query(history);
        }
    }

    /// Send `history` to the backend off the event loop; the outcome comes
    /// back as [`AppEvent::QueryFinished`].
    pub(super) fn spawn_query(&self, history: Vec<String>) {
        let client = self.client.clone();
        let sender = self.events.app_sender();

        tokio::spawn(async move {
            let response = fetch_answer(&client, &history).await;
            sender.send(AppEvent::QueryFinished(response));
        });
    }

    pub(super) fn toggle_highlighted_bookmark(&mut self) {
        let Some(card) = self.card_cursor.current().cloned() else {
            return;
        };

        match self.bookmarks.toggle(&card, self.session.messages()) {
            Ok(true) => self.status_message = Some(format!("★ Bookmarked: {}", card.summary)),
            Ok(false) => self.status_message = Some(format!("☆ Removed bookmark: {}", card.summary)),
            Err(e) => {
                log_error!("Failed to update bookmarks: {}", e);
                self.status_message = Some(format!("Could not save bookmarks: {}", e));
            }
        }
    }
}
