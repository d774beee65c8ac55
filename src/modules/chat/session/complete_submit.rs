use crate::log_warn;
use crate::modules::chat::{Message, StateChange};
use crate::util::api::QueryResponse;

use super::ChatSession;

impl ChatSession {
    /// Apply the outcome of a query. `None` means the round trip failed.
    pub fn complete_submit(&mut self, response: Option<QueryResponse>) {
        let reply = match response {
            Some(response) => response.into_message(),
            None => {
                log_warn!("Query failed, showing error reply");
                Message::error_reply()
            }
        };

        self.messages.push(reply);
        self.loading = false;

        self.record(StateChange::Messages);
        self.record(StateChange::Loading);
    }
}
