use crate::log_error;
use crate::util::api::{BackendClient, QueryResponse};

use super::ChatSession;

/// Query the backend with `history`. Failures are logged and come back as
/// `None`, which [`ChatSession::complete_submit`] turns into the error reply.
pub async fn fetch_answer(client: &BackendClient, history: &[String]) -> Option<QueryResponse> {
    match client.query(history).await {
        Ok(response) => Some(response),
        Err(e) => {
            log_error!("Query request failed: {}", e);
            None
        }
    }
}

impl ChatSession {
    /// Run a whole query round trip in place.
    ///
    /// Returns `false` when nothing was submitted.
    pub async fn submit(&mut self, client: &BackendClient) -> bool {
        let Some(history) = self.begin_submit() else {
            return false;
        };

        let response = fetch_answer(client, &history).await;
        self.complete_submit(response);
        true
    }
}
