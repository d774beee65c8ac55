use crate::error::Result;
use crate::log_debug;

use super::{BackendClient, QueryRequest, QueryResponse};

impl BackendClient {
    /// Ask the backend, sending the whole conversation text history.
    #[tracing::instrument(skip(self, history), fields(turns = history.len()))]
    pub async fn query(&self, history: &[String]) -> Result<QueryResponse> {
        let response: QueryResponse = self
            .post_json("/api/query", &QueryRequest { question: history })
            .await?;

        log_debug!(
            "Query answered: {} chars, {} cards",
            response.answer.len(),
            response.cards.as_ref().map_or(0, |c| c.len())
        );

        Ok(response)
    }
}
