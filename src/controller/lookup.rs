//! Lookup orchestration: validate, mark loading, fetch, settle

use tokio::task::JoinHandle;

use crate::model::LookupQuery;
use super::AppController;

impl AppController {
    /// Start a lookup for the current pincode input.
    ///
    /// The request runs on its own task so the UI keeps drawing while it is
    /// outstanding. Returns `None` when nothing was started: either the
    /// input failed validation or a lookup is already in flight.
    pub async fn submit_lookup(&self) -> Option<JoinHandle<()>> {
        let Some(query) = self.model.begin_lookup().await else {
            let state = self.model.get_state().await;
            if let Some(message) = state.phase.error_message() {
                tracing::debug!(input = %state.pincode_input, reason = message, "Lookup rejected");
            }
            return None;
        };

        let controller = self.clone();
        Some(tokio::spawn(async move {
            controller.run_lookup(query).await;
        }))
    }

    /// Fetch and apply the outcome. Always leaves the loading phase.
    #[tracing::instrument(name = "lookup", skip_all, fields(pincode = %query))]
    pub async fn run_lookup(&self, query: LookupQuery) {
        tracing::debug!("Performing lookup");
        let outcome = self.provider.lookup(&query).await;

        match &outcome {
            Ok(records) => {
                tracing::info!(records = records.len(), "Lookup completed");
            }
            Err(e) if e.is_transport() => {
                tracing::error!(error = ?e, "Lookup request failed");
            }
            Err(e) => {
                tracing::warn!(error = %e, "Provider reported an error");
            }
        }

        self.model.settle_lookup(outcome).await;
    }
}
