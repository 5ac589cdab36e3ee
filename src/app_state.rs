use std::sync::Arc;
use tokio::sync::Mutex;

use crate::services::query_gate::{self, QueryError};
use crate::services::search_client::SearchClient;
use crate::services::session::{Applied, SearchSession};

/// Shared state for one search view: the client plus the session it drives.
///
/// The session lock is never held across the network call, so two searches
/// may overlap; the session's ticket check decides which outcome sticks.
#[derive(Clone)]
pub struct AppState {
    pub client: Arc<SearchClient>,
    pub session: Arc<Mutex<SearchSession>>,
}

impl AppState {
    pub fn new(client: SearchClient) -> Self {
        Self {
            client: Arc::new(client),
            session: Arc::new(Mutex::new(SearchSession::new())),
        }
    }

    /// Set the input to `raw`, submit it, and apply the outcome.
    ///
    /// A blank input is rejected before any network activity and leaves the
    /// session as it was.
    pub async fn search(&self, raw: &str) -> Result<Applied, QueryError> {
        query_gate::accept(raw)?;

        let (query, ticket) = {
            let mut session = self.session.lock().await;
            session.set_input(raw);
            session.submit()?
        };

        let outcome = self.client.execute(&query).await;

        Ok(self.session.lock().await.apply(ticket, outcome))
    }

    /// Clear the input field.
    pub async fn clear_input(&self) {
        self.session.lock().await.set_input("");
    }
}
