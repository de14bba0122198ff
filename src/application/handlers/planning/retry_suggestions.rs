//! RetrySuggestionsHandler - Command handler for retrying failed suggestions.

use std::sync::Arc;

use super::{GenerationRunner, GenerationStarted};
use crate::domain::foundation::SessionId;
use crate::domain::planning::PlanningError;
use crate::ports::PlanningSessionStore;

/// Handler for user-initiated suggestion retries.
pub struct RetrySuggestionsHandler {
    store: Arc<dyn PlanningSessionStore>,
    runner: GenerationRunner,
}

impl RetrySuggestionsHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>, runner: GenerationRunner) -> Self {
        Self { store, runner }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<GenerationStarted, PlanningError> {
        let shared = self.store.get(&session_id).await?;

        let (request_id, ratings, snapshot) = {
            let mut session = shared.lock().await;
            let request_id = session.retry_suggestions()?;
            (request_id, session.ratings().to_vec(), session.clone())
        };

        tracing::info!(%session_id, %request_id, "Retrying goal suggestions");

        let generation = self.runner.spawn_suggestions(shared, request_id, ratings);
        Ok(GenerationStarted {
            request_id,
            session: snapshot,
            generation,
        })
    }
}
