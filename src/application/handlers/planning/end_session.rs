//! Session lifetime handlers - explicit close and idle expiry.

use std::sync::Arc;

use chrono::Duration;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::planning::PlanningError;
use crate::ports::PlanningSessionStore;

/// Handler for closing a session the client no longer needs.
pub struct EndSessionHandler {
    store: Arc<dyn PlanningSessionStore>,
}

impl EndSessionHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<(), PlanningError> {
        self.store.delete(&session_id).await?;
        tracing::info!(%session_id, "Planning session ended");
        Ok(())
    }
}

/// Drops sessions nobody has touched for `max_idle`.
#[derive(Clone)]
pub struct ExpireIdleSessionsHandler {
    store: Arc<dyn PlanningSessionStore>,
    max_idle: Duration,
}

impl ExpireIdleSessionsHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>, max_idle: Duration) -> Self {
        Self { store, max_idle }
    }

    /// Returns the number of sessions removed.
    pub async fn handle(&self) -> usize {
        let cutoff = Timestamp::from_datetime(*Timestamp::now().as_datetime() - self.max_idle);
        let removed = self.store.evict_idle(cutoff).await;
        if removed > 0 {
            tracing::info!(removed, "Expired idle planning sessions");
        }
        removed
    }
}
