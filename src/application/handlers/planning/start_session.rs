//! StartSessionHandler - Command handler for opening a planning session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::planning::{PlanningError, PlanningSession};
use crate::ports::PlanningSessionStore;

/// Handler for starting sessions.
pub struct StartSessionHandler {
    store: Arc<dyn PlanningSessionStore>,
}

impl StartSessionHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>) -> Self {
        Self { store }
    }

    /// Creates a session at the check-in view and returns a snapshot of it.
    pub async fn handle(&self) -> Result<PlanningSession, PlanningError> {
        let session = PlanningSession::new(SessionId::new());
        let snapshot = session.clone();
        self.store.insert(session).await?;

        tracing::info!(session_id = %snapshot.id(), "Planning session started");
        Ok(snapshot)
    }
}
