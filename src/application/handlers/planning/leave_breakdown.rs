//! LeaveBreakdownHandler - Command handler for backing out of a plan.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::planning::{PlanningError, PlanningSession};
use crate::ports::PlanningSessionStore;

/// Handler for leaving the breakdown view.
pub struct LeaveBreakdownHandler {
    store: Arc<dyn PlanningSessionStore>,
}

impl LeaveBreakdownHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>) -> Self {
        Self { store }
    }

    /// Returns to the daily view, discarding any pending or finished plan.
    pub async fn handle(&self, session_id: SessionId) -> Result<PlanningSession, PlanningError> {
        let shared = self.store.get(&session_id).await?;
        let mut session = shared.lock().await;

        session.leave_breakdown()?;
        tracing::debug!(%session_id, "Left breakdown view");

        Ok(session.clone())
    }
}
