//! Query handlers for reading a planning session.

use std::sync::Arc;

use crate::domain::foundation::SessionId;
use crate::domain::planning::{DailyOverview, PlanningError, PlanningSession};
use crate::ports::PlanningSessionStore;

/// Handler returning a full session snapshot.
pub struct GetSessionHandler {
    store: Arc<dyn PlanningSessionStore>,
}

impl GetSessionHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>) -> Self {
        Self { store }
    }

    /// Returns the session, folding an inconsistent breakdown view back to
    /// the daily view first.
    pub async fn handle(&self, session_id: SessionId) -> Result<PlanningSession, PlanningError> {
        let shared = self.store.get(&session_id).await?;
        let mut session = shared.lock().await;
        session.heal();
        Ok(session.clone())
    }
}

/// Handler returning the daily overview.
pub struct GetDailyOverviewHandler {
    store: Arc<dyn PlanningSessionStore>,
}

impl GetDailyOverviewHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<DailyOverview, PlanningError> {
        let shared = self.store.get(&session_id).await?;
        let session = shared.lock().await;
        Ok(session.daily_overview())
    }
}
