//! ApproveBreakdownHandler - Command handler for accepting a generated plan.

use std::sync::Arc;

use crate::domain::foundation::{GoalId, SessionId};
use crate::domain::planning::{PlanningError, PlanningSession};
use crate::ports::PlanningSessionStore;

/// Result of approving a breakdown.
#[derive(Debug, Clone)]
pub struct ApproveBreakdownResult {
    /// Goal that now carries the plan.
    pub goal_id: GoalId,
    pub session: PlanningSession,
}

/// Handler for breakdown approval.
pub struct ApproveBreakdownHandler {
    store: Arc<dyn PlanningSessionStore>,
}

impl ApproveBreakdownHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, session_id: SessionId) -> Result<ApproveBreakdownResult, PlanningError> {
        let shared = self.store.get(&session_id).await?;
        let mut session = shared.lock().await;

        let goal_id = session.approve_breakdown()?;
        tracing::info!(%session_id, %goal_id, "Breakdown approved");

        Ok(ApproveBreakdownResult {
            goal_id,
            session: session.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::handlers::planning::test_support::{breakdown, daily_session};
    use crate::domain::planning::ViewState;

    #[tokio::test]
    async fn approval_attaches_plan_and_returns_to_daily() {
        let store = Arc::new(InMemorySessionStore::new());
        let (id, goal_ids) = daily_session(&store, &["Walk", "Budget"]).await;
        {
            let shared = store.get(&id).await.unwrap();
            let mut session = shared.lock().await;
            let request = session.request_plan(goal_ids[0]).unwrap();
            session.receive_breakdown(request, Ok(breakdown(&["Shoes"])));
        }

        let result = ApproveBreakdownHandler::new(store).handle(id).await.unwrap();

        assert_eq!(result.goal_id, goal_ids[0]);
        assert_eq!(result.session.view(), ViewState::Daily);
        assert!(result.session.active_goals()[0].has_breakdown());
        assert!(!result.session.active_goals()[1].has_breakdown());
    }

    #[tokio::test]
    async fn pending_breakdown_cannot_be_approved() {
        let store = Arc::new(InMemorySessionStore::new());
        let (id, goal_ids) = daily_session(&store, &["Walk"]).await;
        store.get(&id).await.unwrap().lock().await.request_plan(goal_ids[0]).unwrap();

        let result = ApproveBreakdownHandler::new(store).handle(id).await;
        assert_eq!(result.unwrap_err(), PlanningError::BreakdownNotReady);
    }

    #[tokio::test]
    async fn approving_from_daily_is_invalid() {
        let store = Arc::new(InMemorySessionStore::new());
        let (id, _) = daily_session(&store, &["Walk"]).await;

        let result = ApproveBreakdownHandler::new(store).handle(id).await;
        assert!(matches!(result, Err(PlanningError::InvalidState { .. })));
    }
}
