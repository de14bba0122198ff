//! RequestPlanHandler - Command handler for breaking a goal into tasks.

use std::sync::Arc;

use super::{GenerationRunner, GenerationStarted};
use crate::domain::foundation::{GoalId, SessionId};
use crate::domain::planning::PlanningError;
use crate::ports::PlanningSessionStore;

/// Command to request a breakdown for one active goal.
#[derive(Debug, Clone)]
pub struct RequestPlanCommand {
    pub session_id: SessionId,
    pub goal_id: GoalId,
}

/// Handler for breakdown requests.
pub struct RequestPlanHandler {
    store: Arc<dyn PlanningSessionStore>,
    runner: GenerationRunner,
}

impl RequestPlanHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>, runner: GenerationRunner) -> Self {
        Self { store, runner }
    }

    pub async fn handle(&self, cmd: RequestPlanCommand) -> Result<GenerationStarted, PlanningError> {
        let shared = self.store.get(&cmd.session_id).await?;

        let (request_id, goal, ratings, snapshot) = {
            let mut session = shared.lock().await;
            let request_id = session.request_plan(cmd.goal_id)?;
            let goal = session
                .find_goal(&cmd.goal_id)
                .map(|g| g.goal.clone())
                .ok_or(PlanningError::GoalNotFound(cmd.goal_id))?;
            (request_id, goal, session.ratings().to_vec(), session.clone())
        };

        tracing::info!(
            session_id = %cmd.session_id,
            goal_id = %cmd.goal_id,
            %request_id,
            "Requesting goal breakdown"
        );

        let generation = self.runner.spawn_breakdown(shared, request_id, goal, ratings);
        Ok(GenerationStarted {
            request_id,
            session: snapshot,
            generation,
        })
    }
}
