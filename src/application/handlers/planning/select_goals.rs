//! SelectGoalsHandler - Command handler for starting suggested goals.

use std::sync::Arc;

use crate::domain::foundation::{GoalId, SessionId};
use crate::domain::planning::{PlanningError, PlanningSession};
use crate::ports::PlanningSessionStore;

/// Command to start the chosen suggestions.
#[derive(Debug, Clone)]
pub struct SelectGoalsCommand {
    pub session_id: SessionId,
    pub goal_ids: Vec<GoalId>,
}

/// Result of goal selection.
#[derive(Debug, Clone)]
pub struct SelectGoalsResult {
    /// Goals actually added; titles already active are skipped.
    pub added: usize,
    pub session: PlanningSession,
}

/// Handler for goal selection.
pub struct SelectGoalsHandler {
    store: Arc<dyn PlanningSessionStore>,
}

impl SelectGoalsHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: SelectGoalsCommand) -> Result<SelectGoalsResult, PlanningError> {
        let shared = self.store.get(&cmd.session_id).await?;
        let mut session = shared.lock().await;

        let added = session.select_goals(&cmd.goal_ids)?;
        tracing::info!(
            session_id = %cmd.session_id,
            selected = cmd.goal_ids.len(),
            added,
            "Goals started"
        );

        Ok(SelectGoalsResult {
            added,
            session: session.clone(),
        })
    }
}
