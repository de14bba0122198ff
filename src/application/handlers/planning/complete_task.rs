//! CompleteTaskHandler - Command handler for checking off a task.

use std::sync::Arc;

use crate::domain::foundation::{SessionId, TaskId};
use crate::domain::planning::{DailyOverview, PlanningError};
use crate::ports::PlanningSessionStore;

/// Command to mark a task done.
#[derive(Debug, Clone)]
pub struct CompleteTaskCommand {
    pub session_id: SessionId,
    pub task_id: TaskId,
}

/// Result of completing a task.
#[derive(Debug, Clone)]
pub struct CompleteTaskResult {
    /// False when the task was already done.
    pub newly_completed: bool,
    pub overview: DailyOverview,
}

/// Handler for task completion.
pub struct CompleteTaskHandler {
    store: Arc<dyn PlanningSessionStore>,
}

impl CompleteTaskHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: CompleteTaskCommand) -> Result<CompleteTaskResult, PlanningError> {
        let shared = self.store.get(&cmd.session_id).await?;
        let mut session = shared.lock().await;

        let newly_completed = session.complete_task(cmd.task_id)?;
        if newly_completed {
            tracing::info!(session_id = %cmd.session_id, task_id = %cmd.task_id, "Task completed");
        } else {
            tracing::debug!(session_id = %cmd.session_id, task_id = %cmd.task_id, "Task already completed");
        }

        Ok(CompleteTaskResult {
            newly_completed,
            overview: session.daily_overview(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemorySessionStore;
    use crate::application::handlers::planning::test_support::planned_session;

    #[tokio::test]
    async fn completion_updates_progress() {
        let store = Arc::new(InMemorySessionStore::new());
        let (id, task_ids) = planned_session(&store, &["Shoes", "Route", "Go", "Stretch"]).await;
        let handler = CompleteTaskHandler::new(store);

        let result = handler
            .handle(CompleteTaskCommand { session_id: id, task_id: task_ids[0] })
            .await
            .unwrap();

        assert!(result.newly_completed);
        assert_eq!(result.overview.goals[0].percent.value(), 25);
        assert_eq!(result.overview.completed_tasks[0].description, "Shoes");
        assert!(result.overview.next_tasks.iter().all(|t| t.task.id != task_ids[0]));
    }

    #[tokio::test]
    async fn second_completion_is_reported_as_noop() {
        let store = Arc::new(InMemorySessionStore::new());
        let (id, task_ids) = planned_session(&store, &["Shoes"]).await;
        let handler = CompleteTaskHandler::new(store);
        let cmd = CompleteTaskCommand { session_id: id, task_id: task_ids[0] };

        assert!(handler.handle(cmd.clone()).await.unwrap().newly_completed);
        let again = handler.handle(cmd).await.unwrap();

        assert!(!again.newly_completed);
        assert_eq!(again.overview.completed_tasks.len(), 1);
    }

    #[tokio::test]
    async fn unknown_task_is_not_found() {
        let store = Arc::new(InMemorySessionStore::new());
        let (id, _) = planned_session(&store, &["Shoes"]).await;

        let result = CompleteTaskHandler::new(store)
            .handle(CompleteTaskCommand { session_id: id, task_id: TaskId::new() })
            .await;
        assert!(matches!(result, Err(PlanningError::TaskNotFound(_))));
    }
}
