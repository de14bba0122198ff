//! SubmitCheckInHandler - Command handler for the life-area check-in.

use std::sync::Arc;

use super::{GenerationRunner, GenerationStarted};
use crate::domain::check_in::CheckInEntry;
use crate::domain::foundation::SessionId;
use crate::domain::planning::PlanningError;
use crate::ports::PlanningSessionStore;

/// Command to submit the check-in form.
#[derive(Debug, Clone)]
pub struct SubmitCheckInCommand {
    pub session_id: SessionId,
    pub entries: Vec<CheckInEntry>,
}

/// Handler for check-in submission.
pub struct SubmitCheckInHandler {
    store: Arc<dyn PlanningSessionStore>,
    runner: GenerationRunner,
}

impl SubmitCheckInHandler {
    pub fn new(store: Arc<dyn PlanningSessionStore>, runner: GenerationRunner) -> Self {
        Self { store, runner }
    }

    /// Validates the ratings, moves to `Generating` and starts the
    /// suggestion request.
    pub async fn handle(&self, cmd: SubmitCheckInCommand) -> Result<GenerationStarted, PlanningError> {
        let shared = self.store.get(&cmd.session_id).await?;

        let (request_id, ratings, snapshot) = {
            let mut session = shared.lock().await;
            let request_id = session.submit_check_in(cmd.entries)?;
            (request_id, session.ratings().to_vec(), session.clone())
        };

        tracing::info!(
            session_id = %cmd.session_id,
            %request_id,
            rated_areas = ratings.len(),
            "Check-in submitted, requesting suggestions"
        );

        let generation = self.runner.spawn_suggestions(shared, request_id, ratings);
        Ok(GenerationStarted {
            request_id,
            session: snapshot,
            generation,
        })
    }
}
