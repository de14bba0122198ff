//! GenerationRunner - Runs gateway calls off the session lock.
//!
//! The runner spawns one tokio task per request. The task calls the gateway
//! with a deadline, then locks the session and hands the outcome to the
//! aggregate, which drops it if the request is no longer current.

use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::domain::check_in::LifeAreaRating;
use crate::domain::foundation::RequestId;
use crate::domain::goal::GoalSuggestion;
use crate::domain::planning::GenerationError;
use crate::ports::{GoalGateway, SharedSession};

/// Default deadline for a single gateway call.
pub const DEFAULT_GENERATION_TIMEOUT: Duration = Duration::from_secs(120);

/// Spawns suggestion and breakdown requests.
#[derive(Clone)]
pub struct GenerationRunner {
    gateway: Arc<dyn GoalGateway>,
    timeout: Duration,
}

impl GenerationRunner {
    pub fn new(gateway: Arc<dyn GoalGateway>, timeout: Duration) -> Self {
        Self { gateway, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Requests suggestions and applies them to the session when done.
    pub fn spawn_suggestions(
        &self,
        session: SharedSession,
        request_id: RequestId,
        ratings: Vec<LifeAreaRating>,
    ) -> JoinHandle<()> {
        let gateway = Arc::clone(&self.gateway);
        let timeout = self.timeout;

        tokio::spawn(async move {
            let outcome = tokio::time::timeout(timeout, gateway.request_suggestions(&ratings))
                .await
                .unwrap_or_else(|_| {
                    tracing::error!(%request_id, timeout_secs = timeout.as_secs(), "Goal suggestions timed out");
                    Err(GenerationError::suggestions())
                });

            let succeeded = outcome.is_ok();
            let mut session = session.lock().await;
            if session.receive_suggestions(request_id, outcome) {
                tracing::info!(session_id = %session.id(), %request_id, succeeded, "Suggestions received");
            }
        })
    }

    /// Requests a breakdown and applies it to the session when done.
    pub fn spawn_breakdown(
        &self,
        session: SharedSession,
        request_id: RequestId,
        goal: GoalSuggestion,
        ratings: Vec<LifeAreaRating>,
    ) -> JoinHandle<()> {
        let gateway = Arc::clone(&self.gateway);
        let timeout = self.timeout;

        tokio::spawn(async move {
            let outcome = tokio::time::timeout(timeout, gateway.request_breakdown(&goal, &ratings))
                .await
                .unwrap_or_else(|_| {
                    tracing::error!(%request_id, goal_id = %goal.id, timeout_secs = timeout.as_secs(), "Goal breakdown timed out");
                    Err(GenerationError::breakdown())
                });

            let succeeded = outcome.is_ok();
            let mut session = session.lock().await;
            if session.receive_breakdown(request_id, outcome) {
                tracing::info!(session_id = %session.id(), %request_id, succeeded, "Breakdown received");
            }
        })
    }
}
