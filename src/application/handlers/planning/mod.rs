//! Planning handlers - commands and queries for the goal planning flow.
//!
//! Commands that start a generation return a [`GenerationStarted`] holding
//! the spawned task. HTTP callers detach it; tests await it.

mod approve_breakdown;
mod complete_task;
mod end_session;
mod generation_runner;
mod get_session;
mod leave_breakdown;
mod request_plan;
mod retry_suggestions;
mod select_goals;
mod start_session;
mod submit_check_in;

#[cfg(test)]
pub(crate) mod test_support;

use tokio::task::JoinHandle;

use crate::domain::foundation::RequestId;
use crate::domain::planning::PlanningSession;

pub use approve_breakdown::{ApproveBreakdownHandler, ApproveBreakdownResult};
pub use complete_task::{CompleteTaskCommand, CompleteTaskHandler, CompleteTaskResult};
pub use end_session::{EndSessionHandler, ExpireIdleSessionsHandler};
pub use generation_runner::{GenerationRunner, DEFAULT_GENERATION_TIMEOUT};
pub use get_session::{GetDailyOverviewHandler, GetSessionHandler};
pub use leave_breakdown::LeaveBreakdownHandler;
pub use request_plan::{RequestPlanCommand, RequestPlanHandler};
pub use retry_suggestions::RetrySuggestionsHandler;
pub use select_goals::{SelectGoalsCommand, SelectGoalsHandler, SelectGoalsResult};
pub use start_session::StartSessionHandler;
pub use submit_check_in::{SubmitCheckInCommand, SubmitCheckInHandler};

/// A command that kicked off a gateway request.
#[derive(Debug)]
pub struct GenerationStarted {
    pub request_id: RequestId,
    /// Session as it was right after the request started.
    pub session: PlanningSession,
    /// Completes once the outcome has been applied (or ignored).
    pub generation: JoinHandle<()>,
}
