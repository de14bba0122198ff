//! Route configuration for planning endpoints.

use axum::routing::{get, post};
use axum::Router;

use super::handlers::{
    approve_breakdown, complete_task, end_session, get_session, get_today, leave_breakdown,
    request_plan, retry_suggestions, select_goals, start_session, submit_check_in,
    PlanningAppState,
};

/// Creates the planning router. Nest it under `/api/sessions`.
///
/// Routes:
/// - `POST /` - Start a session
/// - `GET /:id` - Session snapshot
/// - `DELETE /:id` - Close a session
/// - `POST /:id/check-in` - Submit ratings
/// - `POST /:id/suggestions/retry` - Retry failed suggestions
/// - `POST /:id/goals` - Select suggestions
/// - `POST /:id/goals/:goal_id/plan` - Request a breakdown
/// - `POST /:id/breakdown/approve` - Approve the breakdown
/// - `POST /:id/breakdown/back` - Back out to the daily view
/// - `GET /:id/today` - Daily overview
/// - `POST /:id/tasks/:task_id/complete` - Complete a task
pub fn planning_routes() -> Router<PlanningAppState> {
    Router::new()
        .route("/", post(start_session))
        .route("/:id", get(get_session).delete(end_session))
        .route("/:id/check-in", post(submit_check_in))
        .route("/:id/suggestions/retry", post(retry_suggestions))
        .route("/:id/goals", post(select_goals))
        .route("/:id/goals/:goal_id/plan", post(request_plan))
        .route("/:id/breakdown/approve", post(approve_breakdown))
        .route("/:id/breakdown/back", post(leave_breakdown))
        .route("/:id/today", get(get_today))
        .route("/:id/tasks/:task_id/complete", post(complete_task))
}
