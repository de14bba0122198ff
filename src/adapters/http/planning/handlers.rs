//! HTTP handlers for planning endpoints.

use std::str::FromStr;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::planning::{
    ApproveBreakdownHandler, CompleteTaskCommand, CompleteTaskHandler, EndSessionHandler,
    GenerationRunner,
    GenerationStarted, GetDailyOverviewHandler, GetSessionHandler, LeaveBreakdownHandler,
    RequestPlanCommand, RequestPlanHandler, RetrySuggestionsHandler, SelectGoalsCommand,
    SelectGoalsHandler, StartSessionHandler, SubmitCheckInCommand, SubmitCheckInHandler,
};
use crate::domain::foundation::{GoalId, SessionId, TaskId};
use crate::domain::planning::PlanningError;
use crate::ports::PlanningSessionStore;

use super::dto::{
    ApproveBreakdownResponse, CheckInRequest, CompleteTaskResponse, ErrorResponse,
    GenerationStartedResponse, LifeAreasResponse, SelectGoalsRequest, SelectGoalsResponse,
    SessionResponse,
};

// ════════════════════════════════════════════════════════════════════════════════
// Application State
// ════════════════════════════════════════════════════════════════════════════════

/// Shared state for planning endpoints.
#[derive(Clone)]
pub struct PlanningAppState {
    pub store: Arc<dyn PlanningSessionStore>,
    pub runner: GenerationRunner,
}

impl PlanningAppState {
    pub fn new(store: Arc<dyn PlanningSessionStore>, runner: GenerationRunner) -> Self {
        Self { store, runner }
    }

    pub fn start_session_handler(&self) -> StartSessionHandler {
        StartSessionHandler::new(self.store.clone())
    }

    pub fn end_session_handler(&self) -> EndSessionHandler {
        EndSessionHandler::new(self.store.clone())
    }

    pub fn get_session_handler(&self) -> GetSessionHandler {
        GetSessionHandler::new(self.store.clone())
    }

    pub fn submit_check_in_handler(&self) -> SubmitCheckInHandler {
        SubmitCheckInHandler::new(self.store.clone(), self.runner.clone())
    }

    pub fn retry_suggestions_handler(&self) -> RetrySuggestionsHandler {
        RetrySuggestionsHandler::new(self.store.clone(), self.runner.clone())
    }

    pub fn select_goals_handler(&self) -> SelectGoalsHandler {
        SelectGoalsHandler::new(self.store.clone())
    }

    pub fn request_plan_handler(&self) -> RequestPlanHandler {
        RequestPlanHandler::new(self.store.clone(), self.runner.clone())
    }

    pub fn approve_breakdown_handler(&self) -> ApproveBreakdownHandler {
        ApproveBreakdownHandler::new(self.store.clone())
    }

    pub fn leave_breakdown_handler(&self) -> LeaveBreakdownHandler {
        LeaveBreakdownHandler::new(self.store.clone())
    }

    pub fn daily_overview_handler(&self) -> GetDailyOverviewHandler {
        GetDailyOverviewHandler::new(self.store.clone())
    }

    pub fn complete_task_handler(&self) -> CompleteTaskHandler {
        CompleteTaskHandler::new(self.store.clone())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Error Handling
// ════════════════════════════════════════════════════════════════════════════════

/// API error wrapper that converts planning errors to HTTP responses.
#[derive(Debug)]
pub struct PlanningApiError(PlanningError);

impl From<PlanningError> for PlanningApiError {
    fn from(err: PlanningError) -> Self {
        Self(err)
    }
}

impl PlanningApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            PlanningError::SessionNotFound(_)
            | PlanningError::GoalNotFound(_)
            | PlanningError::TaskNotFound(_) => StatusCode::NOT_FOUND,
            PlanningError::InvalidState { .. }
            | PlanningError::AlreadyPlanned(_)
            | PlanningError::BreakdownNotReady => StatusCode::CONFLICT,
            PlanningError::ValidationFailed { .. } => StatusCode::BAD_REQUEST,
            PlanningError::Infrastructure(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for PlanningApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self.0, "Planning request failed");
        }
        let body = ErrorResponse::new(self.0.code().to_string(), self.0.message());
        (status, Json(body)).into_response()
    }
}

/// Parses a path segment into a typed id.
fn parse_id<T: FromStr>(raw: &str, field: &str) -> Result<T, PlanningApiError> {
    raw.parse::<T>()
        .map_err(|_| PlanningError::validation(field, format!("Invalid {}: {}", field, raw)).into())
}

fn accepted(started: GenerationStarted) -> Response {
    // The spawned task applies its own result; the caller polls the session.
    drop(started.generation);
    let body = GenerationStartedResponse {
        request_id: started.request_id,
        session: SessionResponse::from(&started.session),
    };
    (StatusCode::ACCEPTED, Json(body)).into_response()
}

// ════════════════════════════════════════════════════════════════════════════════
// Catalog
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/life-areas - Life areas and score labels for the check-in form
pub async fn list_life_areas() -> Json<LifeAreasResponse> {
    Json(LifeAreasResponse::catalog())
}

// ════════════════════════════════════════════════════════════════════════════════
// Session
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions - Start a planning session
pub async fn start_session(
    State(state): State<PlanningAppState>,
) -> Result<impl IntoResponse, PlanningApiError> {
    let session = state.start_session_handler().handle().await?;
    Ok((StatusCode::CREATED, Json(SessionResponse::from(&session))))
}

/// GET /api/sessions/:id - Full session snapshot
pub async fn get_session(
    State(state): State<PlanningAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, PlanningApiError> {
    let session_id: SessionId = parse_id(&session_id, "session_id")?;
    let session = state.get_session_handler().handle(session_id).await?;
    Ok(Json(SessionResponse::from(&session)))
}

/// DELETE /api/sessions/:id - Close a session
pub async fn end_session(
    State(state): State<PlanningAppState>,
    Path(session_id): Path<String>,
) -> Result<StatusCode, PlanningApiError> {
    let session_id: SessionId = parse_id(&session_id, "session_id")?;
    state.end_session_handler().handle(session_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/sessions/:id/check-in - Submit ratings and request suggestions
pub async fn submit_check_in(
    State(state): State<PlanningAppState>,
    Path(session_id): Path<String>,
    Json(req): Json<CheckInRequest>,
) -> Result<Response, PlanningApiError> {
    let cmd = SubmitCheckInCommand {
        session_id: parse_id(&session_id, "session_id")?,
        entries: req.ratings,
    };
    let started = state.submit_check_in_handler().handle(cmd).await?;
    Ok(accepted(started))
}

/// POST /api/sessions/:id/suggestions/retry - Retry after a failed request
pub async fn retry_suggestions(
    State(state): State<PlanningAppState>,
    Path(session_id): Path<String>,
) -> Result<Response, PlanningApiError> {
    let session_id: SessionId = parse_id(&session_id, "session_id")?;
    let started = state.retry_suggestions_handler().handle(session_id).await?;
    Ok(accepted(started))
}

/// POST /api/sessions/:id/goals - Start the chosen suggestions
pub async fn select_goals(
    State(state): State<PlanningAppState>,
    Path(session_id): Path<String>,
    Json(req): Json<SelectGoalsRequest>,
) -> Result<impl IntoResponse, PlanningApiError> {
    let cmd = SelectGoalsCommand {
        session_id: parse_id(&session_id, "session_id")?,
        goal_ids: req.goal_ids,
    };
    let result = state.select_goals_handler().handle(cmd).await?;
    Ok(Json(SelectGoalsResponse {
        added: result.added,
        session: SessionResponse::from(&result.session),
    }))
}

// ════════════════════════════════════════════════════════════════════════════════
// Breakdown
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions/:id/goals/:goal_id/plan - Request a breakdown
pub async fn request_plan(
    State(state): State<PlanningAppState>,
    Path((session_id, goal_id)): Path<(String, String)>,
) -> Result<Response, PlanningApiError> {
    let cmd = RequestPlanCommand {
        session_id: parse_id(&session_id, "session_id")?,
        goal_id: parse_id::<GoalId>(&goal_id, "goal_id")?,
    };
    let started = state.request_plan_handler().handle(cmd).await?;
    Ok(accepted(started))
}

/// POST /api/sessions/:id/breakdown/approve - Accept the ready breakdown
pub async fn approve_breakdown(
    State(state): State<PlanningAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, PlanningApiError> {
    let session_id: SessionId = parse_id(&session_id, "session_id")?;
    let result = state.approve_breakdown_handler().handle(session_id).await?;
    Ok(Json(ApproveBreakdownResponse {
        goal_id: result.goal_id,
        session: SessionResponse::from(&result.session),
    }))
}

/// POST /api/sessions/:id/breakdown/back - Return to the daily view
pub async fn leave_breakdown(
    State(state): State<PlanningAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, PlanningApiError> {
    let session_id: SessionId = parse_id(&session_id, "session_id")?;
    let session = state.leave_breakdown_handler().handle(session_id).await?;
    Ok(Json(SessionResponse::from(&session)))
}

// ════════════════════════════════════════════════════════════════════════════════
// Daily
// ════════════════════════════════════════════════════════════════════════════════

/// GET /api/sessions/:id/today - Progress, next tasks and completed tasks
pub async fn get_today(
    State(state): State<PlanningAppState>,
    Path(session_id): Path<String>,
) -> Result<impl IntoResponse, PlanningApiError> {
    let session_id: SessionId = parse_id(&session_id, "session_id")?;
    let overview = state.daily_overview_handler().handle(session_id).await?;
    Ok(Json(overview))
}

/// POST /api/sessions/:id/tasks/:task_id/complete - Check off a task
pub async fn complete_task(
    State(state): State<PlanningAppState>,
    Path((session_id, task_id)): Path<(String, String)>,
) -> Result<impl IntoResponse, PlanningApiError> {
    let cmd = CompleteTaskCommand {
        session_id: parse_id(&session_id, "session_id")?,
        task_id: parse_id::<TaskId>(&task_id, "task_id")?,
    };
    let result = state.complete_task_handler().handle(cmd).await?;
    Ok(Json(CompleteTaskResponse {
        newly_completed: result.newly_completed,
        overview: result.overview,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_matches_error_kind() {
        let cases = [
            (PlanningError::SessionNotFound(SessionId::new()), StatusCode::NOT_FOUND),
            (PlanningError::TaskNotFound(TaskId::new()), StatusCode::NOT_FOUND),
            (PlanningError::BreakdownNotReady, StatusCode::CONFLICT),
            (PlanningError::AlreadyPlanned(GoalId::new()), StatusCode::CONFLICT),
            (PlanningError::validation("goal_ids", "empty"), StatusCode::BAD_REQUEST),
            (PlanningError::infrastructure("boom"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, expected) in cases {
            assert_eq!(PlanningApiError::from(error).status(), expected);
        }
    }

    #[test]
    fn bad_id_is_validation_error() {
        let err = parse_id::<SessionId>("not-a-uuid", "session_id").unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
