//! Request and response bodies for the planning endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::check_in::{CheckInEntry, LifeArea, LifeAreaRating, SatisfactionScore, MIN_RATED_AREAS};
use crate::domain::foundation::{GoalId, RequestId, SessionId, TaskId, Timestamp};
use crate::domain::goal::{ActiveGoal, Breakdown, SuggestionSet};
use crate::domain::planning::{DailyOverview, Generation, PlanningSession, ViewState};

// ════════════════════════════════════════════════════════════════════════════════
// Requests
// ════════════════════════════════════════════════════════════════════════════════

/// POST /api/sessions/:id/check-in
#[derive(Debug, Clone, Deserialize)]
pub struct CheckInRequest {
    pub ratings: Vec<CheckInEntry>,
}

/// POST /api/sessions/:id/goals
#[derive(Debug, Clone, Deserialize)]
pub struct SelectGoalsRequest {
    pub goal_ids: Vec<GoalId>,
}

// ════════════════════════════════════════════════════════════════════════════════
// Responses
// ════════════════════════════════════════════════════════════════════════════════

/// State of one generated value.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationResponse<T> {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_id: Option<RequestId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,
}

impl<T: Clone> From<&Generation<T>> for GenerationResponse<T> {
    fn from(generation: &Generation<T>) -> Self {
        let request_id = match generation {
            Generation::Pending { request_id } => Some(*request_id),
            _ => None,
        };
        Self {
            status: generation.status(),
            request_id,
            error: generation.failure_message().map(str::to_string),
            result: generation.ready().cloned(),
        }
    }
}

/// Full session snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    pub session_id: SessionId,
    pub view: ViewState,
    pub ratings: Vec<LifeAreaRating>,
    pub suggestions: GenerationResponse<SuggestionSet>,
    pub active_goals: Vec<ActiveGoal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown_target: Option<GoalId>,
    pub breakdown: GenerationResponse<Breakdown>,
    pub completed_task_ids: Vec<TaskId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&PlanningSession> for SessionResponse {
    fn from(session: &PlanningSession) -> Self {
        Self {
            session_id: *session.id(),
            view: session.current_view(),
            ratings: session.ratings().to_vec(),
            suggestions: session.suggestions().into(),
            active_goals: session.active_goals().to_vec(),
            breakdown_target: session.breakdown_goal().map(|g| *g.id()),
            breakdown: session.breakdown().into(),
            completed_task_ids: session.completed_tasks().to_vec(),
            created_at: *session.created_at(),
            updated_at: *session.updated_at(),
        }
    }
}

/// Returned when a command started a generation (202 Accepted).
#[derive(Debug, Clone, Serialize)]
pub struct GenerationStartedResponse {
    pub request_id: RequestId,
    pub session: SessionResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct SelectGoalsResponse {
    pub added: usize,
    pub session: SessionResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct ApproveBreakdownResponse {
    pub goal_id: GoalId,
    pub session: SessionResponse,
}

#[derive(Debug, Clone, Serialize)]
pub struct CompleteTaskResponse {
    pub newly_completed: bool,
    pub overview: DailyOverview,
}

/// One entry of the check-in form.
#[derive(Debug, Clone, Serialize)]
pub struct LifeAreaResponse {
    pub id: LifeArea,
    pub name: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoreLabelResponse {
    pub value: u8,
    pub label: &'static str,
}

/// GET /api/life-areas
#[derive(Debug, Clone, Serialize)]
pub struct LifeAreasResponse {
    pub life_areas: Vec<LifeAreaResponse>,
    pub score_labels: Vec<ScoreLabelResponse>,
    pub min_rated_areas: usize,
}

impl LifeAreasResponse {
    pub fn catalog() -> Self {
        Self {
            life_areas: LifeArea::ALL
                .iter()
                .map(|area| LifeAreaResponse {
                    id: *area,
                    name: area.display_name(),
                })
                .collect(),
            score_labels: (SatisfactionScore::MIN..=SatisfactionScore::MAX)
                .filter_map(|value| {
                    SatisfactionScore::label_for(value).map(|label| ScoreLabelResponse { value, label })
                })
                .collect(),
            min_rated_areas: MIN_RATED_AREAS,
        }
    }
}

/// Error body for every planning endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
