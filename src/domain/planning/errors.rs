//! Planning-specific error types.

use crate::domain::foundation::{ErrorCode, GoalId, SessionId, TaskId, ValidationError};

use super::ViewState;

/// Errors returned for user actions on a planning session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanningError {
    /// Session was not found.
    SessionNotFound(SessionId),
    /// Goal is not among the suggestions or active goals.
    GoalNotFound(GoalId),
    /// Task is not part of any approved breakdown.
    TaskNotFound(TaskId),
    /// Action is not available from the current view.
    InvalidState { view: ViewState, action: &'static str },
    /// Goal already has an approved breakdown.
    AlreadyPlanned(GoalId),
    /// Approval requested before the breakdown finished.
    BreakdownNotReady,
    /// Validation failed.
    ValidationFailed { field: String, message: String },
    /// Infrastructure error.
    Infrastructure(String),
}

impl PlanningError {
    pub fn invalid_state(view: ViewState, action: &'static str) -> Self {
        PlanningError::InvalidState { view, action }
    }

    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        PlanningError::ValidationFailed {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn infrastructure(message: impl Into<String>) -> Self {
        PlanningError::Infrastructure(message.into())
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            PlanningError::SessionNotFound(_) => ErrorCode::SessionNotFound,
            PlanningError::GoalNotFound(_) => ErrorCode::GoalNotFound,
            PlanningError::TaskNotFound(_) => ErrorCode::TaskNotFound,
            PlanningError::InvalidState { .. } | PlanningError::AlreadyPlanned(_) => {
                ErrorCode::InvalidStateTransition
            }
            PlanningError::BreakdownNotReady => ErrorCode::BreakdownNotReady,
            PlanningError::ValidationFailed { .. } => ErrorCode::ValidationFailed,
            PlanningError::Infrastructure(_) => ErrorCode::InternalError,
        }
    }

    pub fn message(&self) -> String {
        match self {
            PlanningError::SessionNotFound(id) => format!("Session not found: {}", id),
            PlanningError::GoalNotFound(id) => format!("Goal not found: {}", id),
            PlanningError::TaskNotFound(id) => format!("Task not found: {}", id),
            PlanningError::InvalidState { view, action } => {
                format!("Cannot {} while in the {} view", action, view)
            }
            PlanningError::AlreadyPlanned(id) => format!("Goal {} already has a plan", id),
            PlanningError::BreakdownNotReady => "The plan is not ready yet".to_string(),
            PlanningError::ValidationFailed { field, message } => {
                format!("Validation failed for '{}': {}", field, message)
            }
            PlanningError::Infrastructure(msg) => format!("Error: {}", msg),
        }
    }
}

impl std::fmt::Display for PlanningError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for PlanningError {}

impl From<ValidationError> for PlanningError {
    fn from(err: ValidationError) -> Self {
        PlanningError::validation(err.field().to_string(), err.to_string())
    }
}
