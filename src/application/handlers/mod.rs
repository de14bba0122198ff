//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod planning;

pub use planning::{
    ApproveBreakdownHandler, ApproveBreakdownResult, CompleteTaskCommand, CompleteTaskHandler,
    CompleteTaskResult, EndSessionHandler, ExpireIdleSessionsHandler, GenerationRunner,
    GenerationStarted, GetDailyOverviewHandler, GetSessionHandler, LeaveBreakdownHandler,
    RequestPlanCommand, RequestPlanHandler, RetrySuggestionsHandler, SelectGoalsCommand,
    SelectGoalsHandler, SelectGoalsResult, StartSessionHandler, SubmitCheckInCommand,
    SubmitCheckInHandler, DEFAULT_GENERATION_TIMEOUT,
};
