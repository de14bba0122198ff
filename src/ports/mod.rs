//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `AIProvider` - Structured completions from an LLM
//! - `GoalGateway` - Goal suggestions and breakdowns for the planner
//! - `PlanningSessionStore` - Live planning sessions

mod ai_provider;
mod goal_gateway;
mod planning_session_store;

pub use ai_provider::{
    AIError, AIProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};
pub use goal_gateway::GoalGateway;
pub use planning_session_store::{PlanningSessionStore, SharedSession};
