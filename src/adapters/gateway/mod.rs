//! Goal gateway adapters.

mod ai_goal_gateway;

pub use ai_goal_gateway::AiGoalGateway;
