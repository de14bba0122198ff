//! Goal module - suggestions, breakdowns and active goals.

mod active_goal;
mod breakdown;
mod suggestion;

pub use active_goal::{merge_by_title, ActiveGoal};
pub use breakdown::{Breakdown, CommonObstacle, Milestone, Task};
pub use suggestion::{Difficulty, GoalSuggestion, SuggestionSet};
