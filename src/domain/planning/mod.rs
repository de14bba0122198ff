//! Planning module - the view state machine and the daily aggregation.

mod errors;
mod generation;
pub mod progress;
mod session;
mod view_state;

pub use errors::PlanningError;
pub use generation::{
    Generation, GenerationError, BREAKDOWN_FAILED_MESSAGE, SUGGESTIONS_FAILED_MESSAGE,
};
pub use progress::{CompletedTask, DailyOverview, GoalProgress, NextTask, NEXT_TASK_LIMIT};
pub use session::PlanningSession;
pub use view_state::ViewState;
