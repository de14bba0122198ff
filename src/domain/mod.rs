//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `check_in` - Life areas, satisfaction scores and check-in validation
//! - `goal` - Suggestions, breakdowns and active goals
//! - `planning` - Planning session aggregate, view state machine and progress

pub mod check_in;
pub mod foundation;
pub mod goal;
pub mod planning;
