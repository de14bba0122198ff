//! Goal Gateway Port - Produces goal suggestions and breakdowns.
//!
//! The planning aggregate never talks to an AI service directly. It asks this
//! port for suggestions or a breakdown and stores whatever comes back. Every
//! failure collapses into [`GenerationError`], which already carries the
//! message to show the user.

use async_trait::async_trait;

use crate::domain::check_in::LifeAreaRating;
use crate::domain::goal::{Breakdown, GoalSuggestion, SuggestionSet};
use crate::domain::planning::GenerationError;

#[async_trait]
pub trait GoalGateway: Send + Sync {
    /// Suggests goals from a completed check-in.
    async fn request_suggestions(
        &self,
        ratings: &[LifeAreaRating],
    ) -> Result<SuggestionSet, GenerationError>;

    /// Breaks one goal into milestones and tasks.
    async fn request_breakdown(
        &self,
        goal: &GoalSuggestion,
        ratings: &[LifeAreaRating],
    ) -> Result<Breakdown, GenerationError>;
}
