//! Planning session aggregate.
//!
//! A session walks one visitor from check-in to the daily view and owns
//! everything produced along the way: ratings, suggestions, active goals,
//! the breakdown under review and the completed tasks.
//!
//! # Invariants
//!
//! - `active_goals` holds at most one goal per title
//! - `ViewingBreakdown` always has a `breakdown_target` naming an active goal
//!   without a plan; anything else heals to `Daily`
//! - `completed_tasks` has no duplicates

use crate::domain::check_in::{ratings_from_entries, CheckInEntry, LifeAreaRating};
use crate::domain::foundation::{GoalId, RequestId, SessionId, StateMachine, TaskId, Timestamp};
use crate::domain::goal::{merge_by_title, ActiveGoal, Breakdown, GoalSuggestion, SuggestionSet};

use super::progress::{daily_overview, DailyOverview};
use super::{Generation, GenerationError, PlanningError, ViewState};

/// Planning session aggregate.
#[derive(Debug, Clone)]
pub struct PlanningSession {
    id: SessionId,
    view: ViewState,
    ratings: Vec<LifeAreaRating>,
    suggestions: Generation<SuggestionSet>,
    active_goals: Vec<ActiveGoal>,
    breakdown_target: Option<GoalId>,
    breakdown: Generation<Breakdown>,
    completed_tasks: Vec<TaskId>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl PlanningSession {
    /// Creates a session at the check-in view.
    pub fn new(id: SessionId) -> Self {
        let now = Timestamp::now();
        Self {
            id,
            view: ViewState::CheckIn,
            ratings: Vec::new(),
            suggestions: Generation::Idle,
            active_goals: Vec::new(),
            breakdown_target: None,
            breakdown: Generation::Idle,
            completed_tasks: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn id(&self) -> &SessionId {
        &self.id
    }

    /// The view as stored. Prefer [`PlanningSession::current_view`] for display.
    pub fn view(&self) -> ViewState {
        self.view
    }

    /// The view a user should see, with inconsistent breakdown state folded
    /// back to `Daily`.
    pub fn current_view(&self) -> ViewState {
        if self.view == ViewState::ViewingBreakdown && self.breakdown_goal().is_none() {
            ViewState::Daily
        } else {
            self.view
        }
    }

    pub fn ratings(&self) -> &[LifeAreaRating] {
        &self.ratings
    }

    pub fn suggestions(&self) -> &Generation<SuggestionSet> {
        &self.suggestions
    }

    pub fn active_goals(&self) -> &[ActiveGoal] {
        &self.active_goals
    }

    pub fn find_goal(&self, id: &GoalId) -> Option<&ActiveGoal> {
        self.active_goals.iter().find(|g| g.id() == id)
    }

    pub fn breakdown_target(&self) -> Option<&GoalId> {
        self.breakdown_target.as_ref()
    }

    /// The active goal currently being planned, if the target is valid.
    pub fn breakdown_goal(&self) -> Option<&ActiveGoal> {
        self.breakdown_target
            .as_ref()
            .and_then(|id| self.find_goal(id))
            .filter(|g| !g.has_breakdown())
    }

    pub fn breakdown(&self) -> &Generation<Breakdown> {
        &self.breakdown
    }

    pub fn completed_tasks(&self) -> &[TaskId] {
        &self.completed_tasks
    }

    pub fn created_at(&self) -> &Timestamp {
        &self.created_at
    }

    pub fn updated_at(&self) -> &Timestamp {
        &self.updated_at
    }

    pub fn daily_overview(&self) -> DailyOverview {
        daily_overview(&self.active_goals, &self.completed_tasks)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Check-in and suggestions
    // ─────────────────────────────────────────────────────────────────────────

    /// Submits the check-in and starts suggestion generation.
    ///
    /// # Errors
    ///
    /// - `InvalidState` outside the check-in view
    /// - `ValidationFailed` with fewer than three rated areas
    pub fn submit_check_in(&mut self, entries: Vec<CheckInEntry>) -> Result<RequestId, PlanningError> {
        self.ensure_view(ViewState::CheckIn, "submit a check-in")?;
        let ratings = ratings_from_entries(entries)?;

        self.transition(ViewState::Generating, "submit a check-in")?;
        self.ratings = ratings;
        let request_id = self.suggestions.begin();
        self.touch();
        Ok(request_id)
    }

    /// Retries suggestion generation after a failure.
    pub fn retry_suggestions(&mut self) -> Result<RequestId, PlanningError> {
        self.ensure_view(ViewState::ViewingSuggestions, "retry suggestions")?;
        if !self.suggestions.is_failed() {
            return Err(PlanningError::invalid_state(self.view, "retry suggestions"));
        }

        self.transition(ViewState::Generating, "retry suggestions")?;
        let request_id = self.suggestions.begin();
        self.touch();
        Ok(request_id)
    }

    /// Applies a finished suggestion request. Returns false when the
    /// completion is stale and was ignored.
    pub fn receive_suggestions(
        &mut self,
        request_id: RequestId,
        outcome: Result<SuggestionSet, GenerationError>,
    ) -> bool {
        if self.view != ViewState::Generating || !self.suggestions.resolve(request_id, outcome) {
            tracing::debug!(session_id = %self.id, %request_id, "Ignoring stale suggestion response");
            return false;
        }
        self.view = ViewState::ViewingSuggestions;
        self.touch();
        true
    }

    /// Starts the chosen suggestions and moves to the daily view.
    ///
    /// Suggestions are taken in the order they were generated. Titles that
    /// are already active are skipped. Returns the number of goals added.
    pub fn select_goals(&mut self, goal_ids: &[GoalId]) -> Result<usize, PlanningError> {
        self.ensure_view(ViewState::ViewingSuggestions, "select goals")?;
        let set = self
            .suggestions
            .ready()
            .ok_or_else(|| PlanningError::invalid_state(self.view, "select goals"))?;

        if goal_ids.is_empty() {
            return Err(PlanningError::validation("goal_ids", "Select at least one goal"));
        }
        if let Some(missing) = goal_ids.iter().find(|id| set.find(id).is_none()) {
            return Err(PlanningError::GoalNotFound(*missing));
        }

        let chosen: Vec<GoalSuggestion> = set
            .goals
            .iter()
            .filter(|g| goal_ids.contains(&g.id))
            .cloned()
            .collect();

        self.transition(ViewState::Daily, "select goals")?;
        let added = merge_by_title(&mut self.active_goals, chosen);
        self.suggestions.reset();
        self.touch();
        Ok(added)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Breakdown
    // ─────────────────────────────────────────────────────────────────────────

    /// Starts a breakdown for a goal that has no plan yet.
    pub fn request_plan(&mut self, goal_id: GoalId) -> Result<RequestId, PlanningError> {
        self.heal();
        self.ensure_view(ViewState::Daily, "create a plan")?;
        let goal = self
            .find_goal(&goal_id)
            .ok_or(PlanningError::GoalNotFound(goal_id))?;
        if goal.has_breakdown() {
            return Err(PlanningError::AlreadyPlanned(goal_id));
        }

        self.transition(ViewState::ViewingBreakdown, "create a plan")?;
        self.breakdown_target = Some(goal_id);
        let request_id = self.breakdown.begin();
        self.touch();
        Ok(request_id)
    }

    /// Applies a finished breakdown request. Responses for a breakdown the
    /// user already left are ignored.
    pub fn receive_breakdown(
        &mut self,
        request_id: RequestId,
        outcome: Result<Breakdown, GenerationError>,
    ) -> bool {
        if self.view != ViewState::ViewingBreakdown || !self.breakdown.resolve(request_id, outcome) {
            tracing::debug!(session_id = %self.id, %request_id, "Ignoring stale breakdown response");
            return false;
        }
        self.touch();
        true
    }

    /// Attaches the ready breakdown to its goal and returns to the daily view.
    pub fn approve_breakdown(&mut self) -> Result<GoalId, PlanningError> {
        self.heal();
        self.ensure_view(ViewState::ViewingBreakdown, "approve a plan")?;
        let target = self
            .breakdown_goal()
            .map(|g| *g.id())
            .ok_or_else(|| PlanningError::invalid_state(self.view, "approve a plan"))?;
        if self.breakdown.ready().is_none() {
            return Err(PlanningError::BreakdownNotReady);
        }

        self.transition(ViewState::Daily, "approve a plan")?;
        if let Some(breakdown) = self.breakdown.take_ready() {
            if let Some(slot) = self.active_goals.iter_mut().find(|g| g.id() == &target) {
                *slot = slot.clone().with_breakdown(breakdown);
            }
        }
        self.breakdown_target = None;
        self.touch();
        Ok(target)
    }

    /// Leaves the breakdown view, discarding any pending or finished plan.
    ///
    /// Calling this from the daily view is a no-op.
    pub fn leave_breakdown(&mut self) -> Result<(), PlanningError> {
        self.heal();
        if self.view == ViewState::Daily {
            return Ok(());
        }
        self.transition(ViewState::Daily, "leave the plan")?;
        self.breakdown_target = None;
        self.breakdown.reset();
        self.touch();
        Ok(())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Daily tasks
    // ─────────────────────────────────────────────────────────────────────────

    /// Marks a task as done. Returns false if it was already done.
    pub fn complete_task(&mut self, task_id: TaskId) -> Result<bool, PlanningError> {
        self.heal();
        self.ensure_view(ViewState::Daily, "complete a task")?;
        let known = self
            .active_goals
            .iter()
            .filter_map(|g| g.breakdown.as_ref())
            .any(|b| b.find_task(&task_id).is_some());
        if !known {
            return Err(PlanningError::TaskNotFound(task_id));
        }
        if self.completed_tasks.contains(&task_id) {
            return Ok(false);
        }
        self.completed_tasks.push(task_id);
        self.touch();
        Ok(true)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Internals
    // ─────────────────────────────────────────────────────────────────────────

    /// Folds an inconsistent breakdown view back to `Daily`. Returns true if
    /// anything changed.
    pub fn heal(&mut self) -> bool {
        if self.view != ViewState::ViewingBreakdown || self.breakdown_goal().is_some() {
            return false;
        }
        tracing::warn!(
            session_id = %self.id,
            target = ?self.breakdown_target,
            "Breakdown view without a valid target, returning to daily view"
        );
        self.view = ViewState::Daily;
        self.breakdown_target = None;
        self.breakdown.reset();
        self.touch();
        true
    }

    fn ensure_view(&self, expected: ViewState, action: &'static str) -> Result<(), PlanningError> {
        if self.view != expected {
            return Err(PlanningError::invalid_state(self.view, action));
        }
        Ok(())
    }

    fn transition(&mut self, target: ViewState, action: &'static str) -> Result<(), PlanningError> {
        let from = self.view;
        self.view = from
            .transition_to(target)
            .map_err(|_| PlanningError::invalid_state(from, action))?;
        tracing::debug!(session_id = %self.id, %from, to = %target, "View transition");
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }

    #[cfg(test)]
    pub(crate) fn force_view(&mut self, view: ViewState, target: Option<GoalId>) {
        self.view = view;
        self.breakdown_target = target;
    }
}
