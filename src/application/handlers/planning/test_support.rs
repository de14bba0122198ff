//! Shared fakes for planning handler tests.

use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::adapters::storage::InMemorySessionStore;
use crate::domain::check_in::{CheckInEntry, LifeArea, LifeAreaRating};
use crate::domain::foundation::{GoalId, SessionId, TaskId};
use crate::domain::goal::{Breakdown, Difficulty, GoalSuggestion, Milestone, SuggestionSet, Task};
use crate::domain::planning::{GenerationError, PlanningSession};
use crate::ports::{GoalGateway, PlanningSessionStore};

/// Gateway returning scripted outcomes in order.
#[derive(Clone, Default)]
pub struct FakeGateway {
    suggestions: Arc<Mutex<VecDeque<Result<SuggestionSet, GenerationError>>>>,
    breakdowns: Arc<Mutex<VecDeque<Result<Breakdown, GenerationError>>>>,
    delay: Duration,
}

impl FakeGateway {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_suggestions(self, outcome: Result<SuggestionSet, GenerationError>) -> Self {
        self.suggestions.lock().unwrap().push_back(outcome);
        self
    }

    pub fn with_breakdown(self, outcome: Result<Breakdown, GenerationError>) -> Self {
        self.breakdowns.lock().unwrap().push_back(outcome);
        self
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl GoalGateway for FakeGateway {
    async fn request_suggestions(
        &self,
        _ratings: &[LifeAreaRating],
    ) -> Result<SuggestionSet, GenerationError> {
        tokio::time::sleep(self.delay).await;
        let next = self.suggestions.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(GenerationError::suggestions()))
    }

    async fn request_breakdown(
        &self,
        _goal: &GoalSuggestion,
        _ratings: &[LifeAreaRating],
    ) -> Result<Breakdown, GenerationError> {
        tokio::time::sleep(self.delay).await;
        let next = self.breakdowns.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Err(GenerationError::breakdown()))
    }
}

pub fn check_in_entries() -> Vec<CheckInEntry> {
    [(LifeArea::PhysicalHealth, 4), (LifeArea::Finances, 2), (LifeArea::MentalHealth, 1)]
        .into_iter()
        .map(|(area, score)| CheckInEntry {
            life_area: Some(area),
            rating: Some(score),
            ..Default::default()
        })
        .collect()
}

pub fn suggestion_set(titles: &[&str]) -> SuggestionSet {
    SuggestionSet::new(
        titles
            .iter()
            .map(|t| GoalSuggestion::new(*t, "why", 6, Difficulty::ModerateEffort))
            .collect(),
        "Go gently.",
    )
}

pub fn breakdown(tasks: &[&str]) -> Breakdown {
    let tasks = tasks
        .iter()
        .enumerate()
        .map(|(i, d)| Task::new(*d, i as i64 + 1))
        .collect();
    Breakdown::new(vec![Milestone::new("Start", 1, tasks)], "Small steps", "Rest when needed")
}

/// Inserts a session already in the daily view with the given goals active.
/// Returns the session id and the active goal ids in order.
pub async fn daily_session(store: &InMemorySessionStore, titles: &[&str]) -> (SessionId, Vec<GoalId>) {
    let id = SessionId::new();
    let mut session = PlanningSession::new(id);
    let request = session.submit_check_in(check_in_entries()).unwrap();
    let set = suggestion_set(titles);
    let goal_ids: Vec<GoalId> = set.goals.iter().map(|g| g.id).collect();
    session.receive_suggestions(request, Ok(set));
    session.select_goals(&goal_ids).unwrap();
    store.insert(session).await.unwrap();
    (id, goal_ids)
}

/// Inserts a daily-view session whose first goal has an approved plan.
/// Returns the session id and the task ids of that plan.
pub async fn planned_session(store: &InMemorySessionStore, tasks: &[&str]) -> (SessionId, Vec<TaskId>) {
    let id = SessionId::new();
    let mut session = PlanningSession::new(id);
    let request = session.submit_check_in(check_in_entries()).unwrap();
    let set = suggestion_set(&["Walk", "Budget"]);
    let goal_ids: Vec<GoalId> = set.goals.iter().map(|g| g.id).collect();
    session.receive_suggestions(request, Ok(set));
    session.select_goals(&goal_ids).unwrap();

    let plan = breakdown(tasks);
    let task_ids = plan.tasks().map(|(_, t)| t.id).collect();
    let request = session.request_plan(goal_ids[0]).unwrap();
    session.receive_breakdown(request, Ok(plan));
    session.approve_breakdown().unwrap();

    store.insert(session).await.unwrap();
    (id, task_ids)
}
