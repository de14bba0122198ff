//! Daily progress - per-goal completion and the next tasks to work on.

use serde::Serialize;
use std::collections::HashSet;

use crate::domain::foundation::{GoalId, Percentage, TaskId};
use crate::domain::goal::{ActiveGoal, Task};

/// How many upcoming tasks the daily view shows.
pub const NEXT_TASK_LIMIT: usize = 3;

/// Completion of one active goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GoalProgress {
    pub goal_id: GoalId,
    pub title: String,
    pub has_plan: bool,
    pub completed_tasks: usize,
    pub total_tasks: usize,
    pub percent: Percentage,
}

/// An upcoming task with the context it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NextTask {
    pub goal_id: GoalId,
    pub goal_title: String,
    pub milestone_title: String,
    #[serde(flatten)]
    pub task: Task,
}

/// A task the user has already finished.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompletedTask {
    pub task_id: TaskId,
    pub description: String,
    pub goal_title: String,
}

/// Everything the daily view renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyOverview {
    pub goals: Vec<GoalProgress>,
    pub has_planned_goals: bool,
    pub next_tasks: Vec<NextTask>,
    pub completed_tasks: Vec<CompletedTask>,
}

/// Progress of a single goal. Goals without a plan, or with an empty plan,
/// report zero.
pub fn goal_progress(goal: &ActiveGoal, completed: &HashSet<TaskId>) -> GoalProgress {
    let (done, total) = match &goal.breakdown {
        Some(breakdown) => {
            let done = breakdown
                .tasks()
                .filter(|(_, t)| completed.contains(&t.id))
                .count();
            (done, breakdown.task_count())
        }
        None => (0, 0),
    };

    GoalProgress {
        goal_id: *goal.id(),
        title: goal.title().to_string(),
        has_plan: goal.has_breakdown(),
        completed_tasks: done,
        total_tasks: total,
        percent: Percentage::from_ratio(done, total),
    }
}

/// The first `limit` unfinished tasks across planned goals, in goal order,
/// then milestone order, then task order.
pub fn next_tasks(goals: &[ActiveGoal], completed: &HashSet<TaskId>, limit: usize) -> Vec<NextTask> {
    goals
        .iter()
        .filter_map(|g| g.breakdown.as_ref().map(|b| (g, b)))
        .flat_map(|(goal, breakdown)| {
            breakdown
                .tasks()
                .map(move |(milestone, task)| (goal, milestone, task))
        })
        .filter(|(_, _, task)| !completed.contains(&task.id))
        .take(limit)
        .map(|(goal, milestone, task)| NextTask {
            goal_id: *goal.id(),
            goal_title: goal.title().to_string(),
            milestone_title: milestone.title.clone(),
            task: task.clone(),
        })
        .collect()
}

/// Builds the daily view from the active goals and the completed tasks in
/// the order they were completed.
pub fn daily_overview(goals: &[ActiveGoal], completed_in_order: &[TaskId]) -> DailyOverview {
    let completed: HashSet<TaskId> = completed_in_order.iter().copied().collect();

    let completed_tasks = completed_in_order
        .iter()
        .filter_map(|id| {
            goals.iter().find_map(|goal| {
                goal.breakdown
                    .as_ref()
                    .and_then(|b| b.find_task(id))
                    .map(|task| CompletedTask {
                        task_id: *id,
                        description: task.description.clone(),
                        goal_title: goal.title().to_string(),
                    })
            })
        })
        .collect();

    DailyOverview {
        goals: goals.iter().map(|g| goal_progress(g, &completed)).collect(),
        has_planned_goals: goals.iter().any(ActiveGoal::has_breakdown),
        next_tasks: next_tasks(goals, &completed, NEXT_TASK_LIMIT),
        completed_tasks,
    }
}
