//! Step-by-step breakdown of a goal into milestones and tasks.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::TaskId;

/// A likely obstacle and a practical way around it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonObstacle {
    pub obstacle: String,
    pub solution: String,
}

/// A single actionable task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub description: String,
    pub detailed_steps: Vec<String>,
    pub estimated_time: String,
    pub when_to_do: String,
    pub what_you_need: Vec<String>,
    pub success_looks_like: String,
    pub common_obstacles: Vec<CommonObstacle>,
    pub next_step_connection: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub celebration_note: Option<String>,
    pub order: i64,
}

impl Task {
    /// Creates a task with a fresh id and empty details.
    pub fn new(description: impl Into<String>, order: i64) -> Self {
        Self {
            id: TaskId::new(),
            description: description.into(),
            detailed_steps: Vec::new(),
            estimated_time: String::new(),
            when_to_do: String::new(),
            what_you_need: Vec::new(),
            success_looks_like: String::new(),
            common_obstacles: Vec::new(),
            next_step_connection: String::new(),
            celebration_note: None,
            order,
        }
    }
}

/// A stage of a breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub duration_weeks: f64,
    pub why_this_milestone: String,
    pub completion_criteria: String,
    pub order: i64,
    pub tasks: Vec<Task>,
}

impl Milestone {
    pub fn new(title: impl Into<String>, order: i64, tasks: Vec<Task>) -> Self {
        Self {
            title: title.into(),
            duration_weeks: 1.0,
            why_this_milestone: String::new(),
            completion_criteria: String::new(),
            order,
            tasks,
        }
    }
}

/// A generated plan for one goal. Immutable once built.
///
/// Milestones are kept sorted by `order` and each milestone's tasks by their
/// own `order`; the sort is stable so ties keep the generated order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Breakdown {
    milestones: Vec<Milestone>,
    overall_approach: String,
    flexibility_note: String,
}

impl Breakdown {
    pub fn new(
        mut milestones: Vec<Milestone>,
        overall_approach: impl Into<String>,
        flexibility_note: impl Into<String>,
    ) -> Self {
        milestones.sort_by_key(|m| m.order);
        for milestone in &mut milestones {
            milestone.tasks.sort_by_key(|t| t.order);
        }
        Self {
            milestones,
            overall_approach: overall_approach.into(),
            flexibility_note: flexibility_note.into(),
        }
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn overall_approach(&self) -> &str {
        &self.overall_approach
    }

    pub fn flexibility_note(&self) -> &str {
        &self.flexibility_note
    }

    /// Tasks in milestone order, then task order, paired with their milestone.
    pub fn tasks(&self) -> impl Iterator<Item = (&Milestone, &Task)> {
        self.milestones
            .iter()
            .flat_map(|m| m.tasks.iter().map(move |t| (m, t)))
    }

    pub fn task_count(&self) -> usize {
        self.milestones.iter().map(|m| m.tasks.len()).sum()
    }

    pub fn find_task(&self, id: &TaskId) -> Option<&Task> {
        self.tasks().map(|(_, t)| t).find(|t| &t.id == id)
    }
}
