//! Goals the user has chosen to work on.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{Breakdown, GoalSuggestion};
use crate::domain::foundation::GoalId;

/// A chosen suggestion, optionally with an approved breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActiveGoal {
    #[serde(flatten)]
    pub goal: GoalSuggestion,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<Breakdown>,
}

impl ActiveGoal {
    pub fn from_suggestion(goal: GoalSuggestion) -> Self {
        Self {
            goal,
            breakdown: None,
        }
    }

    pub fn id(&self) -> &GoalId {
        &self.goal.id
    }

    pub fn title(&self) -> &str {
        &self.goal.title
    }

    pub fn has_breakdown(&self) -> bool {
        self.breakdown.is_some()
    }

    /// The same goal with its breakdown attached.
    pub fn with_breakdown(self, breakdown: Breakdown) -> Self {
        Self {
            breakdown: Some(breakdown),
            ..self
        }
    }
}

/// Appends chosen suggestions whose titles are not already active.
///
/// Titles are compared exactly. Duplicates inside `chosen` collapse to the
/// first occurrence. Returns the number of goals added.
pub fn merge_by_title(active: &mut Vec<ActiveGoal>, chosen: Vec<GoalSuggestion>) -> usize {
    let mut titles: HashSet<String> = active.iter().map(|g| g.title().to_string()).collect();
    let before = active.len();

    for goal in chosen {
        if titles.insert(goal.title.clone()) {
            active.push(ActiveGoal::from_suggestion(goal));
        }
    }

    active.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::goal::{Difficulty, Milestone, Task};

    fn suggestion(title: &str) -> GoalSuggestion {
        GoalSuggestion::new(title, "because", 4, Difficulty::GentleStart)
    }

    #[test]
    fn merge_skips_titles_already_active() {
        let mut active = vec![ActiveGoal::from_suggestion(suggestion("Sleep by 11"))];
        let added = merge_by_title(&mut active, vec![suggestion("Sleep by 11"), suggestion("Walk")]);

        assert_eq!(added, 1);
        assert_eq!(active.len(), 2);
        assert_eq!(active[1].title(), "Walk");
    }

    #[test]
    fn merge_collapses_duplicates_within_the_selection() {
        let mut active = Vec::new();
        let first = suggestion("Walk");
        let first_id = first.id;
        let added = merge_by_title(&mut active, vec![first, suggestion("Walk")]);

        assert_eq!(added, 1);
        assert_eq!(active[0].id(), &first_id);
    }

    #[test]
    fn with_breakdown_keeps_the_goal() {
        let goal = ActiveGoal::from_suggestion(suggestion("Walk"));
        let id = *goal.id();
        let planned = goal.with_breakdown(Breakdown::new(
            vec![Milestone::new("Start", 1, vec![Task::new("Shoes by the door", 1)])],
            "",
            "",
        ));

        assert_eq!(planned.id(), &id);
        assert!(planned.has_breakdown());
    }

    #[test]
    fn active_goal_serializes_flat() {
        let json = serde_json::to_value(ActiveGoal::from_suggestion(suggestion("Walk"))).unwrap();
        assert_eq!(json["title"], "Walk");
        assert!(json.get("breakdown").is_none());
    }
}
