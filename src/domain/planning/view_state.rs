//! Screens a planning session moves through.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// The view a planning session is currently showing.
///
/// `CheckIn` is initial. There is no terminal view; `Daily` is home.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewState {
    #[default]
    CheckIn,
    Generating,
    ViewingSuggestions,
    ViewingBreakdown,
    Daily,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::CheckIn => "check_in",
            ViewState::Generating => "generating",
            ViewState::ViewingSuggestions => "viewing_suggestions",
            ViewState::ViewingBreakdown => "viewing_breakdown",
            ViewState::Daily => "daily",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl StateMachine for ViewState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use ViewState::*;
        matches!(
            (self, target),
            (CheckIn, Generating)
                | (Generating, ViewingSuggestions)
                | (ViewingSuggestions, Generating)
                | (ViewingSuggestions, Daily)
                | (Daily, ViewingBreakdown)
                | (ViewingBreakdown, Daily)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use ViewState::*;
        match self {
            CheckIn => vec![Generating],
            Generating => vec![ViewingSuggestions],
            ViewingSuggestions => vec![Generating, Daily],
            ViewingBreakdown => vec![Daily],
            Daily => vec![ViewingBreakdown],
        }
    }
}
