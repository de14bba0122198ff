//! Goal suggestions produced by the gateway.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{GoalId, ValidationError};

/// How demanding a suggested goal is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    #[serde(rename = "Gentle start")]
    GentleStart,
    #[serde(rename = "Moderate effort")]
    ModerateEffort,
    #[serde(rename = "Ambitious")]
    Ambitious,
}

impl Difficulty {
    /// The three values in the order the schema lists them.
    pub const ALL: [Difficulty; 3] = [
        Difficulty::GentleStart,
        Difficulty::ModerateEffort,
        Difficulty::Ambitious,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::GentleStart => "Gentle start",
            Difficulty::ModerateEffort => "Moderate effort",
            Difficulty::Ambitious => "Ambitious",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("difficulty", format!("unknown value '{}'", s))
            })
    }
}

/// A goal the gateway suggested. Read-only once received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalSuggestion {
    pub id: GoalId,
    pub title: String,
    pub rationale: String,
    pub life_areas_impacted: Vec<String>,
    pub timeframe_weeks: u32,
    pub difficulty: Difficulty,
    pub success_indicators: Vec<String>,
}

impl GoalSuggestion {
    /// Creates a suggestion with a freshly minted id.
    pub fn new(
        title: impl Into<String>,
        rationale: impl Into<String>,
        timeframe_weeks: u32,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: GoalId::new(),
            title: title.into(),
            rationale: rationale.into(),
            life_areas_impacted: Vec::new(),
            timeframe_weeks,
            difficulty,
            success_indicators: Vec::new(),
        }
    }

    /// Sets the impacted life areas.
    pub fn with_life_areas<I, S>(mut self, areas: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.life_areas_impacted = areas.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the observable success indicators.
    pub fn with_success_indicators<I, S>(mut self, indicators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.success_indicators = indicators.into_iter().map(Into::into).collect();
        self
    }
}

/// Everything one suggestion request returns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionSet {
    pub goals: Vec<GoalSuggestion>,
    pub contextual_note: String,
}

impl SuggestionSet {
    pub fn new(goals: Vec<GoalSuggestion>, contextual_note: impl Into<String>) -> Self {
        Self {
            goals,
            contextual_note: contextual_note.into(),
        }
    }

    /// Finds a suggestion by id.
    pub fn find(&self, id: &GoalId) -> Option<&GoalSuggestion> {
        self.goals.iter().find(|g| &g.id == id)
    }
}
