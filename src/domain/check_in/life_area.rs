//! Life areas and the satisfaction scale used during check-in.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::ValidationError;

/// One of the fixed areas a user rates during check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LifeArea {
    #[serde(rename = "Physical Health")]
    PhysicalHealth,
    #[serde(rename = "Mental Health")]
    MentalHealth,
    #[serde(rename = "Work & Career")]
    WorkAndCareer,
    #[serde(rename = "Finances")]
    Finances,
    #[serde(rename = "Relationships & Social")]
    RelationshipsAndSocial,
    #[serde(rename = "Personal Growth")]
    PersonalGrowth,
    #[serde(rename = "Hobbies & Recreation")]
    HobbiesAndRecreation,
    #[serde(rename = "Environment & Home")]
    EnvironmentAndHome,
}

impl LifeArea {
    /// All areas in check-in display order.
    pub const ALL: [LifeArea; 8] = [
        LifeArea::PhysicalHealth,
        LifeArea::MentalHealth,
        LifeArea::WorkAndCareer,
        LifeArea::Finances,
        LifeArea::RelationshipsAndSocial,
        LifeArea::PersonalGrowth,
        LifeArea::HobbiesAndRecreation,
        LifeArea::EnvironmentAndHome,
    ];

    /// Human-readable name, identical to the serialized form.
    pub fn display_name(&self) -> &'static str {
        match self {
            LifeArea::PhysicalHealth => "Physical Health",
            LifeArea::MentalHealth => "Mental Health",
            LifeArea::WorkAndCareer => "Work & Career",
            LifeArea::Finances => "Finances",
            LifeArea::RelationshipsAndSocial => "Relationships & Social",
            LifeArea::PersonalGrowth => "Personal Growth",
            LifeArea::HobbiesAndRecreation => "Hobbies & Recreation",
            LifeArea::EnvironmentAndHome => "Environment & Home",
        }
    }
}

impl fmt::Display for LifeArea {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Satisfaction with a life area: 1 (very dissatisfied) to 5 (very satisfied).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct SatisfactionScore(u8);

impl SatisfactionScore {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;

    /// Creates a score, rejecting values outside 1..=5.
    pub fn try_new(value: u8) -> Result<Self, ValidationError> {
        if !(Self::MIN..=Self::MAX).contains(&value) {
            return Err(ValidationError::out_of_range(
                "rating",
                Self::MIN as i32,
                Self::MAX as i32,
                value as i32,
            ));
        }
        Ok(Self(value))
    }

    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        Self::label_for(self.0).unwrap_or("Neutral")
    }

    /// Label for a raw score, if it is on the scale.
    pub fn label_for(value: u8) -> Option<&'static str> {
        match value {
            1 => Some("Very Dissatisfied"),
            2 => Some("Dissatisfied"),
            3 => Some("Neutral"),
            4 => Some("Satisfied"),
            5 => Some("Very Satisfied"),
            _ => None,
        }
    }
}

impl TryFrom<u8> for SatisfactionScore {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<SatisfactionScore> for u8 {
    fn from(score: SatisfactionScore) -> Self {
        score.0
    }
}

impl fmt::Display for SatisfactionScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/5", self.0)
    }
}
