//! Life-area ratings collected during check-in.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{LifeArea, SatisfactionScore};
use crate::domain::foundation::ValidationError;

/// Minimum number of rated areas before suggestions can be generated.
pub const MIN_RATED_AREAS: usize = 3;

/// A submitted rating for one life area. Immutable once submitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LifeAreaRating {
    pub life_area: LifeArea,
    pub rating: SatisfactionScore,
    #[serde(default)]
    pub whats_working: String,
    #[serde(default)]
    pub challenges: String,
    #[serde(default)]
    pub better_looks_like: String,
    #[serde(default)]
    pub additional_notes: String,
}

/// A check-in form entry. Areas that were opened but never scored carry
/// `rating: None` or `rating: 0` and are dropped on submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CheckInEntry {
    pub life_area: Option<LifeArea>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub whats_working: Option<String>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub better_looks_like: Option<String>,
    #[serde(default)]
    pub additional_notes: Option<String>,
}

/// Turns form entries into validated ratings.
///
/// Unscored entries (no rating, or a rating of 0) are skipped. At least [`MIN_RATED_AREAS`] scored entries
/// are required and each area may be rated once.
pub fn ratings_from_entries(entries: Vec<CheckInEntry>) -> Result<Vec<LifeAreaRating>, ValidationError> {
    let mut seen = HashSet::new();
    let mut ratings = Vec::new();

    for entry in entries {
        let Some(raw) = entry.rating.filter(|&r| r != 0) else {
            continue;
        };
        let life_area = entry
            .life_area
            .ok_or_else(|| ValidationError::empty_field("life_area"))?;
        let rating = SatisfactionScore::try_new(raw)?;

        if !seen.insert(life_area) {
            return Err(ValidationError::invalid_format(
                "life_area",
                format!("'{}' was rated more than once", life_area),
            ));
        }

        ratings.push(LifeAreaRating {
            life_area,
            rating,
            whats_working: entry.whats_working.unwrap_or_default(),
            challenges: entry.challenges.unwrap_or_default(),
            better_looks_like: entry.better_looks_like.unwrap_or_default(),
            additional_notes: entry.additional_notes.unwrap_or_default(),
        });
    }

    if ratings.len() < MIN_RATED_AREAS {
        return Err(ValidationError::out_of_range(
            "ratings",
            MIN_RATED_AREAS as i32,
            LifeArea::ALL.len() as i32,
            ratings.len() as i32,
        ));
    }

    Ok(ratings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(area: LifeArea, rating: Option<u8>) -> CheckInEntry {
        CheckInEntry {
            life_area: Some(area),
            rating,
            ..Default::default()
        }
    }

    #[test]
    fn zero_rating_counts_as_unscored() {
        let ratings = ratings_from_entries(vec![
            entry(LifeArea::PhysicalHealth, Some(4)),
            entry(LifeArea::Finances, Some(0)),
            entry(LifeArea::MentalHealth, Some(1)),
            entry(LifeArea::PersonalGrowth, Some(3)),
        ])
        .unwrap();

        assert_eq!(ratings.len(), 3);
        assert!(ratings.iter().all(|r| r.life_area != LifeArea::Finances));
    }

    #[test]
    fn zero_ratings_do_not_reach_the_minimum() {
        let result = ratings_from_entries(vec![
            entry(LifeArea::PhysicalHealth, Some(4)),
            entry(LifeArea::Finances, Some(0)),
            entry(LifeArea::MentalHealth, Some(1)),
        ]);

        assert!(matches!(result, Err(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn three_rated_areas_are_accepted() {
        let ratings = ratings_from_entries(vec![
            entry(LifeArea::PhysicalHealth, Some(4)),
            entry(LifeArea::Finances, Some(2)),
            entry(LifeArea::MentalHealth, Some(1)),
        ])
        .unwrap();

        assert_eq!(ratings.len(), 3);
        assert_eq!(ratings[1].life_area, LifeArea::Finances);
        assert_eq!(ratings[1].rating.value(), 2);
        assert_eq!(ratings[0].whats_working, "");
    }

    #[test]
    fn fewer_than_three_rated_areas_are_rejected() {
        let err = ratings_from_entries(vec![
            entry(LifeArea::PhysicalHealth, Some(4)),
            entry(LifeArea::Finances, Some(2)),
        ])
        .unwrap_err();
        assert_eq!(err.field(), "ratings");
    }

    #[test]
    fn unscored_entries_do_not_count() {
        let result = ratings_from_entries(vec![
            entry(LifeArea::PhysicalHealth, Some(4)),
            entry(LifeArea::Finances, Some(2)),
            entry(LifeArea::MentalHealth, None),
            entry(LifeArea::PersonalGrowth, None),
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn duplicate_area_is_rejected() {
        let err = ratings_from_entries(vec![
            entry(LifeArea::PhysicalHealth, Some(4)),
            entry(LifeArea::PhysicalHealth, Some(2)),
            entry(LifeArea::MentalHealth, Some(1)),
        ])
        .unwrap_err();
        assert_eq!(err.field(), "life_area");
    }

    #[test]
    fn out_of_scale_score_is_rejected() {
        let err = ratings_from_entries(vec![
            entry(LifeArea::PhysicalHealth, Some(7)),
            entry(LifeArea::Finances, Some(2)),
            entry(LifeArea::MentalHealth, Some(1)),
        ])
        .unwrap_err();
        assert_eq!(err.field(), "rating");
    }

    #[test]
    fn reflections_are_carried_over() {
        let mut first = entry(LifeArea::PhysicalHealth, Some(2));
        first.challenges = Some("Too tired after work".to_string());
        first.additional_notes = Some("Night shifts".to_string());

        let ratings = ratings_from_entries(vec![
            first,
            entry(LifeArea::Finances, Some(3)),
            entry(LifeArea::MentalHealth, Some(3)),
        ])
        .unwrap();

        assert_eq!(ratings[0].challenges, "Too tired after work");
        assert_eq!(ratings[0].additional_notes, "Night shifts");
    }

    #[test]
    fn check_in_entry_deserializes_from_form_json() {
        let json = r#"{"life_area": "Mental Health", "rating": 2, "challenges": "Overwhelm"}"#;
        let entry: CheckInEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.life_area, Some(LifeArea::MentalHealth));
        assert_eq!(entry.rating, Some(2));
        assert_eq!(entry.whats_working, None);
    }
}
