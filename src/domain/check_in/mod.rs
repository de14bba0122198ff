//! Check-in module - life areas and the ratings a user submits for them.

mod life_area;
mod rating;

pub use life_area::{LifeArea, SatisfactionScore};
pub use rating::{ratings_from_entries, CheckInEntry, LifeAreaRating, MIN_RATED_AREAS};
