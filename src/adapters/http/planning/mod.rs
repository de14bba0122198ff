//! Planning HTTP adapter - session, check-in, breakdown and daily endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::*;
pub use handlers::{list_life_areas, PlanningApiError, PlanningAppState};
pub use routes::planning_routes;
