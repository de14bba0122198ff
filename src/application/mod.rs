//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate a planning session under its lock; query handlers
//! return snapshots.

pub mod handlers;

pub use handlers::*;
