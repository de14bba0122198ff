//! Clarity Compass - AI-assisted goal planning
//!
//! A user rates areas of their life, receives goal suggestions, turns a goal
//! into milestones and tasks, and tracks daily progress.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
