//! Storage Adapters
//!
//! Implementations of the PlanningSessionStore port.
//!
//! - **InMemorySessionStore** - Sessions live for the lifetime of the process

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
