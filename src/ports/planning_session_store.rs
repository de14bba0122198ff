//! Planning Session Store Port - Holds live planning sessions.
//!
//! Sessions live only for the lifetime of the process. Each one is shared
//! behind an async mutex so request handlers and generation tasks can
//! take turns mutating it.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::planning::{PlanningError, PlanningSession};

/// A session shared between handlers and background generation tasks.
pub type SharedSession = Arc<Mutex<PlanningSession>>;

#[async_trait]
pub trait PlanningSessionStore: Send + Sync {
    /// Stores a new session and returns its shared handle.
    ///
    /// # Errors
    ///
    /// - `Infrastructure` if a session with the same id already exists
    async fn insert(&self, session: PlanningSession) -> Result<SharedSession, PlanningError>;

    /// Looks up a session by id.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if no session has the id
    async fn get(&self, id: &SessionId) -> Result<SharedSession, PlanningError>;

    /// Removes a session.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if no session has the id
    async fn delete(&self, id: &SessionId) -> Result<(), PlanningError>;

    /// Removes sessions last updated before `cutoff` and returns how many
    /// were dropped. Sessions locked by a request are kept.
    async fn evict_idle(&self, cutoff: Timestamp) -> usize;

    /// Number of live sessions.
    async fn count(&self) -> usize;
}
