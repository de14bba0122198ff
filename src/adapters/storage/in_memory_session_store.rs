//! In-Memory Planning Session Store
//!
//! Keeps planning sessions for the lifetime of the process.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

use crate::domain::foundation::{SessionId, Timestamp};
use crate::domain::planning::{PlanningError, PlanningSession};
use crate::ports::{PlanningSessionStore, SharedSession};

/// In-memory storage for planning sessions
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionId, SharedSession>>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop every session (useful for tests)
    pub async fn clear(&self) {
        self.sessions.write().await.clear();
    }
}

#[async_trait]
impl PlanningSessionStore for InMemorySessionStore {
    async fn insert(&self, session: PlanningSession) -> Result<SharedSession, PlanningError> {
        let id = *session.id();
        let mut sessions = self.sessions.write().await;
        if sessions.contains_key(&id) {
            return Err(PlanningError::infrastructure(format!(
                "Session {} already exists",
                id
            )));
        }
        let shared = Arc::new(Mutex::new(session));
        sessions.insert(id, Arc::clone(&shared));
        Ok(shared)
    }

    async fn get(&self, id: &SessionId) -> Result<SharedSession, PlanningError> {
        self.sessions
            .read()
            .await
            .get(id)
            .cloned()
            .ok_or(PlanningError::SessionNotFound(*id))
    }

    async fn delete(&self, id: &SessionId) -> Result<(), PlanningError> {
        self.sessions
            .write()
            .await
            .remove(id)
            .map(|_| ())
            .ok_or(PlanningError::SessionNotFound(*id))
    }

    async fn evict_idle(&self, cutoff: Timestamp) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, shared| match shared.try_lock() {
            Ok(session) => !cutoff.is_after(session.updated_at()),
            Err(_) => true,
        });
        before - sessions.len()
    }

    async fn count(&self) -> usize {
        self.sessions.read().await.len()
    }
}
