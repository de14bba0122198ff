//! Tracking of one outstanding gateway request and its outcome.

use thiserror::Error;

use crate::domain::foundation::RequestId;

/// Shown when goal suggestions cannot be generated.
pub const SUGGESTIONS_FAILED_MESSAGE: &str =
    "Sorry, I couldn't generate goal suggestions right now. Please try again later.";

/// Shown when a goal breakdown cannot be generated.
pub const BREAKDOWN_FAILED_MESSAGE: &str =
    "I had trouble creating a detailed plan. The AI might be busy. Please try again in a moment.";

/// The single failure kind a generation can end in.
///
/// Transport errors, timeouts, quota errors and unparsable output all
/// collapse into this; the message is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct GenerationError {
    message: String,
}

impl GenerationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn suggestions() -> Self {
        Self::new(SUGGESTIONS_FAILED_MESSAGE)
    }

    pub fn breakdown() -> Self {
        Self::new(BREAKDOWN_FAILED_MESSAGE)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Lifecycle of a generated value: nothing requested, waiting, done, failed.
#[derive(Debug, Clone, PartialEq)]
pub enum Generation<T> {
    Idle,
    Pending {
        request_id: RequestId,
    },
    Ready(T),
    Failed {
        message: String,
    },
}

impl<T> Default for Generation<T> {
    fn default() -> Self {
        Generation::Idle
    }
}

impl<T> Generation<T> {
    /// Starts a new request, superseding whatever was there.
    pub fn begin(&mut self) -> RequestId {
        let request_id = RequestId::new();
        *self = Generation::Pending { request_id };
        request_id
    }

    /// Applies a completion if it answers the request still pending.
    ///
    /// Returns false, leaving the state untouched, for stale or unexpected
    /// completions.
    pub fn resolve(&mut self, request_id: RequestId, outcome: Result<T, GenerationError>) -> bool {
        if !self.is_pending_for(&request_id) {
            return false;
        }
        *self = match outcome {
            Ok(value) => Generation::Ready(value),
            Err(err) => Generation::Failed {
                message: err.message,
            },
        };
        true
    }

    pub fn reset(&mut self) {
        *self = Generation::Idle;
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Generation::Pending { .. })
    }

    pub fn is_pending_for(&self, request_id: &RequestId) -> bool {
        matches!(self, Generation::Pending { request_id: pending } if pending == request_id)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Generation::Failed { .. })
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Generation::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure_message(&self) -> Option<&str> {
        match self {
            Generation::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// Takes a ready value, leaving the generation idle.
    pub fn take_ready(&mut self) -> Option<T> {
        match std::mem::take(self) {
            Generation::Ready(value) => Some(value),
            other => {
                *self = other;
                None
            }
        }
    }

    pub fn status(&self) -> &'static str {
        match self {
            Generation::Idle => "idle",
            Generation::Pending { .. } => "pending",
            Generation::Ready(_) => "ready",
            Generation::Failed { .. } => "failed",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_applies_matching_request() {
        let mut generation: Generation<u32> = Generation::default();
        let id = generation.begin();
        assert!(generation.is_pending());

        assert!(generation.resolve(id, Ok(7)));
        assert_eq!(generation.ready(), Some(&7));
    }

    #[test]
    fn resolve_ignores_superseded_request() {
        let mut generation: Generation<u32> = Generation::default();
        let stale = generation.begin();
        let current = generation.begin();

        assert!(!generation.resolve(stale, Ok(1)));
        assert!(generation.is_pending_for(&current));
    }

    #[test]
    fn resolve_ignores_completion_after_reset() {
        let mut generation: Generation<u32> = Generation::default();
        let id = generation.begin();
        generation.reset();

        assert!(!generation.resolve(id, Ok(1)));
        assert_eq!(generation, Generation::Idle);
    }

    #[test]
    fn failure_keeps_user_message() {
        let mut generation: Generation<u32> = Generation::default();
        let id = generation.begin();
        generation.resolve(id, Err(GenerationError::suggestions()));

        assert!(generation.is_failed());
        assert_eq!(generation.failure_message(), Some(SUGGESTIONS_FAILED_MESSAGE));
        assert_eq!(generation.status(), "failed");
    }

    #[test]
    fn take_ready_only_takes_ready_values() {
        let mut pending: Generation<u32> = Generation::default();
        pending.begin();
        assert_eq!(pending.take_ready(), None);
        assert!(pending.is_pending());

        let mut ready = Generation::Ready(3);
        assert_eq!(ready.take_ready(), Some(3));
        assert_eq!(ready, Generation::Idle);
    }
}
