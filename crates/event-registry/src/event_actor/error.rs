//! Error types for the Event actor.

use thiserror::Error;

/// Errors that can occur during event operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum EventError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl EventError {
    pub fn is_not_found(&self) -> bool {
        false
    }

    /// Event fields are free-form, so nothing is rejected as invalid.
    pub fn is_validation(&self) -> bool {
        false
    }
}
