//! Error types for the Speaker actor.

use thiserror::Error;

/// Errors that can occur during speaker operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SpeakerError {
    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl SpeakerError {
    pub fn is_not_found(&self) -> bool {
        false
    }

    pub fn is_validation(&self) -> bool {
        false
    }
}
