//! Error types for the User actor.

use thiserror::Error;

/// Errors that can occur during user operations.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum UserError {
    /// The email address is not well formed.
    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl UserError {
    /// Users have no not-found variant: absence is reported as `None`/`false`.
    pub fn is_not_found(&self) -> bool {
        false
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, UserError::InvalidEmail(_))
    }
}
