//! Error types for the Registration actor.

use crate::event_actor::EventError;
use crate::model::{EventId, UserId};
use crate::user_actor::UserError;
use thiserror::Error;

/// Errors that can occur while registering users for events.
///
/// The first five variants are the registration rules, in the order they are checked.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum RegistrationError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Only active users can register for events: {0}")]
    UserInactive(UserId),

    #[error("Event not found: {0}")]
    EventNotFound(EventId),

    #[error("Event registration is closed: {0}")]
    EventClosed(EventId),

    #[error("User {user_id} is already registered for event {event_id}")]
    AlreadyRegistered { user_id: UserId, event_id: EventId },

    /// The user store failed while a registration was being checked.
    #[error("User store error: {0}")]
    User(#[from] UserError),

    /// The event store failed while a registration was being checked.
    #[error("Event store error: {0}")]
    Event(#[from] EventError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl RegistrationError {
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            RegistrationError::UserNotFound(_) | RegistrationError::EventNotFound(_)
        )
    }

    /// Rule violations a caller can fix by changing the request.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            RegistrationError::UserInactive(_)
                | RegistrationError::EventClosed(_)
                | RegistrationError::AlreadyRegistered { .. }
        )
    }
}
