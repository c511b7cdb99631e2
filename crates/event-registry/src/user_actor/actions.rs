//! Custom actions for the User actor.
//!
//! These actions are handled by
//! [`ActorEntity::handle_action`](actor_framework::ActorEntity::handle_action).

/// Custom actions for User entities.
#[derive(Debug, Clone, PartialEq)]
pub enum UserAction {
    /// Marks the user inactive. Idempotent; an inactive user cannot register for events.
    Deactivate,
}
