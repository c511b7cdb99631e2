//! # Event Actor
//!
//! Manages events users can register for. No dependencies (`Context = ()`).
//! Registration is closed through the [`EventAction::CloseRegistration`] action.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::EventClient;
use crate::model::{Event, EventId};
use actor_framework::ResourceActor;

/// Creates a new Event actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Event>, EventClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, EventId::new);
    (actor, EventClient::new(generic_client))
}
