//! # Registration Actor
//!
//! Stores registrations and enforces the registration rules.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`Registration`]
//! - [`error`] - [`RegistrationError`], one variant per broken rule
//! - [`actions`] - [`RegistrationAction::MarkAttended`]
//! - [`new()`] - Factory function that creates the actor and its raw client
//!
//! ## Dependencies
//!
//! The actor's context is `(UserClient, EventClient)`, injected when it is started:
//!
//! ```rust,ignore
//! let (registration_actor, inner) = registration_actor::new(32);
//! tokio::spawn(registration_actor.run((user_client.clone(), event_client.clone())));
//! let registrations = RegistrationClient::new(inner, user_client, event_client);
//! ```
//!
//! The registration client also needs both clients, to join registrations with the
//! user and event they point at.

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::model::{Registration, RegistrationId};
use actor_framework::{ResourceActor, ResourceClient};

/// Creates a new Registration actor and its generic client.
///
/// Unlike the other stores, the typed [`RegistrationClient`](crate::clients::RegistrationClient)
/// is assembled by the caller, which owns the user and event clients it needs.
pub fn new(buffer_size: usize) -> (ResourceActor<Registration>, ResourceClient<Registration>) {
    ResourceActor::new(buffer_size, RegistrationId::new)
}
