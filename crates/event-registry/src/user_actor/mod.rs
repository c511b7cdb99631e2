//! # User Actor
//!
//! This module implements the User resource actor, managing user entities with CRUD operations.
//!
//! ## Overview
//!
//! The User actor has no dependencies (`Context = ()`). It validates email addresses on
//! create and on update, and offers one custom action, [`UserAction::Deactivate`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`actions`] - [`UserAction`]
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use event_registry::user_actor;
//! use event_registry::model::UserCreate;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Create actor and client
//!     let (actor, client) = user_actor::new(32);
//!
//!     // Start the actor (no dependencies, so context is ())
//!     tokio::spawn(actor.run(()));
//!
//!     let user = client.create_user(UserCreate::new("Alice", "alice@example.com")).await?;
//!     assert!(user.is_active);
//!     Ok(())
//! }
//! ```

pub mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;

use crate::clients::UserClient;
use crate::model::{User, UserId};
use actor_framework::ResourceActor;

/// Creates a new User actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, UserId::new);
    (actor, UserClient::new(generic_client))
}
