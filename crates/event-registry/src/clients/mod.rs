//! Type-safe wrappers around [`ResourceClient`](actor_framework::ResourceClient).
//!
//! Every client implements [`ActorClient`](actor_framework::ActorClient), which supplies
//! `get`, `list_all`, `update`, `perform_action` and `delete`, and adds the
//! domain operations of its store on top. Entity errors are downcast back into the
//! store's own error type, so callers can match on e.g. [`RegistrationError::EventClosed`](crate::registration_actor::RegistrationError::EventClosed).

pub mod event_client;
pub mod registration_client;
pub mod speaker_client;
pub mod user_client;

pub use event_client::*;
pub use registration_client::*;
pub use speaker_client::*;
pub use user_client::*;
