//! # Actor Framework
//!
//! This crate provides the building blocks for type-safe, concurrent resource stores.
//! It implements a **Resource-Oriented Architecture (ROA)** pattern on top of the
//! **Actor Model**: every resource type gets its own actor that owns its records and
//! serves a uniform set of requests (create, get, list, query, update, delete, action).
//!
//! ## Architecture Overview
//!
//! 1. **Entity Layer** ([`ActorEntity`]) - Your business logic and domain models
//! 2. **Runtime Layer** ([`ResourceActor`]) - Message processing and concurrency
//! 3. **Interface Layer** ([`ResourceClient`], [`ActorClient`]) - Type-safe communication
//!
//! You write the business logic **once** in the entity trait, and the framework handles
//! the message passing, error transport and state management.
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via the `run()` method, not at construction time.
//! An entity whose create hook must look at other stores declares those stores' clients as
//! its `Context`:
//!
//! ```rust,ignore
//! impl ActorEntity for Registration {
//!     type Context = (UserClient, EventClient);
//!     // on_create() checks the user and the event before the registration is stored
//! }
//!
//! let (registration_actor, registrations) = ResourceActor::<Registration>::new(32, RegistrationId::new);
//! tokio::spawn(registration_actor.run((user_client.clone(), event_client.clone())));
//! ```
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task
//! - Messages are processed **sequentially** within an actor (no locks needed)
//! - A create, including the hooks it awaits, is one message: check-then-insert is atomic
//! - Multiple actors run in **parallel**
//!
//! ## Errors
//!
//! Plumbing failures are [`FrameworkError`] variants. An entity's own error travels boxed in
//! [`FrameworkError::EntityError`] and is recovered with [`FrameworkError::into_entity_error`].
//!
//! ## Testing
//!
//! See the [`mock`] module for `MockClient`, which answers a real `ResourceClient<T>` from
//! scripted expectations without spawning any actor.

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
