//! # Event Registry
//!
//! In-memory registry of users, events, speakers and event registrations, built on
//! [`actor_framework`]. Every store is a `ResourceActor` in its own Tokio task.
//!
//! ## Module Tour
//!
//! - [`model`] - Records, payloads and typed ids
//! - [`user_actor`], [`event_actor`], [`speaker_actor`], [`registration_actor`] -
//!   [`ActorEntity`](actor_framework::ActorEntity) implementations, errors and actions
//! - [`clients`] - Typed clients; [`RegistrationClient`](clients::RegistrationClient) is the
//!   registration service
//! - [`lifecycle`] - [`RegistrySystem`](lifecycle::RegistrySystem) wiring and tracing setup
//! - [`config`] - Environment configuration
//!
//! ## Registration Rules
//!
//! A user can register for an event when the user exists and is active, the event exists
//! and is open, and the pair is not registered yet. The checks and the insert happen
//! inside one request to the registration actor, so concurrent attempts for the same pair
//! yield exactly one registration.

pub mod clients;
pub mod config;
pub mod event_actor;
pub mod lifecycle;
pub mod model;
pub mod registration_actor;
pub mod speaker_actor;
pub mod user_actor;
