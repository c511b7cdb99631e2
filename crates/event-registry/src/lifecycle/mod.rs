//! # System Lifecycle & Orchestration
//!
//! Starts the four stores, wires them together, and shuts them down again.
//!
//! ## The RegistrySystem Pattern
//!
//! [`RegistrySystem`] is the single place where actors are created and connected:
//!
//! ```rust,ignore
//! // 1. Create actors (no dependencies yet)
//! let (user_actor, user_client) = user_actor::new(capacity);
//! let (event_actor, event_client) = event_actor::new(capacity);
//! let (registration_actor, registrations) = registration_actor::new(capacity);
//!
//! // 2. Start actors with their dependencies injected
//! tokio::spawn(user_actor.run(()));
//! tokio::spawn(event_actor.run(()));
//! tokio::spawn(registration_actor.run((user_client.clone(), event_client.clone())));
//! ```
//!
//! ## Dependency Injection via Context
//!
//! Dependencies are injected at **runtime** through `run(context)`, never at construction.
//! Only the registration actor has any:
//!
//! ```rust,ignore
//! impl ActorEntity for Registration {
//!     type Context = (UserClient, EventClient);
//! }
//! ```
//!
//! ## Graceful Shutdown
//!
//! 1. **Drop all clients** - Closes the sender side of channels
//! 2. **Actors detect closure** - `receiver.recv()` returns `None`
//! 3. **Await completion** - Wait for all actor tasks to finish
//!
//! The registration actor's context holds clones of the user and event clients. The
//! dependency graph is acyclic, so those clones are released as soon as the registration
//! actor exits, and the user and event actors follow.
//!
//! ## Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing-subscriber` formatter used by the binary:
//!
//! ```bash
//! RUST_LOG=info cargo run      # Compact logs
//! RUST_LOG=debug cargo run     # Full payloads
//! ```

pub mod registry_system;
pub mod tracing;

pub use registry_system::*;
pub use self::tracing::*;
