//! # Observability & Tracing
//!
//! [`setup_tracing`] initializes structured logging with the `tracing` crate. Log levels
//! come from the `RUST_LOG` environment variable.
//!
//! ## What Gets Traced
//!
//! - **Actor Lifecycle**: Startup, shutdown, and final store size
//! - **Entity Operations**: Create, Get, Update, Delete, and custom Actions
//! - **Client Calls**: one span per typed client method (`#[instrument]`)
//!
//! ## Workflow Trace Example
//!
//! Registering a user, with `RUST_LOG=debug`:
//!
//! ```text
//! INFO register{user_id=9f1c.. event_id=4be2..}: Sending register to actor
//! DEBUG Create entity_type="Registration" params=RegistrationCreate { user_id: 9f1c.., event_id: 4be2.. }
//! DEBUG Checking user user_id=9f1c..
//! DEBUG Get entity_type="User" id=9f1c.. found=true
//! DEBUG Checking event event_id=4be2..
//! DEBUG Get entity_type="Event" id=4be2.. found=true
//! INFO Created entity_type="Registration" id=07aa.. size=1
//! INFO register{user_id=9f1c.. event_id=4be2..}: Registered registration_id=07aa..
//! ```
//!
//! A rejected registration logs a `WARN` from the registration actor naming the failed
//! rule, e.g. `on_create failed entity_type="Registration" error=Event registration is closed: 4be2..`.

/// Installs the global subscriber: `RUST_LOG` filter, compact format, no module paths.
///
/// Call once, from the binary. Tests leave logging uninitialized.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - entity_type identifies the actor
        .compact()
        .init();
}
