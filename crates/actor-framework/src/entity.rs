//! # ActorEntity Trait
//!
//! The `ActorEntity` trait defines the contract that every resource (User, Event, Registration, …)
//! must implement to be managed by the generic `ResourceActor`. It specifies associated types for
//! IDs, DTOs, filters, actions, context, and errors, and provides lifecycle hooks (`on_create`,
//! `ensure_unique`, `on_update`, `on_delete`, `handle_action`).
//!
//! # Provided Methods (Hooks)
//! The following hooks have default implementations and only need to be overridden when an
//! entity wants to customize behavior:
//! - [`ActorEntity::on_create`]
//! - [`ActorEntity::ensure_unique`]
//! - [`ActorEntity::on_delete`]
//! - [`ActorEntity::matches`]

use async_trait::async_trait;
use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// This trait is `#[async_trait]` to allow asynchronous operations in hooks (e.g., calling other actors).
/// It also defines a `Context` type, which is injected into every hook. This allows "Late Binding"
/// of dependencies (passing clients to `run()` instead of `new()`).
#[async_trait]
pub trait ActorEntity: Clone + Debug + Send + Sync + 'static {
    /// The unique identifier for this entity (e.g., a Uuid newtype).
    /// Fresh ids come from the generator handed to [`ResourceActor::new`](crate::ResourceActor::new).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// The data required to create a new instance (DTO - Data Transfer Object).
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// Criteria for [`ResourceRequest::Query`](crate::ResourceRequest::Query).
    /// Use `()` if the entity is only ever listed as a whole.
    type Filter: Send + Sync + Debug;

    /// Enum representing resource-specific operations (e.g., `CloseRegistration`).
    type Action: Send + Sync + Debug;

    /// The result type returned by custom actions.
    type ActionResult: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync;

    /// The error type for this entity.
    ///
    /// One enum per actor, not one per message. Clients recover it from
    /// [`FrameworkError::EntityError`](crate::FrameworkError::EntityError) with
    /// [`FrameworkError::into_entity_error`](crate::FrameworkError::into_entity_error).
    type Error: std::error::Error + Send + Sync + 'static;

    /// Construct the full Entity from the ID and Payload.
    /// This is called synchronously before `on_create`.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    // --- Lifecycle Hooks (Async) ---

    /// Called immediately after the entity is created and initialized.
    /// Use this hook to perform validation or side effects (e.g., checking other actors).
    async fn on_create(&mut self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after `on_create` succeeds and before the entity is inserted.
    ///
    /// `existing` yields every entity currently in the store. The actor handles one
    /// request at a time, so nothing can be inserted between this check and the insert.
    fn ensure_unique<'a>(&self, _existing: impl Iterator<Item = &'a Self>) -> Result<(), Self::Error>
    where
        Self: 'a,
    {
        Ok(())
    }

    /// Called when an update request is received.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;

    /// Called immediately before the entity is removed from the system.
    async fn on_delete(&self, _ctx: &Self::Context) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Whether this entity belongs in the result of a `Query` with `filter`.
    fn matches(&self, _filter: &Self::Filter) -> bool {
        true
    }

    // --- Action Handler (Async) ---

    /// Handle a custom resource-specific action.
    async fn handle_action(
        &mut self,
        action: Self::Action,
        _ctx: &Self::Context,
    ) -> Result<Self::ActionResult, Self::Error>;
}
