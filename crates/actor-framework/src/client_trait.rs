//! # ActorClient Trait
//!
//! Provides a common interface for resource‑specific clients, adding default `get`, `list_all`,
//! `update`, `perform_action` and `delete` methods built on top of a generic `ResourceClient`.
use crate::{ActorEntity, FrameworkError, ResourceClient};
use async_trait::async_trait;

/// Trait for resource-specific clients to inherit the standard operations.
///
/// Absence is not an error: `get`, `update` and `perform_action` yield `None` and
/// `delete` yields `false` for an unknown id. Everything else goes through [`ActorClient::map_error`].
///
/// # Example
///
/// ```rust
/// use actor_framework::{ActorClient, ActorEntity, FrameworkError, ResourceClient};
/// use async_trait::async_trait;
///
/// #[derive(Clone, Debug)]
/// struct Room { id: u32 }
/// #[derive(Debug)] struct RoomCreate;
/// #[derive(Debug)] struct RoomUpdate;
/// #[derive(Debug)] enum RoomAction {}
/// #[derive(Debug, thiserror::Error)] #[error("{0}")] struct RoomError(String);
///
/// #[async_trait]
/// impl ActorEntity for Room {
///     type Id = u32;
///     type Create = RoomCreate;
///     type Update = RoomUpdate;
///     type Filter = ();
///     type Action = RoomAction;
///     type ActionResult = ();
///     type Context = ();
///     type Error = RoomError;
///
///     fn from_create_params(id: u32, _: RoomCreate) -> Result<Self, Self::Error> {
///         Ok(Self { id })
///     }
///     async fn on_update(&mut self, _: RoomUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
///     async fn handle_action(&mut self, _: RoomAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
/// }
///
/// struct RoomClient {
///     inner: ResourceClient<Room>,
/// }
///
/// #[async_trait]
/// impl ActorClient<Room> for RoomClient {
///     type Error = RoomError;
///
///     fn inner(&self) -> &ResourceClient<Room> {
///         &self.inner
///     }
///
///     fn map_error(e: FrameworkError) -> Self::Error {
///         RoomError(e.to_string())
///     }
/// }
///
/// async fn usage(client: RoomClient) {
///     // get(), list_all() and delete() are provided automatically
///     let _ = client.get(1).await;
///     let _ = client.list_all().await;
///     let _ = client.delete(1).await;
/// }
/// ```
#[async_trait]
pub trait ActorClient<T: ActorEntity>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the inner generic ResourceClient.
    fn inner(&self) -> &ResourceClient<T>;

    /// Map framework errors to the specific resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Fetch an entity by ID.
    #[tracing::instrument(skip(self))]
    async fn get(&self, id: T::Id) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().get(id).await.map_err(Self::map_error)
    }

    /// Fetch every entity, in insertion order.
    #[tracing::instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().list().await.map_err(Self::map_error)
    }

    /// Apply a partial update. Returns `None` if the ID is unknown.
    #[tracing::instrument(skip(self))]
    async fn update(&self, id: T::Id, update: T::Update) -> Result<Option<T>, Self::Error> {
        tracing::debug!("Sending request");
        absent_as_none(self.inner().update(id, update).await).map_err(Self::map_error)
    }

    /// Run a resource-specific action. Returns `None` if the ID is unknown.
    #[tracing::instrument(skip(self))]
    async fn perform_action(
        &self,
        id: T::Id,
        action: T::Action,
    ) -> Result<Option<T::ActionResult>, Self::Error> {
        tracing::debug!("Sending request");
        absent_as_none(self.inner().perform_action(id, action).await).map_err(Self::map_error)
    }

    /// Delete an entity by ID. Returns whether anything was removed.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, id: T::Id) -> Result<bool, Self::Error> {
        tracing::debug!("Sending request");
        match self.inner().delete(id).await {
            Ok(()) => Ok(true),
            Err(FrameworkError::NotFound(_)) => Ok(false),
            Err(e) => Err(Self::map_error(e)),
        }
    }
}

fn absent_as_none<R>(result: Result<R, FrameworkError>) -> Result<Option<R>, FrameworkError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(FrameworkError::NotFound(_)) => Ok(None),
        Err(e) => Err(e),
    }
}
