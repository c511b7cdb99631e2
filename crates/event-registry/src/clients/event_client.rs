//! # Event Client
//!
//! Provides a high‑level API for interacting with the `Event` actor.
use crate::event_actor::{EventAction, EventError};
use crate::model::{Event, EventCreate, EventId, EventUpdate};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the Event actor.
#[derive(Clone)]
pub struct EventClient {
    inner: ResourceClient<Event>,
}

impl EventClient {
    pub fn new(inner: ResourceClient<Event>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Event> for EventClient {
    type Error = EventError;

    fn inner(&self) -> &ResourceClient<Event> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<EventError>()
            .unwrap_or_else(|e| EventError::ActorCommunicationError(e.to_string()))
    }
}

impl EventClient {
    #[instrument(skip(self))]
    pub async fn create_event(&self, params: EventCreate) -> Result<Event, EventError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_event(
        &self,
        id: EventId,
        update: EventUpdate,
    ) -> Result<Option<Event>, EventError> {
        self.update(id, update).await
    }

    /// Stops accepting registrations. Returns `None` if the event does not exist.
    #[instrument(skip(self))]
    pub async fn close_event(&self, id: EventId) -> Result<Option<Event>, EventError> {
        self.perform_action(id, EventAction::CloseRegistration).await
    }
}
