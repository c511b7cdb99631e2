//! # Speaker Client
use crate::model::{Speaker, SpeakerCreate, SpeakerId, SpeakerUpdate};
use crate::speaker_actor::{self, SpeakerError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for interacting with the Speaker actor.
#[derive(Clone)]
pub struct SpeakerClient {
    inner: ResourceClient<Speaker>,
}

impl SpeakerClient {
    pub fn new(inner: ResourceClient<Speaker>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<Speaker> for SpeakerClient {
    type Error = SpeakerError;

    fn inner(&self) -> &ResourceClient<Speaker> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<SpeakerError>()
            .unwrap_or_else(|e| SpeakerError::ActorCommunicationError(e.to_string()))
    }
}

impl SpeakerClient {
    #[instrument(skip(self))]
    pub async fn create_speaker(&self, params: SpeakerCreate) -> Result<Speaker, SpeakerError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    #[instrument(skip(self))]
    pub async fn update_speaker(
        &self,
        id: SpeakerId,
        update: SpeakerUpdate,
    ) -> Result<Option<Speaker>, SpeakerError> {
        self.update(id, update).await
    }

    /// Inserts the [`default_speakers`](speaker_actor::default_speakers) line-up.
    #[instrument(skip(self))]
    pub async fn seed_defaults(&self) -> Result<Vec<Speaker>, SpeakerError> {
        let mut seeded = Vec::new();
        for params in speaker_actor::default_speakers() {
            seeded.push(self.create_speaker(params).await?);
        }
        info!(count = seeded.len(), "Seeded speakers");
        Ok(seeded)
    }
}
