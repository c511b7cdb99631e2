//! Entity trait implementation for the Speaker domain type.
//!
//! Speakers are plain CRUD records: no context, no custom actions.

use super::error::SpeakerError;
use crate::model::{Speaker, SpeakerCreate, SpeakerId, SpeakerUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

/// Speakers expose no custom actions.
#[derive(Debug, Clone, PartialEq)]
pub enum SpeakerAction {}

#[async_trait]
impl ActorEntity for Speaker {
    type Id = SpeakerId;
    type Create = SpeakerCreate;
    type Update = SpeakerUpdate;
    type Filter = ();
    type Action = SpeakerAction;
    type ActionResult = Speaker;
    type Context = ();
    type Error = SpeakerError;

    fn from_create_params(id: SpeakerId, params: SpeakerCreate) -> Result<Self, SpeakerError> {
        Ok(Self {
            id,
            name: params.name,
            topic: params.topic,
        })
    }

    async fn on_update(&mut self, update: SpeakerUpdate, _ctx: &()) -> Result<(), SpeakerError> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(topic) = update.topic {
            self.topic = topic;
        }
        Ok(())
    }

    async fn handle_action(
        &mut self,
        action: SpeakerAction,
        _ctx: &(),
    ) -> Result<Speaker, SpeakerError> {
        match action {}
    }
}
