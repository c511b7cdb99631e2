//! # Speaker Actor
//!
//! Manages conference speakers. Independent of every other store.
//!
//! [`default_speakers`] holds the line-up the registry can be seeded with at startup
//! (see [`RegistryConfig::seed_speakers`](crate::config::RegistryConfig::seed_speakers)).

pub mod entity;
pub mod error;

pub use entity::SpeakerAction;
pub use error::*;

use crate::clients::SpeakerClient;
use crate::model::{Speaker, SpeakerCreate, SpeakerId};
use actor_framework::ResourceActor;

/// Creates a new Speaker actor and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<Speaker>, SpeakerClient) {
    let (actor, generic_client) = ResourceActor::new(buffer_size, SpeakerId::new);
    (actor, SpeakerClient::new(generic_client))
}

/// The three speakers a fresh registry is seeded with.
pub fn default_speakers() -> Vec<SpeakerCreate> {
    vec![
        SpeakerCreate::new(
            "Dr. Jimmy Moore",
            "An Analysis on the Relationship between Chemokine Gradients and T-Cell Migration",
        ),
        SpeakerCreate::new(
            "Dr. Oluseyi Ajayi",
            "The Role of Nanotechnology in Improving the Efficiency of Refrigeration Systems",
        ),
        SpeakerCreate::new(
            "Prof. Mfon Ekpo",
            "A Linguistic Analysis of Afrobeat Song - Laho",
        ),
    ]
}
