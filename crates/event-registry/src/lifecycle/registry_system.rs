use crate::clients::{EventClient, RegistrationClient, SpeakerClient, UserClient};
use crate::config::RegistryConfig;
use crate::speaker_actor::SpeakerError;
use crate::{event_actor, registration_actor, speaker_actor, user_actor};
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors raised while starting or stopping the [`RegistrySystem`].
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// Seeding the speaker store failed.
    #[error("Failed to seed speakers: {0}")]
    Seed(#[from] SpeakerError),

    /// An actor task panicked or was cancelled.
    #[error("Actor task failed: {0}")]
    ActorTaskFailed(#[from] tokio::task::JoinError),
}

/// The runtime orchestrator of the event registry.
///
/// `RegistrySystem` is responsible for:
/// - **Lifecycle Management**: Starting and stopping all actors in the system
/// - **Dependency Wiring**: Connecting the registration actor to the user and event stores
///
/// # Example
///
/// ```ignore
/// let system = RegistrySystem::start(RegistryConfig::from_env()).await?;
///
/// let user = system.user_client.create_user(UserCreate::new("Ann", "ann@x.com")).await?;
/// let event = system.event_client.create_event(EventCreate::new("Conf", "NYC", date)).await?;
/// let registration = system.registration_client.register(user.id, event.id).await?;
///
/// // Gracefully shut down when done
/// system.shutdown().await?;
/// ```
pub struct RegistrySystem {
    /// Client for interacting with the User actor
    pub user_client: UserClient,

    /// Client for interacting with the Event actor
    pub event_client: EventClient,

    /// Client for interacting with the Speaker actor
    pub speaker_client: SpeakerClient,

    /// The registration service
    pub registration_client: RegistrationClient,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl RegistrySystem {
    /// Spawns every actor and wires their dependencies. Must be called inside a Tokio runtime.
    ///
    /// Stores start empty; use [`RegistrySystem::start`] to honour
    /// [`RegistryConfig::seed_speakers`].
    pub fn new(config: &RegistryConfig) -> Self {
        // Tokio channels need room for at least one message.
        let capacity = config.channel_capacity.max(1);

        // 1. Create actors (no dependencies)
        let (user_actor, user_client) = user_actor::new(capacity);
        let (event_actor, event_client) = event_actor::new(capacity);
        let (speaker_actor, speaker_client) = speaker_actor::new(capacity);
        let (registration_actor, registrations) = registration_actor::new(capacity);

        // 2. Start actors with injected context
        let user_handle = tokio::spawn(user_actor.run(()));
        let event_handle = tokio::spawn(event_actor.run(()));
        let speaker_handle = tokio::spawn(speaker_actor.run(()));
        let registration_handle = tokio::spawn(
            registration_actor.run((user_client.clone(), event_client.clone())),
        );

        let registration_client =
            RegistrationClient::new(registrations, user_client.clone(), event_client.clone());

        Self {
            user_client,
            event_client,
            speaker_client,
            registration_client,
            handles: vec![registration_handle, user_handle, event_handle, speaker_handle],
        }
    }

    /// Builds the system and seeds the speaker store if the configuration asks for it.
    pub async fn start(config: RegistryConfig) -> Result<Self, LifecycleError> {
        let system = Self::new(&config);
        if config.seed_speakers {
            system.speaker_client.seed_defaults().await?;
        }
        info!(?config, "Registry started");
        Ok(system)
    }

    /// Gracefully shuts down the entire system.
    ///
    /// Drops every client, which closes the actors' channels, then waits for each
    /// actor task to finish.
    ///
    /// # Errors
    ///
    /// [`LifecycleError::ActorTaskFailed`] with the first failure if any actor task
    /// panicked. Every task is still awaited.
    pub async fn shutdown(self) -> Result<(), LifecycleError> {
        info!("Shutting down system...");

        // Step 1: Close all channels by dropping clients
        drop(self.registration_client);
        drop(self.user_client);
        drop(self.event_client);
        drop(self.speaker_client);

        // Step 2: Wait for all actor tasks to complete
        join_all(self.handles).await?;

        info!("System shutdown complete.");
        Ok(())
    }
}

/// Awaits every handle, then reports the first failure.
async fn join_all(handles: Vec<JoinHandle<()>>) -> Result<(), LifecycleError> {
    let mut first_failure = None;
    for handle in handles {
        if let Err(e) = handle.await {
            error!("Actor task failed: {:?}", e);
            first_failure.get_or_insert(e);
        }
    }
    match first_failure {
        Some(e) => Err(e.into()),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    #[tokio::test]
    async fn test_join_all_waits_for_every_task_after_a_failure() {
        let finished = Arc::new(AtomicBool::new(false));
        let flag = finished.clone();

        let failing = tokio::spawn(async { panic!("actor crashed") });
        let slow = tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            flag.store(true, Ordering::SeqCst);
        });

        let result = join_all(vec![failing, slow]).await;

        assert!(matches!(result, Err(LifecycleError::ActorTaskFailed(_))));
        assert!(finished.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_join_all_ok_when_every_task_finishes() {
        let handles = vec![tokio::spawn(async {}), tokio::spawn(async {})];
        assert!(join_all(handles).await.is_ok());
    }
}
