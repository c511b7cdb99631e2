//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
use crate::model::{User, UserCreate, UserId, UserUpdate};
use crate::user_actor::{UserAction, UserError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<UserError>()
            .unwrap_or_else(|e| UserError::ActorCommunicationError(e.to_string()))
    }
}

impl UserClient {
    /// Creates an active user. Fails with [`UserError::InvalidEmail`] for a malformed address.
    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserCreate) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Applies a partial update. Returns `None` if the user does not exist.
    #[instrument(skip(self))]
    pub async fn update_user(
        &self,
        id: UserId,
        update: UserUpdate,
    ) -> Result<Option<User>, UserError> {
        self.update(id, update).await
    }

    /// Marks the user inactive. Returns `None` if the user does not exist.
    #[instrument(skip(self))]
    pub async fn deactivate_user(&self, id: UserId) -> Result<Option<User>, UserError> {
        self.perform_action(id, UserAction::Deactivate).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actor_framework::mock::MockClient;

    #[tokio::test]
    async fn test_create_user_recovers_invalid_email() {
        let mut mock = MockClient::<User>::new();
        mock.expect_create().return_err(FrameworkError::EntityError(Box::new(
            UserError::InvalidEmail("nope".into()),
        )));
        let client = UserClient::new(mock.client());

        let err = client.create_user(UserCreate::new("Eve", "nope")).await.unwrap_err();
        assert_eq!(err, UserError::InvalidEmail("nope".into()));
        mock.verify();
    }

    #[tokio::test]
    async fn test_deactivate_unknown_user_is_none() {
        let mut mock = MockClient::<User>::new();
        let id = UserId::new();
        mock.expect_action(id)
            .return_err(FrameworkError::NotFound(id.to_string()));
        let client = UserClient::new(mock.client());

        assert!(client.deactivate_user(id).await.unwrap().is_none());
        mock.verify();
    }

    #[tokio::test]
    async fn test_plumbing_errors_become_communication_errors() {
        let mut mock = MockClient::<User>::new();
        let id = UserId::new();
        mock.expect_get(id).return_err(FrameworkError::ActorDropped);
        let client = UserClient::new(mock.client());

        let err = client.get(id).await.unwrap_err();
        assert!(matches!(err, UserError::ActorCommunicationError(_)));
        mock.verify();
    }
}
