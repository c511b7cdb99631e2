//! # Registration Client
//!
//! The registration service: registers users for events and serves registrations,
//! either raw or joined with the user and event they reference.
//!
//! Registration rules are enforced by the registration actor itself (see
//! [`registration_actor::entity`](crate::registration_actor::entity)). This client adds
//! the read-side joins, which need the user and event clients.
use crate::clients::{EventClient, UserClient};
use crate::model::{
    EventId, Registration, RegistrationCreate, RegistrationFilter, RegistrationId,
    RegistrationUpdate, RegistrationWithDetails, UserId,
};
use crate::registration_actor::{RegistrationAction, RegistrationError};
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, info, instrument};

/// Client for the Registration actor, joined with the User and Event stores.
#[derive(Clone)]
pub struct RegistrationClient {
    inner: ResourceClient<Registration>,
    users: UserClient,
    events: EventClient,
}

#[async_trait]
impl ActorClient<Registration> for RegistrationClient {
    type Error = RegistrationError;

    fn inner(&self) -> &ResourceClient<Registration> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        e.into_entity_error::<RegistrationError>()
            .unwrap_or_else(|e| RegistrationError::ActorCommunicationError(e.to_string()))
    }
}

impl RegistrationClient {
    pub fn new(
        inner: ResourceClient<Registration>,
        users: UserClient,
        events: EventClient,
    ) -> Self {
        Self {
            inner,
            users,
            events,
        }
    }

    /// Registers a user for an event.
    ///
    /// # Errors
    /// Checked in this order, stopping at the first failure:
    /// [`UserNotFound`](RegistrationError::UserNotFound),
    /// [`UserInactive`](RegistrationError::UserInactive),
    /// [`EventNotFound`](RegistrationError::EventNotFound),
    /// [`EventClosed`](RegistrationError::EventClosed),
    /// [`AlreadyRegistered`](RegistrationError::AlreadyRegistered).
    #[instrument(skip(self))]
    pub async fn register(
        &self,
        user_id: UserId,
        event_id: EventId,
    ) -> Result<Registration, RegistrationError> {
        info!("Sending register to actor");
        let registration = self
            .inner
            .create(RegistrationCreate { user_id, event_id })
            .await
            .map_err(Self::map_error)?;
        info!(registration_id = %registration.id, "Registered");
        Ok(registration)
    }

    /// The raw registration, if it exists.
    pub async fn get_registration(
        &self,
        id: RegistrationId,
    ) -> Result<Option<Registration>, RegistrationError> {
        self.get(id).await
    }

    /// Joins a registration with its user and event.
    ///
    /// Returns `None` when either of them no longer exists.
    #[instrument(skip(self, registration), fields(registration_id = %registration.id))]
    pub async fn get_detailed(
        &self,
        registration: &Registration,
    ) -> Result<Option<RegistrationWithDetails>, RegistrationError> {
        let Some(user) = self.users.get(registration.user_id).await? else {
            debug!(user_id = %registration.user_id, "Dropping orphaned registration");
            return Ok(None);
        };
        let Some(event) = self.events.get(registration.event_id).await? else {
            debug!(event_id = %registration.event_id, "Dropping orphaned registration");
            return Ok(None);
        };
        Ok(Some(RegistrationWithDetails::new(registration, &user, &event)))
    }

    /// Every registration whose user and event both still exist, with their details.
    #[instrument(skip(self))]
    pub async fn list_all_detailed(
        &self,
    ) -> Result<Vec<RegistrationWithDetails>, RegistrationError> {
        let mut detailed = Vec::new();
        for registration in self.list_all().await? {
            if let Some(details) = self.get_detailed(&registration).await? {
                detailed.push(details);
            }
        }
        Ok(detailed)
    }

    /// The user's registrations whose event still exists, with details.
    ///
    /// # Errors
    /// [`RegistrationError::UserNotFound`] if the user does not exist.
    #[instrument(skip(self))]
    pub async fn list_by_user_detailed(
        &self,
        user_id: UserId,
    ) -> Result<Vec<RegistrationWithDetails>, RegistrationError> {
        let user = self
            .users
            .get(user_id)
            .await?
            .ok_or(RegistrationError::UserNotFound(user_id))?;

        let registrations = self
            .inner
            .query(RegistrationFilter::User(user_id))
            .await
            .map_err(Self::map_error)?;

        let mut detailed = Vec::with_capacity(registrations.len());
        for registration in &registrations {
            match self.events.get(registration.event_id).await? {
                Some(event) => {
                    detailed.push(RegistrationWithDetails::new(registration, &user, &event))
                }
                None => debug!(event_id = %registration.event_id, "Dropping orphaned registration"),
            }
        }
        Ok(detailed)
    }

    /// Raw registrations for one event.
    #[instrument(skip(self))]
    pub async fn list_by_event(
        &self,
        event_id: EventId,
    ) -> Result<Vec<Registration>, RegistrationError> {
        self.inner
            .query(RegistrationFilter::Event(event_id))
            .await
            .map_err(Self::map_error)
    }

    /// Applies a partial update. Returns `None` if the registration does not exist.
    #[instrument(skip(self))]
    pub async fn update_registration(
        &self,
        id: RegistrationId,
        update: RegistrationUpdate,
    ) -> Result<Option<Registration>, RegistrationError> {
        self.update(id, update).await
    }

    /// Sets `attended`. Idempotent; returns `None` if the registration does not exist.
    #[instrument(skip(self))]
    pub async fn mark_attendance(
        &self,
        id: RegistrationId,
    ) -> Result<Option<Registration>, RegistrationError> {
        self.perform_action(id, RegistrationAction::MarkAttended).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Event, User};
    use actor_framework::mock::MockClient;
    use chrono::Utc;

    struct Mocks {
        registrations: MockClient<Registration>,
        users: MockClient<User>,
        events: MockClient<Event>,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                registrations: MockClient::new(),
                users: MockClient::new(),
                events: MockClient::new(),
            }
        }

        fn client(&self) -> RegistrationClient {
            RegistrationClient::new(
                self.registrations.client(),
                UserClient::new(self.users.client()),
                EventClient::new(self.events.client()),
            )
        }

        fn verify(&self) {
            self.registrations.verify();
            self.users.verify();
            self.events.verify();
        }
    }

    fn user(name: &str) -> User {
        User::new(UserId::new(), name, format!("{}@example.com", name.to_lowercase()))
    }

    fn event(title: &str) -> Event {
        Event::new(EventId::new(), title, "NYC", Utc::now())
    }

    #[tokio::test]
    async fn test_register_surfaces_typed_rule_violation() {
        let mut mocks = Mocks::new();
        let (user_id, event_id) = (UserId::new(), EventId::new());
        mocks.registrations.expect_create().return_err(FrameworkError::EntityError(Box::new(
            RegistrationError::EventClosed(event_id),
        )));

        let err = mocks.client().register(user_id, event_id).await.unwrap_err();
        assert_eq!(err, RegistrationError::EventClosed(event_id));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_list_all_detailed_drops_orphans() {
        let mut mocks = Mocks::new();
        let (ann, bob) = (user("Ann"), user("Bob"));
        let (gone, conf) = (EventId::new(), event("Conf"));
        let orphan = Registration::new(RegistrationId::new(), ann.id, gone);
        let kept = Registration::new(RegistrationId::new(), bob.id, conf.id);

        mocks
            .registrations
            .expect_list()
            .return_ok(vec![orphan.clone(), kept.clone()]);
        mocks.users.expect_get(ann.id).return_ok(Some(ann.clone()));
        mocks.events.expect_get(gone).return_ok(None);
        mocks.users.expect_get(bob.id).return_ok(Some(bob.clone()));
        mocks.events.expect_get(conf.id).return_ok(Some(conf.clone()));

        let detailed = mocks.client().list_all_detailed().await.unwrap();
        assert_eq!(detailed, vec![RegistrationWithDetails::new(&kept, &bob, &conf)]);
        mocks.verify();
    }

    #[tokio::test]
    async fn test_get_detailed_skips_event_lookup_when_user_is_gone() {
        let mut mocks = Mocks::new();
        let registration = Registration::new(RegistrationId::new(), UserId::new(), EventId::new());
        mocks.users.expect_get(registration.user_id).return_ok(None);

        let details = mocks.client().get_detailed(&registration).await.unwrap();
        assert!(details.is_none());
        mocks.verify();
    }

    #[tokio::test]
    async fn test_list_by_user_detailed_requires_user() {
        let mut mocks = Mocks::new();
        let missing = UserId::new();
        mocks.users.expect_get(missing).return_ok(None);

        let err = mocks.client().list_by_user_detailed(missing).await.unwrap_err();
        assert_eq!(err, RegistrationError::UserNotFound(missing));
        mocks.verify();
    }

    #[tokio::test]
    async fn test_list_by_user_detailed_joins_each_event() {
        let mut mocks = Mocks::new();
        let ann = user("Ann");
        let (conf, meetup) = (event("Conf"), event("Meetup"));
        let first = Registration::new(RegistrationId::new(), ann.id, conf.id);
        let second = Registration::new(RegistrationId::new(), ann.id, meetup.id);

        mocks.users.expect_get(ann.id).return_ok(Some(ann.clone()));
        mocks
            .registrations
            .expect_query()
            .return_ok(vec![first.clone(), second.clone()]);
        mocks.events.expect_get(conf.id).return_ok(Some(conf.clone()));
        mocks.events.expect_get(meetup.id).return_ok(None);

        let detailed = mocks.client().list_by_user_detailed(ann.id).await.unwrap();
        assert_eq!(detailed.len(), 1);
        assert_eq!(detailed[0].registration, first);
        assert_eq!(detailed[0].user_name, "Ann");
        assert_eq!(detailed[0].event_title, "Conf");
        mocks.verify();
    }

    #[tokio::test]
    async fn test_mark_attendance_unknown_id_is_none() {
        let mut mocks = Mocks::new();
        let id = RegistrationId::new();
        mocks
            .registrations
            .expect_action(id)
            .return_err(FrameworkError::NotFound(id.to_string()));

        assert!(mocks.client().mark_attendance(id).await.unwrap().is_none());
        mocks.verify();
    }
}
