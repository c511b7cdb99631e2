//! Entity trait implementation for the Registration domain type.
//!
//! A registration is only stored once the user and event it names have been checked.
//! Those checks run in [`ActorEntity::on_create`] against the clients injected as the
//! actor's context, and the duplicate check runs in [`ActorEntity::ensure_unique`].
//! Both happen while the registration actor is handling a single Create request, so two
//! concurrent registrations for the same pair can never both pass.

use super::actions::RegistrationAction;
use super::error::RegistrationError;
use crate::clients::{EventClient, UserClient};
use crate::model::{
    Registration, RegistrationCreate, RegistrationFilter, RegistrationId, RegistrationUpdate,
};
use actor_framework::{ActorClient, ActorEntity};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
impl ActorEntity for Registration {
    type Id = RegistrationId;
    type Create = RegistrationCreate;
    type Update = RegistrationUpdate;
    type Filter = RegistrationFilter;
    type Action = RegistrationAction;
    type ActionResult = Registration;
    type Context = (UserClient, EventClient);
    type Error = RegistrationError;

    fn from_create_params(
        id: RegistrationId,
        params: RegistrationCreate,
    ) -> Result<Self, RegistrationError> {
        Ok(Self::new(id, params.user_id, params.event_id))
    }

    /// Checks the referenced user and event, failing on the first broken rule:
    /// user exists, user is active, event exists, event is open.
    async fn on_create(&mut self, ctx: &Self::Context) -> Result<(), RegistrationError> {
        let (users, events) = ctx;

        debug!(user_id = %self.user_id, "Checking user");
        let user = users
            .get(self.user_id)
            .await?
            .ok_or(RegistrationError::UserNotFound(self.user_id))?;
        if !user.is_active {
            return Err(RegistrationError::UserInactive(self.user_id));
        }

        debug!(event_id = %self.event_id, "Checking event");
        let event = events
            .get(self.event_id)
            .await?
            .ok_or(RegistrationError::EventNotFound(self.event_id))?;
        if !event.is_open {
            return Err(RegistrationError::EventClosed(self.event_id));
        }

        Ok(())
    }

    fn ensure_unique<'a>(
        &self,
        mut existing: impl Iterator<Item = &'a Self>,
    ) -> Result<(), RegistrationError>
    where
        Self: 'a,
    {
        if existing.any(|r| r.user_id == self.user_id && r.event_id == self.event_id) {
            return Err(RegistrationError::AlreadyRegistered {
                user_id: self.user_id,
                event_id: self.event_id,
            });
        }
        Ok(())
    }

    async fn on_update(
        &mut self,
        update: RegistrationUpdate,
        _ctx: &Self::Context,
    ) -> Result<(), RegistrationError> {
        if let Some(attended) = update.attended {
            self.attended = attended;
        }
        Ok(())
    }

    fn matches(&self, filter: &RegistrationFilter) -> bool {
        match filter {
            RegistrationFilter::User(user_id) => self.user_id == *user_id,
            RegistrationFilter::Event(event_id) => self.event_id == *event_id,
        }
    }

    async fn handle_action(
        &mut self,
        action: RegistrationAction,
        _ctx: &Self::Context,
    ) -> Result<Registration, RegistrationError> {
        match action {
            RegistrationAction::MarkAttended => {
                self.attended = true;
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{EventId, UserId};

    fn registration(user_id: UserId, event_id: EventId) -> Registration {
        Registration::new(RegistrationId::new(), user_id, event_id)
    }

    #[test]
    fn test_same_pair_is_not_unique() {
        let (user, event) = (UserId::new(), EventId::new());
        let stored = vec![registration(user, EventId::new()), registration(user, event)];

        let err = registration(user, event).ensure_unique(stored.iter()).unwrap_err();
        assert_eq!(
            err,
            RegistrationError::AlreadyRegistered {
                user_id: user,
                event_id: event
            }
        );
        assert!(err.is_validation());
    }

    #[test]
    fn test_other_pairs_are_unique() {
        let (user, event) = (UserId::new(), EventId::new());
        let stored = vec![
            registration(user, EventId::new()),
            registration(UserId::new(), event),
        ];
        assert!(registration(user, event).ensure_unique(stored.iter()).is_ok());
    }

    #[test]
    fn test_filters() {
        let (user, event) = (UserId::new(), EventId::new());
        let r = registration(user, event);
        assert!(r.matches(&RegistrationFilter::User(user)));
        assert!(r.matches(&RegistrationFilter::Event(event)));
        assert!(!r.matches(&RegistrationFilter::User(UserId::new())));
        assert!(!r.matches(&RegistrationFilter::Event(EventId::new())));
    }

    #[test]
    fn test_error_categories() {
        assert!(RegistrationError::UserNotFound(UserId::new()).is_not_found());
        assert!(RegistrationError::EventNotFound(EventId::new()).is_not_found());
        assert!(RegistrationError::EventClosed(EventId::new()).is_validation());
        assert!(RegistrationError::UserInactive(UserId::new()).is_validation());
        let plumbing = RegistrationError::ActorCommunicationError("closed".into());
        assert!(!plumbing.is_not_found() && !plumbing.is_validation());
    }
}
