use super::{Event, EventId, RegistrationId, User, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user's registration for an event.
///
/// `user_id` and `event_id` are weak references: deleting the user or the event
/// leaves the registration in place, and detailed views skip it.
///
/// # Actor Framework
/// Managed by a [`ResourceActor`](actor_framework::ResourceActor) whose context carries
/// the user and event clients; see
/// [`impl ActorEntity for Registration`](#impl-ActorEntity-for-Registration) for the
/// checks run before a registration is stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Registration {
    pub id: RegistrationId,
    pub user_id: UserId,
    pub event_id: EventId,
    pub registration_date: DateTime<Utc>,
    pub attended: bool,
}

/// Payload for registering a user for an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationCreate {
    pub user_id: UserId,
    pub event_id: EventId,
}

/// Partial registration update. `None` leaves `attended` untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationUpdate {
    #[serde(default)]
    pub attended: Option<bool>,
}

/// Query criteria for the registration store.
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationFilter {
    User(UserId),
    Event(EventId),
}

/// A registration joined with the user and event it points at.
///
/// Built at read time and never stored, so the copied fields reflect the
/// user and event as they were when the view was requested.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistrationWithDetails {
    #[serde(flatten)]
    pub registration: Registration,
    pub user_name: String,
    pub user_email: String,
    pub event_title: String,
    pub event_location: String,
    pub event_date: DateTime<Utc>,
}

impl Registration {
    /// Creates a registration stamped with the current time, not yet attended.
    pub fn new(id: RegistrationId, user_id: UserId, event_id: EventId) -> Self {
        Self {
            id,
            user_id,
            event_id,
            registration_date: Utc::now(),
            attended: false,
        }
    }
}

impl RegistrationWithDetails {
    pub fn new(registration: &Registration, user: &User, event: &Event) -> Self {
        Self {
            registration: registration.clone(),
            user_name: user.name.clone(),
            user_email: user.email.clone(),
            event_title: event.title.clone(),
            event_location: event.location.clone(),
            event_date: event.date,
        }
    }
}
