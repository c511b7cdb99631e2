use super::EventId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An event users can register for.
///
/// Registration is open on creation and can be closed once through
/// [`EventAction::CloseRegistration`](crate::event_actor::EventAction::CloseRegistration).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub location: String,
    pub date: DateTime<Utc>,
    pub is_open: bool,
}

/// Payload for creating a new event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventCreate {
    pub title: String,
    pub location: String,
    pub date: DateTime<Utc>,
}

/// Payload for updating an existing event. `None` fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub is_open: Option<bool>,
}

impl Event {
    pub fn new(
        id: EventId,
        title: impl Into<String>,
        location: impl Into<String>,
        date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            location: location.into(),
            date,
            is_open: true,
        }
    }
}

impl EventCreate {
    pub fn new(title: impl Into<String>, location: impl Into<String>, date: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            location: location.into(),
            date,
        }
    }
}
