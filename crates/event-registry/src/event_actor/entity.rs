//! Entity trait implementation for the Event domain type.

use super::actions::EventAction;
use super::error::EventError;
use crate::model::{Event, EventCreate, EventId, EventUpdate};
use actor_framework::ActorEntity;
use async_trait::async_trait;

#[async_trait]
impl ActorEntity for Event {
    type Id = EventId;
    type Create = EventCreate;
    type Update = EventUpdate;
    type Filter = ();
    type Action = EventAction;
    type ActionResult = Event;
    type Context = ();
    type Error = EventError;

    /// Creates a new Event, open for registration.
    fn from_create_params(id: EventId, params: EventCreate) -> Result<Self, EventError> {
        Ok(Self::new(id, params.title, params.location, params.date))
    }

    /// Handles updates to the Event entity.
    ///
    /// # Fields Updated
    /// - `title`
    /// - `location`
    /// - `date`
    /// - `is_open`: registration status
    async fn on_update(&mut self, update: EventUpdate, _ctx: &()) -> Result<(), EventError> {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(location) = update.location {
            self.location = location;
        }
        if let Some(date) = update.date {
            self.date = date;
        }
        if let Some(is_open) = update.is_open {
            self.is_open = is_open;
        }
        Ok(())
    }

    async fn handle_action(&mut self, action: EventAction, _ctx: &()) -> Result<Event, EventError> {
        match action {
            EventAction::CloseRegistration => {
                self.is_open = false;
                Ok(self.clone())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn conf() -> Event {
        let date = Utc.with_ymd_and_hms(2026, 5, 1, 9, 0, 0).unwrap();
        Event::from_create_params(EventId::new(), EventCreate::new("Conf", "NYC", date)).unwrap()
    }

    #[test]
    fn test_new_event_is_open() {
        assert!(conf().is_open);
    }

    #[tokio::test]
    async fn test_close_registration_is_idempotent() {
        let mut event = conf();
        assert!(!event.handle_action(EventAction::CloseRegistration, &()).await.unwrap().is_open);
        assert!(!event.handle_action(EventAction::CloseRegistration, &()).await.unwrap().is_open);
    }

    #[tokio::test]
    async fn test_partial_update() {
        let mut event = conf();
        let original_date = event.date;
        let update = EventUpdate {
            location: Some("Boston".into()),
            is_open: Some(false),
            ..Default::default()
        };
        event.on_update(update, &()).await.unwrap();
        assert_eq!(event.location, "Boston");
        assert!(!event.is_open);
        assert_eq!(event.title, "Conf");
        assert_eq!(event.date, original_date);
    }
}
