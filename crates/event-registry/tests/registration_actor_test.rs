use actor_framework::mock::MockClient;
use actor_framework::ActorClient;
use chrono::Utc;
use event_registry::clients::{EventClient, RegistrationClient, UserClient};
use event_registry::model::{Event, EventId, User, UserId};
use event_registry::registration_actor::{self, RegistrationError};

/// Real Registration actor with mocked User and Event dependencies.
/// These tests exercise the checks in `Registration::on_create` while isolating the actor
/// from the User and Event actors.
struct Harness {
    users: MockClient<User>,
    events: MockClient<Event>,
    client: RegistrationClient,
    handle: tokio::task::JoinHandle<()>,
}

impl Harness {
    fn start() -> Self {
        let users = MockClient::<User>::new();
        let events = MockClient::<Event>::new();
        let user_client = UserClient::new(users.client());
        let event_client = EventClient::new(events.client());

        // Create REAL Registration actor, spawned with the mocked clients as context
        let (actor, inner) = registration_actor::new(8);
        let handle = tokio::spawn(actor.run((user_client.clone(), event_client.clone())));
        let client = RegistrationClient::new(inner, user_client, event_client);

        Self {
            users,
            events,
            client,
            handle,
        }
    }

    async fn finish(self) {
        self.users.verify();
        self.events.verify();
        drop(self.client);
        self.handle.await.unwrap();
    }
}

fn active_user() -> User {
    User::new(UserId::new(), "Ann", "ann@x.com")
}

fn open_event() -> Event {
    Event::new(EventId::new(), "Conf", "NYC", Utc::now())
}

#[tokio::test]
async fn test_register_with_mocked_dependencies() {
    let mut h = Harness::start();
    let (user, event) = (active_user(), open_event());
    h.users.expect_get(user.id).return_ok(Some(user.clone()));
    h.events.expect_get(event.id).return_ok(Some(event.clone()));

    let before = Utc::now();
    let registration = h.client.register(user.id, event.id).await.unwrap();
    assert_eq!(registration.user_id, user.id);
    assert_eq!(registration.event_id, event.id);
    assert!(!registration.attended);
    assert!(registration.registration_date >= before);

    // The stored record is the one that was returned
    let stored = h.client.get_registration(registration.id).await.unwrap();
    assert_eq!(stored, Some(registration));

    h.finish().await;
}

#[tokio::test]
async fn test_unknown_user_stops_before_event_lookup() {
    let mut h = Harness::start();
    let (user_id, event_id) = (UserId::new(), EventId::new());
    h.users.expect_get(user_id).return_ok(None);

    let err = h.client.register(user_id, event_id).await.unwrap_err();
    assert_eq!(err, RegistrationError::UserNotFound(user_id));
    assert!(h.client.list_all().await.unwrap().is_empty());

    h.finish().await;
}

#[tokio::test]
async fn test_inactive_user_is_rejected_before_event_lookup() {
    let mut h = Harness::start();
    let mut user = active_user();
    user.is_active = false;
    h.users.expect_get(user.id).return_ok(Some(user.clone()));

    let err = h.client.register(user.id, EventId::new()).await.unwrap_err();
    assert_eq!(err, RegistrationError::UserInactive(user.id));

    h.finish().await;
}

#[tokio::test]
async fn test_unknown_event_is_rejected() {
    let mut h = Harness::start();
    let user = active_user();
    let event_id = EventId::new();
    h.users.expect_get(user.id).return_ok(Some(user.clone()));
    h.events.expect_get(event_id).return_ok(None);

    let err = h.client.register(user.id, event_id).await.unwrap_err();
    assert_eq!(err, RegistrationError::EventNotFound(event_id));
    assert!(err.is_not_found());

    h.finish().await;
}

#[tokio::test]
async fn test_closed_event_is_rejected() {
    let mut h = Harness::start();
    let user = active_user();
    let mut event = open_event();
    event.is_open = false;
    h.users.expect_get(user.id).return_ok(Some(user.clone()));
    h.events.expect_get(event.id).return_ok(Some(event.clone()));

    let err = h.client.register(user.id, event.id).await.unwrap_err();
    assert_eq!(err, RegistrationError::EventClosed(event.id));
    assert!(h.client.list_all().await.unwrap().is_empty());

    h.finish().await;
}

#[tokio::test]
async fn test_second_registration_for_pair_is_rejected() {
    let mut h = Harness::start();
    let (user, event) = (active_user(), open_event());
    for _ in 0..2 {
        h.users.expect_get(user.id).return_ok(Some(user.clone()));
        h.events.expect_get(event.id).return_ok(Some(event.clone()));
    }

    h.client.register(user.id, event.id).await.unwrap();
    let err = h.client.register(user.id, event.id).await.unwrap_err();
    assert_eq!(
        err,
        RegistrationError::AlreadyRegistered {
            user_id: user.id,
            event_id: event.id
        }
    );
    assert_eq!(h.client.list_all().await.unwrap().len(), 1);

    h.finish().await;
}

#[tokio::test]
async fn test_mark_attendance_is_idempotent() {
    let mut h = Harness::start();
    let (user, event) = (active_user(), open_event());
    h.users.expect_get(user.id).return_ok(Some(user.clone()));
    h.events.expect_get(event.id).return_ok(Some(event.clone()));

    let registration = h.client.register(user.id, event.id).await.unwrap();
    for _ in 0..2 {
        let marked = h.client.mark_attendance(registration.id).await.unwrap().unwrap();
        assert!(marked.attended);
    }

    h.finish().await;
}
