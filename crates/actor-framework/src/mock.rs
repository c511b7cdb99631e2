//! # Mock Framework & Testing Guide
//!
//! The `MockClient<T>` type hands out a real `ResourceClient<T>` whose requests are answered
//! from a queue of expectations instead of an actor. It lets you script return values for unit
//! tests, enabling fast, deterministic testing of client logic without spawning any actors.
//!
//! ## When to use Mocks vs Real Actors
//!
//! | Feature | MockClient | Real Actor |
//! |---------|------------|------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% Deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Unit testing logic *around* the client | Testing the actor itself or full system |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires specific state) |
//!
//! ## Testing Strategies
//!
//! - **Pattern 0: Client logic (pure mock)** – wrap `mock.client()` in the typed client under test.
//! - **Pattern 1: Single actor** – spawn one `ResourceActor` with `()` context.
//! - **Pattern 2: Actor with mocked dependencies** – spawn the real actor under test and pass
//!   clients built from mocks as its context. See `tests/registration_actor_test.rs` in the
//!   `event-registry` crate.
//! - **Pattern 3: Full system** – the lifecycle orchestrator with every real actor.
//!
//! ## Scripting Failures
//!
//! ```rust
//! use actor_framework::mock::MockClient;
//! use actor_framework::{ActorEntity, FrameworkError};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)] struct Seat { id: u32 }
//! #[derive(Debug)] struct SeatCreate;
//! #[derive(Debug)] struct SeatUpdate;
//! #[derive(Debug)] enum SeatAction {}
//! #[derive(Debug, thiserror::Error)] #[error("Err")] struct SeatError;
//!
//! #[async_trait]
//! impl ActorEntity for Seat {
//!     type Id = u32; type Create = SeatCreate; type Update = SeatUpdate; type Filter = ();
//!     type Action = SeatAction; type ActionResult = (); type Context = (); type Error = SeatError;
//!     fn from_create_params(id: u32, _: SeatCreate) -> Result<Self, Self::Error> { Ok(Self { id }) }
//!     async fn on_update(&mut self, _: SeatUpdate, _: &()) -> Result<(), Self::Error> { Ok(()) }
//!     async fn handle_action(&mut self, _: SeatAction, _: &()) -> Result<(), Self::Error> { Ok(()) }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockClient::<Seat>::new();
//!     let client = mock.client();
//!
//!     mock.expect_get(1).return_err(FrameworkError::ActorClosed);
//!
//!     let result = client.get(1).await;
//!     assert!(matches!(result, Err(FrameworkError::ActorClosed)));
//!     mock.verify();
//! }
//! ```
//!
//! ## Mocking Utilities
//!
//! Use [`create_mock_client`] to get a client and a raw receiver, or the fluent [`MockClient`] API.
//! Expectations are consumed in order. A request that does not match the next expectation
//! (wrong kind or wrong id) gets no reply, so the caller sees
//! [`FrameworkError::ActorDropped`], and [`MockClient::verify`] reports the mismatch.

use crate::client::ResourceClient;
use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use crate::message::ResourceRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the response to send back.
enum Expectation<T: ActorEntity> {
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    Create {
        response: Result<T, FrameworkError>,
    },
    List {
        response: Result<Vec<T>, FrameworkError>,
    },
    Query {
        response: Result<Vec<T>, FrameworkError>,
    },
    Update {
        id: T::Id,
        response: Result<T, FrameworkError>,
    },
    Delete {
        id: T::Id,
        response: Result<(), FrameworkError>,
    },
    Action {
        id: T::Id,
        response: Result<T::ActionResult, FrameworkError>,
    },
}

impl<T: ActorEntity> Expectation<T> {
    fn describe(&self) -> String {
        match self {
            Expectation::Get { id, .. } => format!("Get({id})"),
            Expectation::Create { .. } => "Create".to_string(),
            Expectation::List { .. } => "List".to_string(),
            Expectation::Query { .. } => "Query".to_string(),
            Expectation::Update { id, .. } => format!("Update({id})"),
            Expectation::Delete { id, .. } => format!("Delete({id})"),
            Expectation::Action { id, .. } => format!("Action({id})"),
        }
    }
}

type Queue<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock client with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockClient::<User>::new();
/// mock.expect_get(user_id).return_ok(Some(user));
/// mock.expect_list().return_ok(vec![]);
///
/// let client = mock.client();
/// // Use client in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockClient<T: ActorEntity> {
    client: ResourceClient<T>,
    expectations: Queue<T>,
    mismatches: Arc<Mutex<Vec<String>>>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: ActorEntity> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ActorEntity> MockClient<T> {
    /// Creates a new mock client with no expectations.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ResourceRequest<T>>(100);
        let expectations: Queue<T> = Arc::new(Mutex::new(VecDeque::new()));
        let mismatches = Arc::new(Mutex::new(Vec::new()));
        let queue = expectations.clone();
        let failures = mismatches.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = queue.lock().unwrap().pop_front();

                match (request, expectation) {
                    (ResourceRequest::Get { id, respond_to }, Some(Expectation::Get { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Create { respond_to, .. }, Some(Expectation::Create { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::List { respond_to }, Some(Expectation::List { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Query { respond_to, .. }, Some(Expectation::Query { response })) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Update { id, respond_to, .. },
                        Some(Expectation::Update { id: want, response }),
                    ) if id == want => {
                        let _ = respond_to.send(response);
                    }
                    (ResourceRequest::Delete { id, respond_to }, Some(Expectation::Delete { id: want, response }))
                        if id == want =>
                    {
                        let _ = respond_to.send(response);
                    }
                    (
                        ResourceRequest::Action { id, respond_to, .. },
                        Some(Expectation::Action { id: want, response }),
                    ) if id == want => {
                        let _ = respond_to.send(response);
                    }
                    (request, expectation) => {
                        let expected = expectation
                            .map(|e| e.describe())
                            .unwrap_or_else(|| "nothing".to_string());
                        failures
                            .lock()
                            .unwrap()
                            .push(format!("expected {expected}, got {request:?}"));
                        // Dropping the request drops its responder
                    }
                }
            }
        });

        Self {
            client: ResourceClient::new(sender),
            expectations,
            mismatches,
            _handle: handle,
        }
    }

    /// Returns the client for use in tests.
    pub fn client(&self) -> ResourceClient<T> {
        self.client.clone()
    }

    /// Expects a `get` operation for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        self.builder(move |response| Expectation::Get { id, response })
    }

    /// Expects a `create` operation.
    pub fn expect_create(&mut self) -> ExpectationBuilder<T, T> {
        self.builder(|response| Expectation::Create { response })
    }

    /// Expects a `list` operation.
    pub fn expect_list(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::List { response })
    }

    /// Expects a `query` operation with any filter.
    pub fn expect_query(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        self.builder(|response| Expectation::Query { response })
    }

    /// Expects an `update` operation for `id`.
    pub fn expect_update(&mut self, id: T::Id) -> ExpectationBuilder<T, T> {
        self.builder(move |response| Expectation::Update { id, response })
    }

    /// Expects a `delete` operation for `id`.
    pub fn expect_delete(&mut self, id: T::Id) -> ExpectationBuilder<T, ()> {
        self.builder(move |response| Expectation::Delete { id, response })
    }

    /// Expects an `action` operation for `id`.
    pub fn expect_action(&mut self, id: T::Id) -> ExpectationBuilder<T, T::ActionResult> {
        self.builder(move |response| Expectation::Action { id, response })
    }

    fn builder<R>(
        &self,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> ExpectationBuilder<T, R> {
        ExpectationBuilder {
            make: Box::new(make),
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met and no unexpected request arrived.
    pub fn verify(&self) {
        let mismatches = self.mismatches.lock().unwrap();
        if !mismatches.is_empty() {
            panic!("Unexpected requests: {}", mismatches.join("; "));
        }
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder that completes an expectation with the response to return.
pub struct ExpectationBuilder<T: ActorEntity, R> {
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
    expectations: Queue<T>,
}

impl<T: ActorEntity, R> ExpectationBuilder<T, R> {
    /// Sets the expectation to return a successful result.
    pub fn return_ok(self, value: R) {
        let expectation = (self.make)(Ok(value));
        self.expectations.lock().unwrap().push_back(expectation);
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: FrameworkError) {
        let expectation = (self.make)(Err(error));
        self.expectations.lock().unwrap().push_back(expectation);
    }
}

// =============================================================================
// RAW CHANNEL HELPERS
// =============================================================================

/// Creates a mock client and a receiver for asserting requests.
///
/// The test plays the actor: it reads each request from `receiver`, inspects the payload,
/// and answers through the request's responder. Use this when the payload itself is what
/// the test asserts; prefer [`MockClient`] otherwise.
pub fn create_mock_client<T: ActorEntity>(
    buffer_size: usize,
) -> (ResourceClient<T>, mpsc::Receiver<ResourceRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ResourceClient::new(sender), receiver)
}

/// Helper to verify that the next message is a Create request
pub async fn expect_create<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Create,
    tokio::sync::oneshot::Sender<Result<T, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Create { params, respond_to }) => Some((params, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Query request
pub async fn expect_query<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Filter,
    tokio::sync::oneshot::Sender<Result<Vec<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Query { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is an Action request
pub async fn expect_action<T: ActorEntity>(
    receiver: &mut mpsc::Receiver<ResourceRequest<T>>,
) -> Option<(
    T::Id,
    T::Action,
    tokio::sync::oneshot::Sender<Result<T::ActionResult, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(ResourceRequest::Action {
            id,
            action,
            respond_to,
        }) => Some((id, action, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Clone, Debug, PartialEq)]
    struct Venue {
        id: u32,
        name: String,
        city: String,
    }

    #[derive(Debug)]
    struct VenueCreate {
        name: String,
        city: String,
    }

    #[derive(Debug)]
    struct VenueUpdate;

    #[derive(Debug)]
    enum VenueAction {}

    #[derive(Debug, thiserror::Error)]
    #[error("Venue error")]
    struct VenueError;

    #[async_trait]
    impl ActorEntity for Venue {
        type Id = u32;
        type Create = VenueCreate;
        type Update = VenueUpdate;
        type Filter = String;
        type Action = VenueAction;
        type ActionResult = ();
        type Context = ();
        type Error = VenueError;

        fn from_create_params(id: u32, params: VenueCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                name: params.name,
                city: params.city,
            })
        }

        async fn on_update(&mut self, _update: VenueUpdate, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }

        async fn handle_action(&mut self, _action: VenueAction, _ctx: &()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn venue(id: u32, city: &str) -> Venue {
        Venue {
            id,
            name: format!("Hall {id}"),
            city: city.to_string(),
        }
    }

    #[tokio::test]
    async fn test_raw_mock_client_sees_create_payload() {
        let (client, mut receiver) = create_mock_client::<Venue>(10);

        let create_task = tokio::spawn(async move {
            client
                .create(VenueCreate {
                    name: "Hall 1".to_string(),
                    city: "Oslo".to_string(),
                })
                .await
        });

        let (payload, responder) = expect_create(&mut receiver)
            .await
            .expect("Expected Create request");
        assert_eq!(payload.city, "Oslo");
        responder.send(Ok(venue(1, "Oslo"))).unwrap();

        let created = create_task.await.unwrap().unwrap();
        assert_eq!(created.id, 1);
    }

    #[tokio::test]
    async fn test_raw_mock_client_sees_query_filter() {
        let (client, mut receiver) = create_mock_client::<Venue>(10);

        let query_task = tokio::spawn(async move { client.query("Lima".to_string()).await });

        let (filter, responder) = expect_query(&mut receiver)
            .await
            .expect("Expected Query request");
        assert_eq!(filter, "Lima");
        responder.send(Ok(vec![venue(3, "Lima")])).unwrap();

        assert_eq!(query_task.await.unwrap().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Venue>::new();

        mock.expect_create().return_ok(venue(1, "Oslo"));
        mock.expect_get(1).return_ok(Some(venue(1, "Oslo")));
        mock.expect_list().return_ok(vec![venue(1, "Oslo"), venue(2, "Lima")]);
        mock.expect_delete(2).return_err(FrameworkError::NotFound("2".into()));

        let client = mock.client();

        let created = client
            .create(VenueCreate {
                name: "Hall 1".to_string(),
                city: "Oslo".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().city, "Oslo");

        assert_eq!(client.list().await.unwrap().len(), 2);
        assert!(client.delete(2).await.unwrap_err().is_not_found());

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_client_rejects_wrong_id() {
        let mut mock = MockClient::<Venue>::new();
        mock.expect_get(1).return_ok(None);

        let result = mock.client().get(2).await;
        assert!(matches!(result, Err(FrameworkError::ActorDropped)));

        let verdict = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| mock.verify()));
        assert!(verdict.is_err());
    }
}
