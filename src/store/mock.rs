//! # Mock Collections & Testing Guide
//!
//! `MockClient<T>` hands out a real [`CollectionClient<T>`] whose requests are answered from
//! a queue of expectations instead of a running [`CollectionActor`](crate::store::CollectionActor).
//! It is the tool for testing manager logic *around* a collection, in particular failure
//! paths that are awkward to provoke with real data.
//!
//! ## When to use Mocks vs Real Collections
//!
//! | Feature | MockClient | Real Collection |
//! |---------|------------|-----------------|
//! | **State** | None (scripted replies) | Real documents |
//! | **Determinism** | Fully scripted | Subject to scheduler |
//! | **Use Case** | Dependencies of the unit under test | The collection itself, full system |
//! | **Error Injection** | `return_err` | Hard |
//!
//! ## Testing Strategies
//!
//! 1. **Pure mock**: every collection the manager touches is mocked.
//! 2. **Single collection**: spawn one real collection, no dependencies (brand manager tests).
//! 3. **Collection with mocked dependencies**: real supplement collection, mocked brand
//!    collection (see the supplement manager tests).
//! 4. **Full system**: [`StoreSystem`](crate::lifecycle::StoreSystem) in `tests/`.
//!
//! ```rust,ignore
//! let mut brands = MockClient::<Brand>::new();
//! brands.expect_get(brand_id).return_ok(None);
//!
//! let manager = SupplementManager::new(supplements, brands.client());
//! let result = manager.create(input).await;
//! assert!(matches!(result, Err(SupplementError::BrandNotFound)));
//! brands.verify();
//! ```
//!
//! ## Asserting that nothing was sent
//!
//! [`create_mock_client`] returns the raw receiver, so a test can check that a rejected
//! request never reached the store:
//!
//! ```rust,ignore
//! let (client, mut receiver) = create_mock_client::<Brand>(10);
//! // ... call the manager with invalid input ...
//! assert!(receiver.try_recv().is_err());
//! ```

use crate::store::client::CollectionClient;
use crate::store::document::Document;
use crate::store::error::FrameworkError;
use crate::store::message::CollectionRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// An expected request and the reply to send back.
enum Expectation<T: Document> {
    FindAll {
        response: Result<Vec<T>, FrameworkError>,
    },
    FindOne {
        response: Result<Option<T>, FrameworkError>,
    },
    Get {
        id: T::Id,
        response: Result<Option<T>, FrameworkError>,
    },
    InsertOne {
        response: Result<T::Id, FrameworkError>,
    },
}

type Expectations<T> = Arc<Mutex<VecDeque<Expectation<T>>>>;

/// A mock collection with expectation tracking for fluent testing.
///
/// Expectations are consumed in order. A request that does not match the next expectation
/// (or arrives when none is left) panics the mock task, which surfaces in the test as a
/// dropped response channel.
pub struct MockClient<T: Document> {
    client: CollectionClient<T>,
    expectations: Expectations<T>,
    _handle: tokio::task::JoinHandle<()>,
}

impl<T: Document> Default for MockClient<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Document> MockClient<T> {
    /// Creates a new mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<CollectionRequest<T>>(100);
        let expectations: Expectations<T> = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        let handle = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = expectations_clone.lock().unwrap().pop_front();

                match (request, expectation) {
                    (
                        CollectionRequest::FindAll { respond_to },
                        Some(Expectation::FindAll { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::FindOne { respond_to, .. },
                        Some(Expectation::FindOne { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::Get { id, respond_to },
                        Some(Expectation::Get {
                            id: expected,
                            response,
                        }),
                    ) => {
                        assert_eq!(id, expected, "Get called with unexpected id");
                        let _ = respond_to.send(response);
                    }
                    (
                        CollectionRequest::InsertOne { respond_to, .. },
                        Some(Expectation::InsertOne { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            client: CollectionClient::new(sender),
            expectations,
            _handle: handle,
        }
    }

    /// Returns a client wired to this mock.
    pub fn client(&self) -> CollectionClient<T> {
        self.client.clone()
    }

    /// Expects a `find_all` call.
    pub fn expect_find_all(&mut self) -> ExpectationBuilder<T, Vec<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::FindAll { response }
        })
    }

    /// Expects a `find_one` call, whatever the filter.
    pub fn expect_find_one(&mut self) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::FindOne { response }
        })
    }

    /// Expects a `get` call for `id`.
    pub fn expect_get(&mut self, id: T::Id) -> ExpectationBuilder<T, Option<T>> {
        ExpectationBuilder::new(self.expectations.clone(), move |response| {
            Expectation::Get { id, response }
        })
    }

    /// Expects an `insert_one` call.
    pub fn expect_insert(&mut self) -> ExpectationBuilder<T, T::Id> {
        ExpectationBuilder::new(self.expectations.clone(), |response| {
            Expectation::InsertOne { response }
        })
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let remaining = self.expectations.lock().unwrap().len();
        if remaining != 0 {
            panic!("Not all expectations were met. {} remaining", remaining);
        }
    }
}

/// Builder that records the reply for one expected request.
pub struct ExpectationBuilder<T: Document, R> {
    expectations: Expectations<T>,
    make: Box<dyn FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send>,
}

impl<T: Document, R> ExpectationBuilder<T, R> {
    fn new(
        expectations: Expectations<T>,
        make: impl FnOnce(Result<R, FrameworkError>) -> Expectation<T> + Send + 'static,
    ) -> Self {
        Self {
            expectations,
            make: Box::new(make),
        }
    }

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

/// Creates a client and hands back the receiving end of its channel.
///
/// Useful to inspect the exact requests a manager sends, or to assert that it sent none.
/// Consider [`MockClient`] for scripted replies.
pub fn create_mock_client<T: Document>(
    buffer_size: usize,
) -> (CollectionClient<T>, mpsc::Receiver<CollectionRequest<T>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (CollectionClient::new(sender), receiver)
}

/// Helper to verify that the next message is a FindOne request.
pub async fn expect_find_one<T: Document>(
    receiver: &mut mpsc::Receiver<CollectionRequest<T>>,
) -> Option<(
    T::Filter,
    tokio::sync::oneshot::Sender<Result<Option<T>, FrameworkError>>,
)> {
    match receiver.recv().await {
        Some(CollectionRequest::FindOne { filter, respond_to }) => Some((filter, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Tag {
        id: u32,
        label: String,
    }

    #[derive(Debug)]
    struct TagCreate {
        label: String,
    }

    #[derive(Debug)]
    struct TagFilter {
        label: String,
    }

    #[derive(Debug, thiserror::Error)]
    #[error("Tag error")]
    struct TagError;

    impl Document for Tag {
        type Id = u32;
        type Create = TagCreate;
        type Update = ();
        type Filter = TagFilter;
        type Error = TagError;

        fn from_create_params(id: u32, params: TagCreate) -> Result<Self, Self::Error> {
            Ok(Self {
                id,
                label: params.label,
            })
        }
        fn id(&self) -> &u32 {
            &self.id
        }
        fn parse_id(raw: &str) -> Option<u32> {
            raw.parse().ok()
        }
        fn matches(&self, filter: &TagFilter) -> bool {
            self.label == filter.label
        }
        fn on_update(&mut self, _update: ()) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    fn tag(id: u32, label: &str) -> Tag {
        Tag {
            id,
            label: label.into(),
        }
    }

    #[tokio::test]
    async fn test_raw_channel_find_one() {
        let (client, mut receiver) = create_mock_client::<Tag>(10);

        let task = tokio::spawn(async move {
            let filter = TagFilter {
                label: "vegan".into(),
            };
            client.find_one(filter).await
        });

        let (filter, responder) = expect_find_one(&mut receiver)
            .await
            .expect("Expected FindOne request");
        assert_eq!(filter.label, "vegan");
        responder.send(Ok(Some(tag(7, "vegan")))).unwrap();

        let found = task.await.unwrap().unwrap();
        assert_eq!(found.map(|t| t.id), Some(7));
    }

    #[tokio::test]
    async fn test_mock_client_with_expectations() {
        let mut mock = MockClient::<Tag>::new();
        mock.expect_insert().return_ok(1);
        mock.expect_get(1).return_ok(Some(tag(1, "organic")));
        mock.expect_find_all().return_err(FrameworkError::ActorClosed);

        let client = mock.client();
        let create = TagCreate {
            label: "organic".into(),
        };
        let id = client.insert_one(create).await.unwrap();
        assert_eq!(id, 1);

        let fetched = client.get(1).await.unwrap();
        assert_eq!(fetched.unwrap().label, "organic");

        let listed = client.find_all().await;
        assert!(matches!(listed, Err(FrameworkError::ActorClosed)));

        mock.verify();
    }
}
