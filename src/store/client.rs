//! # Collection Client
//!
//! The generic handle used to talk to a [`CollectionActor`](crate::store::CollectionActor).

use crate::store::document::Document;
use crate::store::error::FrameworkError;
use crate::store::message::{CollectionRequest, Response};
use tokio::sync::{mpsc, oneshot};

/// ## CollectionClient
///
/// Type-safe async API over one collection. Every call sends a [`CollectionRequest`] over
/// the actor's mpsc channel and awaits the reply on a oneshot channel. Cloning only clones
/// the sender, so the client is cheap to share between request handlers.
pub struct CollectionClient<T: Document> {
    sender: mpsc::Sender<CollectionRequest<T>>,
}

// Manual impl: deriving would require `T: Clone` bounds on the payload types too.
impl<T: Document> Clone for CollectionClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: Document> CollectionClient<T> {
    pub fn new(sender: mpsc::Sender<CollectionRequest<T>>) -> Self {
        Self { sender }
    }

    async fn request<R>(
        &self,
        build: impl FnOnce(Response<R>) -> CollectionRequest<T>,
    ) -> Result<R, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)?
    }

    pub async fn count(&self) -> Result<usize, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Count { respond_to })
            .await
    }

    pub async fn find_all(&self) -> Result<Vec<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::FindAll { respond_to })
            .await
    }

    pub async fn find_one(&self, filter: T::Filter) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::FindOne { filter, respond_to })
            .await
    }

    pub async fn get(&self, id: T::Id) -> Result<Option<T>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::Get { id, respond_to })
            .await
    }

    pub async fn insert_one(&self, params: T::Create) -> Result<T::Id, FrameworkError> {
        self.request(|respond_to| CollectionRequest::InsertOne { params, respond_to })
            .await
    }

    pub async fn insert_many(&self, params: Vec<T::Create>) -> Result<Vec<T::Id>, FrameworkError> {
        self.request(|respond_to| CollectionRequest::InsertMany { params, respond_to })
            .await
    }

    pub async fn update_one(&self, id: T::Id, update: T::Update) -> Result<T, FrameworkError> {
        self.request(|respond_to| CollectionRequest::UpdateOne {
            id,
            update,
            respond_to,
        })
        .await
    }

    pub async fn delete_one(&self, id: T::Id) -> Result<(), FrameworkError> {
        self.request(|respond_to| CollectionRequest::DeleteOne { id, respond_to })
            .await
    }
}
