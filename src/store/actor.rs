//! # Collection Actor
//!
//! This module defines the `CollectionActor`, the server side of one document collection.
//! It owns the documents, mints identifiers and processes requests sequentially, so the
//! collection itself never needs a lock.

use crate::store::client::CollectionClient;
use crate::store::document::Document;
use crate::store::error::FrameworkError;
use crate::store::message::CollectionRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The actor that owns a single collection of documents.
///
/// # Architecture Note
/// This struct is the "Server" half of the collection. It owns the documents and the
/// receiver end of the channel. Every request is handled to completion before the next one
/// is read, which makes each single operation atomic. Sequences of operations issued by a
/// manager (find, then insert) are *not* atomic: other requests may interleave.
///
/// # Usage Pattern
///
/// 1.  **Create**: `CollectionActor::new()` returns the actor and a cloneable client.
/// 2.  **Run**: spawn `actor.run()` on the Tokio runtime.
/// 3.  **Use**: hand client clones to whoever needs the collection.
///
/// Documents are kept in insertion order so `find_all` and `find_one` behave like a
/// natural-order scan of a document database.
pub struct CollectionActor<T: Document> {
    receiver: mpsc::Receiver<CollectionRequest<T>>,
    documents: Vec<T>,
    next_id_fn: Box<dyn Fn() -> T::Id + Send + Sync>,
}

impl<T: Document> CollectionActor<T> {
    /// Creates a new `CollectionActor` and its associated `CollectionClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - Capacity of the MPSC channel. When full, client calls wait.
    /// * `next_id_fn` - Generator for identifiers of inserted documents.
    pub fn new(
        buffer_size: usize,
        next_id_fn: impl Fn() -> T::Id + Send + Sync + 'static,
    ) -> (Self, CollectionClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            documents: Vec::new(),
            next_id_fn: Box::new(next_id_fn),
        };
        let client = CollectionClient::new(sender);
        (actor, client)
    }

    fn position(&self, id: &T::Id) -> Option<usize> {
        self.documents.iter().position(|doc| doc.id() == id)
    }

    fn build(&self, params: T::Create) -> Result<T, FrameworkError> {
        let id = (self.next_id_fn)();
        T::from_create_params(id, params).map_err(|e| FrameworkError::EntityError(Box::new(e)))
    }

    /// Runs the actor's event loop until every client has been dropped.
    pub async fn run(mut self) {
        // Just the type name, e.g. "Brand" rather than "supplement_store::model::brand::Brand"
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(entity_type, "Collection started");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                CollectionRequest::Count { respond_to } => {
                    let size = self.documents.len();
                    debug!(entity_type, size, "Count");
                    let _ = respond_to.send(Ok(size));
                }
                CollectionRequest::FindAll { respond_to } => {
                    debug!(entity_type, size = self.documents.len(), "FindAll");
                    let _ = respond_to.send(Ok(self.documents.clone()));
                }
                CollectionRequest::FindOne { filter, respond_to } => {
                    let item = self.documents.iter().find(|doc| doc.matches(&filter)).cloned();
                    debug!(entity_type, ?filter, found = item.is_some(), "FindOne");
                    let _ = respond_to.send(Ok(item));
                }
                CollectionRequest::Get { id, respond_to } => {
                    let item = self.position(&id).map(|idx| self.documents[idx].clone());
                    debug!(entity_type, %id, found = item.is_some(), "Get");
                    let _ = respond_to.send(Ok(item));
                }
                CollectionRequest::InsertOne { params, respond_to } => {
                    debug!(entity_type, ?params, "InsertOne");
                    match self.build(params) {
                        Ok(item) => {
                            let id = item.id().clone();
                            self.documents.push(item);
                            info!(entity_type, %id, size = self.documents.len(), "Inserted");
                            let _ = respond_to.send(Ok(id));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "Insert failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                CollectionRequest::InsertMany { params, respond_to } => {
                    debug!(entity_type, count = params.len(), "InsertMany");
                    // Build every document first so a bad payload inserts nothing.
                    let built: Result<Vec<T>, FrameworkError> =
                        params.into_iter().map(|p| self.build(p)).collect();
                    match built {
                        Ok(items) => {
                            let ids: Vec<T::Id> =
                                items.iter().map(|doc| doc.id().clone()).collect();
                            self.documents.extend(items);
                            info!(
                                entity_type,
                                inserted = ids.len(),
                                size = self.documents.len(),
                                "Inserted many"
                            );
                            let _ = respond_to.send(Ok(ids));
                        }
                        Err(e) => {
                            warn!(entity_type, error = %e, "InsertMany failed");
                            let _ = respond_to.send(Err(e));
                        }
                    }
                }
                CollectionRequest::UpdateOne { id, update, respond_to } => {
                    debug!(entity_type, %id, ?update, "UpdateOne");
                    match self.position(&id) {
                        Some(idx) => {
                            let item = &mut self.documents[idx];
                            if let Err(e) = item.on_update(update) {
                                warn!(entity_type, %id, error = %e, "Update failed");
                                let error = FrameworkError::EntityError(Box::new(e));
                                let _ = respond_to.send(Err(error));
                                continue;
                            }
                            info!(entity_type, %id, "Updated");
                            let _ = respond_to.send(Ok(item.clone()));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        }
                    }
                }
                CollectionRequest::DeleteOne { id, respond_to } => {
                    debug!(entity_type, %id, "DeleteOne");
                    match self.position(&id) {
                        Some(idx) => {
                            self.documents.remove(idx);
                            info!(entity_type, %id, size = self.documents.len(), "Deleted");
                            let _ = respond_to.send(Ok(()));
                        }
                        None => {
                            warn!(entity_type, %id, "Not found");
                            let _ = respond_to.send(Err(FrameworkError::NotFound(id.to_string())));
                        }
                    }
                }
            }
        }

        info!(entity_type, size = self.documents.len(), "Shutdown");
    }
}
