//! # Collection Messages
//!
//! The request enum exchanged between a [`CollectionClient`](crate::store::CollectionClient)
//! and its [`CollectionActor`](crate::store::CollectionActor).

use crate::store::document::Document;
use crate::store::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by collections.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Message sent to a collection actor.
///
/// # Document-store operations
/// Variants mirror the operations of a document collection rather than plain CRUD:
///
/// - **Count**: number of stored documents.
/// - **FindAll**: every document, in insertion order.
/// - **FindOne**: first document matching a [`Document::Filter`].
/// - **Get**: lookup by identifier (`find_one({_id})`).
/// - **InsertOne / InsertMany**: mint ids and store new documents.
/// - **UpdateOne**: merge a [`Document::Update`] into the document with the given id.
/// - **DeleteOne**: remove the document with the given id.
///
/// The enum is generic over `T: Document`, so payload and filter types are checked at
/// compile time per collection.
#[derive(Debug)]
pub enum CollectionRequest<T: Document> {
    Count {
        respond_to: Response<usize>,
    },
    FindAll {
        respond_to: Response<Vec<T>>,
    },
    FindOne {
        filter: T::Filter,
        respond_to: Response<Option<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    InsertOne {
        params: T::Create,
        respond_to: Response<T::Id>,
    },
    InsertMany {
        params: Vec<T::Create>,
        respond_to: Response<Vec<T::Id>>,
    },
    UpdateOne {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    DeleteOne {
        id: T::Id,
        respond_to: Response<()>,
    },
}
