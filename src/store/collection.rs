//! # ManagedCollection Trait
//!
//! Shared behaviour for resource managers that sit on top of a [`CollectionClient`]:
//! listing every document and deleting one by its external identifier string.
use crate::store::{CollectionClient, Document, FrameworkError};
use async_trait::async_trait;

/// Trait for resource managers to inherit the operations that need no resource-specific rules.
///
/// Implementors provide access to their collection and a mapping from store errors to
/// their own error type. A [`FrameworkError::NotFound`] must map to the resource's
/// "not found" error: `delete` relies on it, both for missing documents and for
/// identifiers that cannot be decoded.
#[async_trait]
pub trait ManagedCollection<T: Document>: Send + Sync {
    /// The resource-specific error type.
    type Error: Send + Sync;

    /// Access the underlying collection.
    fn inner(&self) -> &CollectionClient<T>;

    /// Map store errors to the resource error type.
    fn map_error(e: FrameworkError) -> Self::Error;

    /// Every document of the collection, in natural order.
    #[tracing::instrument(skip(self))]
    async fn list(&self) -> Result<Vec<T>, Self::Error> {
        tracing::debug!("Sending request");
        self.inner().find_all().await.map_err(Self::map_error)
    }

    /// Delete the document identified by `raw_id`.
    #[tracing::instrument(skip(self))]
    async fn delete(&self, raw_id: &str) -> Result<(), Self::Error> {
        tracing::debug!("Sending request");
        // A malformed id cannot match any stored document.
        let id = T::parse_id(raw_id)
            .ok_or_else(|| Self::map_error(FrameworkError::NotFound(raw_id.to_string())))?;
        self.inner().delete_one(id).await.map_err(Self::map_error)
    }
}
