//! # Store Errors
//!
//! Failures raised by the collection actors themselves, independent of any record type.
//! Resource errors (`BrandError`, `SupplementError`) wrap these when talking to the store.

/// Errors that can occur within the store layer.
#[derive(Debug, thiserror::Error)]
pub enum FrameworkError {
    #[error("Collection closed")]
    ActorClosed,
    #[error("Collection dropped response channel")]
    ActorDropped,
    #[error("Document not found: {0}")]
    NotFound(String),
    #[error("Document error: {0}")]
    EntityError(Box<dyn std::error::Error + Send + Sync>),
}
