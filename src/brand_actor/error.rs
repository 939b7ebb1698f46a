//! Error types for the brand collection.

use crate::error::ErrorKind;
use crate::store::FrameworkError;
use thiserror::Error;

/// Errors that can occur during brand operations.
///
/// The `Display` output is the message returned to clients.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BrandError {
    /// `name` or `country` absent or empty on create.
    #[error("Missing name or country")]
    MissingFields,

    /// A brand with the same name and country already exists.
    #[error("Brand already exists")]
    AlreadyExists,

    /// No brand matches the given identifier.
    #[error("Brand not found")]
    NotFound(String),

    /// An error occurred while communicating with the brand collection.
    #[error("Brand store error: {0}")]
    ActorCommunicationError(String),
}

impl BrandError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            BrandError::MissingFields => ErrorKind::Validation,
            BrandError::AlreadyExists => ErrorKind::Conflict,
            BrandError::NotFound(_) => ErrorKind::NotFound,
            BrandError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}

impl From<FrameworkError> for BrandError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => BrandError::NotFound(id),
            other => BrandError::ActorCommunicationError(other.to_string()),
        }
    }
}
