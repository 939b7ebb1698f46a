//! Error types for the supplement collection.

use crate::error::ErrorKind;
use crate::store::FrameworkError;
use thiserror::Error;

/// Errors that can occur during supplement operations.
///
/// The `Display` output is the message returned to clients.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SupplementError {
    /// A required field is absent or empty on create.
    #[error("Missing name, description, brand_id, or price")]
    MissingFields,

    /// `brand_id` is not a well-formed identifier.
    #[error("Invalid brand_id format")]
    InvalidBrandId,

    /// `brand_id` is well-formed but no such brand exists.
    #[error("Brand not found")]
    BrandNotFound,

    /// The brand already sells a supplement with this name.
    #[error("Supplement already exists for this brand")]
    AlreadyExists,

    /// No supplement matches the given identifier.
    #[error("Supplement not found")]
    NotFound(String),

    /// An error occurred while communicating with a collection.
    #[error("Supplement store error: {0}")]
    ActorCommunicationError(String),
}

impl SupplementError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            SupplementError::MissingFields | SupplementError::InvalidBrandId => {
                ErrorKind::Validation
            }
            SupplementError::BrandNotFound | SupplementError::NotFound(_) => ErrorKind::NotFound,
            SupplementError::AlreadyExists => ErrorKind::Conflict,
            SupplementError::ActorCommunicationError(_) => ErrorKind::Internal,
        }
    }
}

impl From<FrameworkError> for SupplementError {
    fn from(e: FrameworkError) -> Self {
        match e {
            FrameworkError::NotFound(id) => SupplementError::NotFound(id),
            other => SupplementError::ActorCommunicationError(other.to_string()),
        }
    }
}
