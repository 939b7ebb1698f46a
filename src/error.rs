//! # Error Kinds
//!
//! Every resource error (`BrandError`, `SupplementError`) falls into one of a handful of
//! kinds. The kind alone decides the HTTP status; the error's `Display` is the message.

/// Classification of a failed operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed input, including malformed identifiers.
    Validation,
    /// A uniqueness rule would be broken.
    Conflict,
    /// No record matches the identifier, or a referenced record does not exist.
    NotFound,
    /// The store could not be reached.
    Internal,
}

impl ErrorKind {
    /// HTTP status code for this kind.
    pub fn status_code(self) -> u16 {
        match self {
            ErrorKind::Validation => 400,
            ErrorKind::Conflict => 409,
            ErrorKind::NotFound => 404,
            ErrorKind::Internal => 500,
        }
    }
}
