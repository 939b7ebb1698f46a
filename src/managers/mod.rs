//! Resource managers: the validation and referential-integrity rules on top of the
//! collections.
//!
//! Each manager wraps a [`CollectionClient`](crate::store::CollectionClient) and inherits
//! `list` and `delete` from [`ManagedCollection`](crate::store::ManagedCollection).

pub mod brand_manager;
pub mod supplement_manager;

pub use brand_manager::*;
pub use supplement_manager::*;

/// A required text field counts as supplied only when present and non-empty.
pub(crate) fn required(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
