//! # Supplement Actor
//!
//! The supplement collection. Supplements reference a brand by `brand_id`; the reference is
//! checked by [`SupplementManager`](crate::managers::SupplementManager) on create, not by the
//! collection.
//!
//! - [`entity`] - [`Document`](crate::store::Document) implementation for [`Supplement`]
//! - [`error`] - [`SupplementError`]

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{ObjectId, Supplement};
use crate::store::{CollectionActor, CollectionClient};

/// Creates the supplement collection actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<Supplement>, CollectionClient<Supplement>) {
    CollectionActor::new(buffer_size, ObjectId::new)
}
