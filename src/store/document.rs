//! # Document Trait
//!
//! The `Document` trait is the contract every record type (Brand, Supplement, ...) fulfils to be
//! kept in a [`CollectionActor`](crate::store::CollectionActor). It names the identifier, the
//! insert payload, the merge patch and the filter used by `find_one`, and provides the merge
//! hook that applies a partial update to a stored record.
//!
//! # Architecture Note
//! The collection logic (insert, lookup, merge, delete) is written *once* against this trait.
//! Associated types keep the operations type-safe: a brand collection only accepts a
//! `BrandCreate` payload and a `BrandFilter`, so a supplement filter can never be sent to it.

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Trait that any stored record must implement to live in a collection.
pub trait Document: Clone + Send + Sync + 'static {
    /// Store-assigned identifier (e.g. `ObjectId`).
    type Id: Eq + Hash + Clone + Send + Sync + Display + Debug;

    /// Validated payload used to build a new record (DTO).
    type Create: Send + Sync + Debug;

    /// Partial update. Fields that are absent keep their stored value.
    type Update: Send + Sync + Debug;

    /// Equality filter used by `find_one`. Every field that is set must match.
    type Filter: Send + Sync + Debug;

    /// Error raised by the hooks below.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Build the full record from the freshly minted id and the insert payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// The record's identifier.
    fn id(&self) -> &Self::Id;

    /// Decode an identifier from its external string form. `None` when malformed.
    fn parse_id(raw: &str) -> Option<Self::Id>;

    /// Returns true when the record satisfies `filter`.
    fn matches(&self, filter: &Self::Filter) -> bool;

    /// Merge a partial update into the stored record.
    fn on_update(&mut self, update: Self::Update) -> Result<(), Self::Error>;
}
