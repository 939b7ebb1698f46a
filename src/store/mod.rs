//! In-process document store.
//!
//! Each collection is a [`CollectionActor`] running in its own Tokio task, reached through a
//! cloneable [`CollectionClient`]. Record types plug in by implementing [`Document`].
//!
//! # Main Components
//!
//! - [`Document`] - Trait that stored record types implement
//! - [`CollectionActor`] - Task that owns one collection
//! - [`CollectionClient`] - Typed handle sending [`CollectionRequest`]s
//! - [`ManagedCollection`] - Default `list`/`delete` for resource managers
//! - [`FrameworkError`] - Store-level failures
//!
//! # Testing
//!
//! See [`mock`] for utilities to test managers without spawning collections.

pub mod actor;
pub mod client;
pub mod collection;
pub mod document;
pub mod error;
pub mod message;
pub mod mock;

pub use actor::CollectionActor;
pub use client::CollectionClient;
pub use collection::ManagedCollection;
pub use document::Document;
pub use error::FrameworkError;
pub use message::{CollectionRequest, Response};
