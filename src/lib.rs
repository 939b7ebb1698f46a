//! # Supplement Store
//!
//! An HTTP service that keeps a catalogue of **brands** and the **supplements** they sell.
//!
//! Records live in an in-process document store built on the actor model: each collection
//! is a Tokio task that owns its documents and answers typed requests over a channel.
//! Resource managers put the validation and referential-integrity rules on top, and a small
//! `axum` router exposes them as JSON.
//!
//! ## Rules in one place
//!
//! - A brand needs a non-empty `name` and `country`; `(name, country)` is unique.
//! - A supplement needs `name`, `description`, `brand_id` and `price`; its brand must exist
//!   when it is created, and `(name, brand_id)` is unique.
//! - Updates merge the supplied fields into the stored record.
//! - Deleting a brand leaves its supplements in place.
//!
//! Uniqueness and brand existence are checked with a read before a separate insert, so two
//! concurrent creates with the same key can both succeed.
//!
//! ## Module Tour
//!
//! ### 1. The Engine ([`store`])
//! The generic [`CollectionActor`](store::CollectionActor) and the
//! [`Document`](store::Document) trait.
//! - **Role**: Separates the record types from the plumbing (channels, message loop, merge).
//!
//! ### 2. The Records ([`model`], [`brand_actor`], [`supplement_actor`])
//! Plain data plus their `Document` implementations and per-resource error types.
//!
//! ### 3. The Rules ([`managers`])
//! [`BrandManager`](managers::BrandManager) and
//! [`SupplementManager`](managers::SupplementManager).
//!
//! ### 4. The Orchestrator ([`lifecycle`])
//! [`StoreSystem`](lifecycle::StoreSystem) starts the collections, wires the managers,
//! seeds empty collections and shuts everything down.
//!
//! ### 5. The Interface ([`http`], [`config`])
//! Routes, error responses and command-line configuration.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on 0.0.0.0:5000 with seed data
//! cargo run
//!
//! # Empty store, debug logs, another port
//! cargo run -- --skip-seed --verbose --bind 127.0.0.1:8080
//! ```
//!
//! ### Running Tests
//!
//! ```bash
//! cargo test
//! ```

pub mod brand_actor;
pub mod config;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod managers;
pub mod model;
pub mod store;
pub mod supplement_actor;
