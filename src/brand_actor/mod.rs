//! # Brand Actor
//!
//! The brand collection: brands have no dependencies on other collections.
//!
//! ## Structure
//!
//! - [`entity`] - [`Document`](crate::store::Document) implementation for [`Brand`]
//! - [`error`] - [`BrandError`] type for type-safe error handling
//! - [`new()`] - Factory function that creates the collection actor and client
//!
//! ## Usage
//!
//! ```rust
//! use supplement_store::brand_actor;
//! use supplement_store::managers::BrandManager;
//! use supplement_store::model::NewBrand;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, collection) = brand_actor::new(32);
//!     tokio::spawn(actor.run());
//!
//!     let brands = BrandManager::new(collection);
//!     let brand = brands
//!         .create(NewBrand {
//!             name: Some("Brand A".to_string()),
//!             country: Some("Japan".to_string()),
//!         })
//!         .await?;
//!     assert_eq!(brand.country, "Japan");
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::model::{Brand, ObjectId};
use crate::store::{CollectionActor, CollectionClient};

/// Creates the brand collection actor and its client.
pub fn new(buffer_size: usize) -> (CollectionActor<Brand>, CollectionClient<Brand>) {
    CollectionActor::new(buffer_size, ObjectId::new)
}
