//! Process lifecycle: starting the collections, seeding them, logging setup and shutdown.

pub mod seed;
pub mod store_system;
pub mod tracing;

pub use seed::{initialize_database, SeedReport};
pub use store_system::StoreSystem;
