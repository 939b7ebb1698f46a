//! Plain record types and their payload DTOs.
//!
//! Records serialize to the response shape directly: identifier fields become hex strings
//! and the identifier is exposed as `id`.

pub mod brand;
pub mod id;
pub mod supplement;

pub use brand::*;
pub use id::{parse_object_id, ObjectId};
pub use supplement::*;
