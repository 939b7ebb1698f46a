//! Store identifiers and their external string form.
//!
//! Records are keyed by [`ObjectId`]: 12 bytes minted by the store, written outside the
//! service as 24 lowercase hex characters. Decoding never panics; a malformed string is
//! reported as `None` and each caller decides which error that becomes.

use serde::Serializer;

pub use bson::oid::ObjectId;

/// Decode an identifier from its hex form.
pub fn parse_object_id(raw: &str) -> Option<ObjectId> {
    ObjectId::parse_str(raw).ok()
}

/// `serialize_with` helper emitting the identifier as its hex string.
///
/// `ObjectId`'s own `Serialize` produces extended JSON (`{"$oid": ...}`), which is not the
/// shape clients expect.
pub fn serialize_hex<S: Serializer>(id: &ObjectId, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&id.to_hex())
}
