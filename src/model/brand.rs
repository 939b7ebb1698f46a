use crate::model::id::{serialize_hex, ObjectId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents a supplement manufacturer.
///
/// # Store
/// This struct implements the [`Document`](crate::store::Document) trait,
/// allowing it to be kept in a [`CollectionActor`](crate::store::CollectionActor).
///
/// See [`impl Document for Brand`](#impl-Document-for-Brand) for details on:
/// - Insert payload ([`BrandCreate`])
/// - Merge patch ([`BrandUpdate`])
/// - Lookup filter ([`BrandFilter`])
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Brand {
    #[serde(serialize_with = "serialize_hex")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub name: String,
    pub country: String,
}

impl Brand {
    /// Creates a new Brand instance.
    ///
    /// # Arguments
    /// * `id` - Identifier (normally minted by the brand collection)
    /// * `name` - Brand name
    /// * `country` - Country of origin
    pub fn new(id: ObjectId, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
        }
    }
}

/// Request body for `POST /brands`.
///
/// Both fields are optional at the schema level so that a missing field is reported as
/// `"Missing name or country"` rather than a decoding error.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewBrand {
    pub name: Option<String>,
    pub country: Option<String>,
}

/// Validated payload for inserting a brand.
#[derive(Debug, Clone)]
pub struct BrandCreate {
    pub name: String,
    pub country: String,
}

/// Partial update for a brand, also the request body of `PUT /brands/{id}`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct BrandUpdate {
    pub name: Option<String>,
    pub country: Option<String>,
}

/// Equality filter over brands; unset fields match anything.
#[derive(Debug, Clone, Default)]
pub struct BrandFilter {
    pub name: Option<String>,
    pub country: Option<String>,
}

impl BrandFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            country: None,
        }
    }

    pub fn by_name_and_country(name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            country: Some(country.into()),
        }
    }
}
