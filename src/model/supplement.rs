use crate::model::id::{serialize_hex, ObjectId};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Represents a supplement product sold under a brand.
///
/// # Store
/// This struct implements the [`Document`](crate::store::Document) trait,
/// allowing it to be kept in a [`CollectionActor`](crate::store::CollectionActor).
///
/// `brand_id` is stored in native [`ObjectId`] form and written out as a hex string, never
/// expanded into the brand's fields.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct Supplement {
    #[serde(serialize_with = "serialize_hex")]
    #[schema(value_type = String)]
    pub id: ObjectId,
    pub name: String,
    pub description: String,
    #[serde(serialize_with = "serialize_hex")]
    #[schema(value_type = String)]
    pub brand_id: ObjectId,
    pub price: f64,
}

/// Request body for `POST /supplements`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct NewSupplement {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand_id: Option<String>,
    pub price: Option<f64>,
}

/// Validated payload for inserting a supplement.
#[derive(Debug, Clone)]
pub struct SupplementCreate {
    pub name: String,
    pub description: String,
    pub brand_id: ObjectId,
    pub price: f64,
}

/// Request body of `PUT /supplements/{id}`. `brand_id` is still in external string form.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct SupplementPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand_id: Option<String>,
    pub price: Option<f64>,
}

/// Partial update applied to a stored supplement.
#[derive(Debug, Clone, Default)]
pub struct SupplementUpdate {
    pub name: Option<String>,
    pub description: Option<String>,
    pub brand_id: Option<ObjectId>,
    pub price: Option<f64>,
}

/// Equality filter over supplements; unset fields match anything.
#[derive(Debug, Clone, Default)]
pub struct SupplementFilter {
    pub name: Option<String>,
    pub brand_id: Option<ObjectId>,
}

impl SupplementFilter {
    pub fn by_name_and_brand(name: impl Into<String>, brand_id: ObjectId) -> Self {
        Self {
            name: Some(name.into()),
            brand_id: Some(brand_id),
        }
    }
}
