//! Document trait implementation for the Supplement record type.

use super::SupplementError;
use crate::model::{
    parse_object_id, ObjectId, Supplement, SupplementCreate, SupplementFilter, SupplementUpdate,
};
use crate::store::Document;

impl Document for Supplement {
    type Id = ObjectId;
    type Create = SupplementCreate;
    type Update = SupplementUpdate;
    type Filter = SupplementFilter;
    type Error = SupplementError;

    fn from_create_params(id: ObjectId, params: SupplementCreate) -> Result<Self, Self::Error> {
        Ok(Self {
            id,
            name: params.name,
            description: params.description,
            brand_id: params.brand_id,
            price: params.price,
        })
    }

    fn id(&self) -> &ObjectId {
        &self.id
    }

    fn parse_id(raw: &str) -> Option<ObjectId> {
        parse_object_id(raw)
    }

    fn matches(&self, filter: &SupplementFilter) -> bool {
        filter.name.as_ref().is_none_or(|name| *name == self.name)
            && filter.brand_id.is_none_or(|brand_id| brand_id == self.brand_id)
    }

    fn on_update(&mut self, update: SupplementUpdate) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        // Brand existence is not re-checked here.
        if let Some(brand_id) = update.brand_id {
            self.brand_id = brand_id;
        }
        if let Some(price) = update.price {
            self.price = price;
        }
        Ok(())
    }
}
