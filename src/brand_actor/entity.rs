//! Document trait implementation for the Brand record type.
//!
//! Enables [`Brand`] to be kept in the generic [`CollectionActor`](crate::store::CollectionActor).

use super::BrandError;
use crate::model::{parse_object_id, Brand, BrandCreate, BrandFilter, BrandUpdate, ObjectId};
use crate::store::Document;

impl Document for Brand {
    type Id = ObjectId;
    type Create = BrandCreate;
    type Update = BrandUpdate;
    type Filter = BrandFilter;
    type Error = BrandError;

    fn from_create_params(id: ObjectId, params: BrandCreate) -> Result<Self, Self::Error> {
        Ok(Self::new(id, params.name, params.country))
    }

    fn id(&self) -> &ObjectId {
        &self.id
    }

    fn parse_id(raw: &str) -> Option<ObjectId> {
        parse_object_id(raw)
    }

    fn matches(&self, filter: &BrandFilter) -> bool {
        filter.name.as_ref().is_none_or(|name| *name == self.name)
            && filter.country.as_ref().is_none_or(|country| *country == self.country)
    }

    /// Merges the supplied fields:
    /// - `name`: Brand name
    /// - `country`: Country of origin
    fn on_update(&mut self, update: BrandUpdate) -> Result<(), Self::Error> {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(country) = update.country {
            self.country = country;
        }
        Ok(())
    }
}
