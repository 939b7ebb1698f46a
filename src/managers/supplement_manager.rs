//! # Supplement Manager
//!
//! Validates and persists supplements. Creating one requires its brand to exist, so the
//! manager holds a handle on the brand collection as well as its own.
use crate::managers::required;
use crate::model::{
    parse_object_id, Brand, NewSupplement, Supplement, SupplementCreate, SupplementFilter,
    SupplementPatch, SupplementUpdate,
};
use crate::store::{CollectionClient, FrameworkError, ManagedCollection};
use crate::supplement_actor::SupplementError;
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Manager for the supplement collection.
#[derive(Clone)]
pub struct SupplementManager {
    inner: CollectionClient<Supplement>,
    brands: CollectionClient<Brand>,
}

impl SupplementManager {
    pub fn new(inner: CollectionClient<Supplement>, brands: CollectionClient<Brand>) -> Self {
        Self { inner, brands }
    }

    /// Create a supplement.
    ///
    /// Checks run in this order, each one short-circuiting:
    /// 1. `name`, `description`, `brand_id` present and non-empty, `price` present
    ///    ([`SupplementError::MissingFields`])
    /// 2. `brand_id` decodes to an identifier ([`SupplementError::InvalidBrandId`])
    /// 3. the brand exists ([`SupplementError::BrandNotFound`])
    /// 4. no supplement with the same name for that brand ([`SupplementError::AlreadyExists`])
    ///
    /// Steps 3 and 4 are reads followed by a separate insert; concurrent creates can race.
    #[instrument(skip(self))]
    pub async fn create(&self, input: NewSupplement) -> Result<Supplement, SupplementError> {
        debug!("Validating request");
        let (Some(name), Some(description), Some(raw_brand_id), Some(price)) = (
            required(input.name),
            required(input.description),
            required(input.brand_id),
            input.price,
        ) else {
            warn!("Missing required fields");
            return Err(SupplementError::MissingFields);
        };

        let Some(brand_id) = parse_object_id(&raw_brand_id) else {
            warn!(%raw_brand_id, "Invalid brand_id format");
            return Err(SupplementError::InvalidBrandId);
        };

        if self.brands.get(brand_id).await?.is_none() {
            warn!(%brand_id, "Brand not found");
            return Err(SupplementError::BrandNotFound);
        }

        let existing = self
            .inner
            .find_one(SupplementFilter::by_name_and_brand(name.as_str(), brand_id))
            .await?;
        if existing.is_some() {
            warn!(%name, %brand_id, "Supplement already exists for this brand");
            return Err(SupplementError::AlreadyExists);
        }

        let id = self
            .inner
            .insert_one(SupplementCreate {
                name,
                description,
                brand_id,
                price,
            })
            .await?;
        info!(%id, %brand_id, "Supplement created");
        self.inner
            .get(id)
            .await?
            .ok_or_else(|| SupplementError::NotFound(id.to_hex()))
    }

    /// Merge `patch` into the supplement identified by `raw_id`.
    ///
    /// A supplied `brand_id` must decode, but the brand is not looked up. An unknown
    /// supplement is reported as not found even when the `brand_id` is malformed.
    #[instrument(skip(self))]
    pub async fn update(
        &self,
        raw_id: &str,
        patch: SupplementPatch,
    ) -> Result<Supplement, SupplementError> {
        debug!("Sending request");
        let id = parse_object_id(raw_id)
            .ok_or_else(|| SupplementError::NotFound(raw_id.to_string()))?;
        let brand_id = match patch.brand_id {
            None => None,
            Some(raw_brand_id) => match parse_object_id(&raw_brand_id) {
                Some(brand_id) => Some(brand_id),
                None => {
                    if self.inner.get(id).await?.is_none() {
                        return Err(SupplementError::NotFound(raw_id.to_string()));
                    }
                    warn!(%raw_brand_id, "Invalid brand_id format");
                    return Err(SupplementError::InvalidBrandId);
                }
            },
        };

        let update = SupplementUpdate {
            name: patch.name,
            description: patch.description,
            brand_id,
            price: patch.price,
        };
        Ok(self.inner.update_one(id, update).await?)
    }
}

#[async_trait]
impl ManagedCollection<Supplement> for SupplementManager {
    type Error = SupplementError;

    fn inner(&self) -> &CollectionClient<Supplement> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        SupplementError::from(e)
    }
}
