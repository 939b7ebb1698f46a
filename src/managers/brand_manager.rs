//! # Brand Manager
//!
//! Validates and persists brands. Brands depend on no other collection.
use crate::brand_actor::BrandError;
use crate::managers::required;
use crate::model::{parse_object_id, Brand, BrandCreate, BrandFilter, BrandUpdate, NewBrand};
use crate::store::{CollectionClient, FrameworkError, ManagedCollection};
use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

/// Manager for the brand collection.
#[derive(Clone)]
pub struct BrandManager {
    inner: CollectionClient<Brand>,
}

impl BrandManager {
    pub fn new(inner: CollectionClient<Brand>) -> Self {
        Self { inner }
    }

    /// Create a brand.
    ///
    /// Fails with [`BrandError::MissingFields`] when `name` or `country` is absent or empty,
    /// and with [`BrandError::AlreadyExists`] when a brand with the same name *and* country
    /// is stored. The duplicate check and the insert are two separate store requests.
    #[instrument(skip(self))]
    pub async fn create(&self, input: NewBrand) -> Result<Brand, BrandError> {
        debug!("Validating request");
        let (Some(name), Some(country)) = (required(input.name), required(input.country)) else {
            warn!("Missing name or country");
            return Err(BrandError::MissingFields);
        };

        let existing = self
            .inner
            .find_one(BrandFilter::by_name_and_country(name.as_str(), country.as_str()))
            .await?;
        if existing.is_some() {
            warn!(%name, %country, "Brand already exists");
            return Err(BrandError::AlreadyExists);
        }

        let id = self.inner.insert_one(BrandCreate { name, country }).await?;
        info!(%id, "Brand created");
        self.inner
            .get(id)
            .await?
            .ok_or_else(|| BrandError::NotFound(id.to_hex()))
    }

    /// Merge `update` into the brand identified by `raw_id`.
    ///
    /// The update is attempted directly; a missing brand, or an id that cannot be decoded,
    /// yields [`BrandError::NotFound`].
    #[instrument(skip(self))]
    pub async fn update(&self, raw_id: &str, update: BrandUpdate) -> Result<Brand, BrandError> {
        debug!("Sending request");
        let id = parse_object_id(raw_id).ok_or_else(|| BrandError::NotFound(raw_id.to_string()))?;
        Ok(self.inner.update_one(id, update).await?)
    }
}

#[async_trait]
impl ManagedCollection<Brand> for BrandManager {
    type Error = BrandError;

    fn inner(&self) -> &CollectionClient<Brand> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        BrandError::from(e)
    }
}
