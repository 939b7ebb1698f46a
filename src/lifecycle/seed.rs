//! Startup seeding.
//!
//! Each collection is seeded only when it is empty. Supplements reference their brand by
//! name in the seed and are resolved against whatever brands are stored at that point.
use crate::model::{Brand, BrandCreate, BrandFilter, Supplement, SupplementCreate};
use crate::store::{CollectionClient, FrameworkError};
use tracing::{debug, info, instrument, warn};

struct SeedSupplement {
    name: &'static str,
    description: &'static str,
    brand: &'static str,
    price: f64,
}

const SEED_BRANDS: &[(&str, &str)] = &[("Brand A", "Japan"), ("Brand B", "Turkey")];

const SEED_SUPPLEMENTS: &[SeedSupplement] = &[
    SeedSupplement {
        name: "SupplementA",
        description: "For Neurological functions",
        brand: "Brand A",
        price: 4.99,
    },
    SeedSupplement {
        name: "SupplementB",
        description: "Boosting muscle recovery",
        brand: "Brand B",
        price: 10.99,
    },
    SeedSupplement {
        name: "SupplementC",
        description: "Mental clarity",
        brand: "Brand B",
        price: 9.99,
    },
];

/// What a seeding run inserted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub brands_inserted: usize,
    pub supplements_inserted: usize,
    /// Seed supplements whose brand was not stored.
    pub supplements_skipped: usize,
}

/// Seeds empty collections. Running it again on a populated store inserts nothing.
#[instrument(skip_all)]
pub async fn initialize_database(
    brands: &CollectionClient<Brand>,
    supplements: &CollectionClient<Supplement>,
) -> Result<SeedReport, FrameworkError> {
    let mut report = SeedReport::default();

    if brands.count().await? == 0 {
        let seed = SEED_BRANDS
            .iter()
            .map(|(name, country)| BrandCreate {
                name: name.to_string(),
                country: country.to_string(),
            })
            .collect();
        report.brands_inserted = brands.insert_many(seed).await?.len();
        info!(count = report.brands_inserted, "Seeded brands");
    } else {
        debug!("Brands already present");
    }

    if supplements.count().await? == 0 {
        let mut seed = Vec::with_capacity(SEED_SUPPLEMENTS.len());
        for item in SEED_SUPPLEMENTS {
            match brands.find_one(BrandFilter::by_name(item.brand)).await? {
                Some(brand) => seed.push(SupplementCreate {
                    name: item.name.to_string(),
                    description: item.description.to_string(),
                    brand_id: brand.id,
                    price: item.price,
                }),
                None => {
                    warn!(
                        supplement = item.name,
                        brand = item.brand,
                        "Seed brand missing, skipped"
                    );
                    report.supplements_skipped += 1;
                }
            }
        }
        if !seed.is_empty() {
            report.supplements_inserted = supplements.insert_many(seed).await?.len();
        }
        info!(count = report.supplements_inserted, "Seeded supplements");
    } else {
        debug!("Supplements already present");
    }

    Ok(report)
}
