use crate::lifecycle::seed::{initialize_database, SeedReport};
use crate::managers::{BrandManager, SupplementManager};
use crate::model::{Brand, Supplement};
use crate::store::{CollectionClient, FrameworkError};
use crate::{brand_actor, supplement_actor};
use tracing::{error, info};

/// The runtime orchestrator for the document store.
///
/// `StoreSystem` is responsible for:
/// - **Lifecycle Management**: starting and stopping both collection actors
/// - **Dependency Wiring**: the supplement manager gets a handle on the brand collection
/// - **Seeding**: filling empty collections at startup
///
/// # Example
///
/// ```ignore
/// let system = StoreSystem::new(32);
/// system.seed().await?;
///
/// let brand = system.brand_manager.create(new_brand).await?;
///
/// // Every manager clone handed out must be dropped before this returns.
/// system.shutdown().await?;
/// ```
pub struct StoreSystem {
    pub brand_manager: BrandManager,
    pub supplement_manager: SupplementManager,

    brands: CollectionClient<Brand>,
    supplements: CollectionClient<Supplement>,

    /// Task handles for both collection actors (used for graceful shutdown)
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl StoreSystem {
    /// Spawns both collections with the given channel capacity and wires the managers.
    /// Must be called inside a Tokio runtime.
    pub fn new(channel_capacity: usize) -> Self {
        let (brand_actor, brands) = brand_actor::new(channel_capacity);
        let (supplement_actor, supplements) = supplement_actor::new(channel_capacity);

        let brand_handle = tokio::spawn(brand_actor.run());
        let supplement_handle = tokio::spawn(supplement_actor.run());

        Self {
            brand_manager: BrandManager::new(brands.clone()),
            supplement_manager: SupplementManager::new(supplements.clone(), brands.clone()),
            brands,
            supplements,
            handles: vec![brand_handle, supplement_handle],
        }
    }

    /// Seeds whichever collections are empty.
    pub async fn seed(&self) -> Result<SeedReport, FrameworkError> {
        initialize_database(&self.brands, &self.supplements).await
    }

    /// Gracefully shuts down the store.
    ///
    /// Drops every client the system holds, then waits for both actors to drain their
    /// channels and exit. Clones of the managers held elsewhere keep their collection
    /// alive, so drop those first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down store...");

        drop(self.brand_manager);
        drop(self.supplement_manager);
        drop(self.brands);
        drop(self.supplements);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Collection task failed: {:?}", e);
                return Err(format!("Collection task failed: {:?}", e));
            }
        }

        info!("Store shutdown complete.");
        Ok(())
    }
}
