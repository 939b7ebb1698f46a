use supplement_store::brand_actor::BrandError;
use supplement_store::error::ErrorKind;
use supplement_store::lifecycle::StoreSystem;
use supplement_store::model::{BrandUpdate, NewBrand, NewSupplement, ObjectId, SupplementPatch};
use supplement_store::store::ManagedCollection;
use supplement_store::supplement_actor::SupplementError;

fn brand(name: &str, country: &str) -> NewBrand {
    NewBrand {
        name: Some(name.to_string()),
        country: Some(country.to_string()),
    }
}

fn supplement(name: &str, brand_id: &str, price: f64) -> NewSupplement {
    NewSupplement {
        name: Some(name.to_string()),
        description: Some("x".to_string()),
        brand_id: Some(brand_id.to_string()),
        price: Some(price),
    }
}

/// Full end-to-end integration test with both real collections.
#[tokio::test]
async fn test_full_store_integration() {
    let system = StoreSystem::new(16);

    // Create a brand
    let brand_a = system
        .brand_manager
        .create(brand("Brand A", "Japan"))
        .await
        .expect("Failed to create brand");
    assert_eq!(brand_a.id.to_hex().len(), 24);
    assert_eq!(brand_a.name, "Brand A");
    assert_eq!(brand_a.country, "Japan");

    // Create a supplement for it
    let supplement_a = system
        .supplement_manager
        .create(supplement("SupplementA", &brand_a.id.to_hex(), 4.99))
        .await
        .expect("Failed to create supplement");
    assert_eq!(supplement_a.brand_id, brand_a.id);

    // Partial update keeps the other fields
    let renamed = system
        .brand_manager
        .update(
            &brand_a.id.to_hex(),
            BrandUpdate {
                name: Some("Brand Z".into()),
                ..Default::default()
            },
        )
        .await
        .expect("Failed to update brand");
    assert_eq!(renamed.name, "Brand Z");
    assert_eq!(renamed.country, "Japan");

    // Deleting the brand leaves its supplement behind
    system
        .brand_manager
        .delete(&brand_a.id.to_hex())
        .await
        .expect("Failed to delete brand");
    let remaining = system.supplement_manager.list().await.unwrap();
    assert_eq!(remaining, vec![supplement_a]);

    system.shutdown().await.expect("Shutdown failed");
}

#[tokio::test]
async fn test_brand_uniqueness_is_name_and_country() {
    let system = StoreSystem::new(16);

    system.brand_manager.create(brand("Acme", "Japan")).await.unwrap();
    let duplicate = system.brand_manager.create(brand("Acme", "Japan")).await;
    assert_eq!(duplicate, Err(BrandError::AlreadyExists));
    assert_eq!(duplicate.unwrap_err().kind(), ErrorKind::Conflict);

    system.brand_manager.create(brand("Acme", "Turkey")).await.unwrap();
    assert_eq!(system.brand_manager.list().await.unwrap().len(), 2);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_delete_twice_reports_not_found() {
    let system = StoreSystem::new(16);
    let created = system.brand_manager.create(brand("Acme", "Japan")).await.unwrap();
    let id = created.id.to_hex();

    system.brand_manager.delete(&id).await.unwrap();
    for _ in 0..2 {
        let again = system.brand_manager.delete(&id).await;
        assert_eq!(again.unwrap_err().to_string(), "Brand not found");
    }

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_supplement_brand_reference_checks() {
    let system = StoreSystem::new(16);

    let malformed = system
        .supplement_manager
        .create(supplement("SupplementA", "12345", 4.99))
        .await;
    assert_eq!(malformed, Err(SupplementError::InvalidBrandId));

    let unknown = system
        .supplement_manager
        .create(supplement("SupplementA", &ObjectId::new().to_hex(), 4.99))
        .await;
    assert_eq!(unknown, Err(SupplementError::BrandNotFound));
    assert_eq!(unknown.unwrap_err().kind(), ErrorKind::NotFound);

    let brand_a = system.brand_manager.create(brand("Brand A", "Japan")).await.unwrap();
    let brand_b = system.brand_manager.create(brand("Brand B", "Turkey")).await.unwrap();

    system
        .supplement_manager
        .create(supplement("SupplementA", &brand_a.id.to_hex(), 4.99))
        .await
        .unwrap();
    let duplicate = system
        .supplement_manager
        .create(supplement("SupplementA", &brand_a.id.to_hex(), 4.99))
        .await;
    assert_eq!(duplicate, Err(SupplementError::AlreadyExists));
    system
        .supplement_manager
        .create(supplement("SupplementA", &brand_b.id.to_hex(), 4.99))
        .await
        .unwrap();

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_supplement_update_merges_fields() {
    let system = StoreSystem::new(16);
    system.seed().await.unwrap();

    let seeded = system.supplement_manager.list().await.unwrap();
    let target = &seeded[0];

    let updated = system
        .supplement_manager
        .update(
            &target.id.to_hex(),
            SupplementPatch {
                price: Some(5.49),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.price, 5.49);
    assert_eq!(updated.name, target.name);
    assert_eq!(updated.description, target.description);
    assert_eq!(updated.brand_id, target.brand_id);

    // Empty patch leaves the record as it is
    let unchanged = system
        .supplement_manager
        .update(&target.id.to_hex(), SupplementPatch::default())
        .await
        .unwrap();
    assert_eq!(unchanged, updated);

    system.shutdown().await.unwrap();
}
