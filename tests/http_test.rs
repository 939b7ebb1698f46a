//! HTTP integration tests.
//!
//! Starts the router on an ephemeral port and exercises it with reqwest.

use reqwest::StatusCode;
use serde_json::{json, Value};
use supplement_store::http::{self, AppState};
use supplement_store::lifecycle::StoreSystem;

/// Bind to port 0 and return the base URL. The system stays alive for the test's duration.
async fn start_server(system: &StoreSystem) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let state = AppState::new(system);
    tokio::spawn(async move {
        http::serve(state, listener, std::future::pending::<()>()).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_brand_then_supplement_end_to_end() {
    let system = StoreSystem::new(16);
    let base = start_server(&system).await;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{base}/brands"))
        .json(&json!({ "name": "Brand A", "country": "Japan" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let brand: Value = resp.json().await.unwrap();
    let brand_id = brand["id"].as_str().unwrap().to_string();
    assert!(!brand_id.is_empty());
    assert_eq!(brand["name"], "Brand A");
    assert_eq!(brand["country"], "Japan");

    let resp = client
        .post(format!("{base}/supplements"))
        .json(&json!({
            "name": "SupplementA",
            "description": "x",
            "brand_id": brand_id,
            "price": 4.99
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::CREATED);
    let created: Value = resp.json().await.unwrap();

    let resp = client.get(format!("{base}/supplements")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let listed: Vec<Value> = resp.json().await.unwrap();
    assert_eq!(listed, vec![created.clone()]);
    assert_eq!(listed[0]["brand_id"], Value::String(brand_id));
    assert_eq!(listed[0]["price"], 4.99);
}

#[tokio::test]
async fn test_error_statuses_and_bodies() {
    let system = StoreSystem::new(16);
    let base = start_server(&system).await;
    let client = reqwest::Client::new();

    // 400: missing field
    let resp = client
        .post(format!("{base}/brands"))
        .json(&json!({ "name": "Brand A" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Missing name or country" }));

    // 409: duplicate
    for expected in [StatusCode::CREATED, StatusCode::CONFLICT] {
        let resp = client
            .post(format!("{base}/brands"))
            .json(&json!({ "name": "Brand A", "country": "Japan" }))
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status(), expected);
    }

    // 400: malformed brand_id
    let resp = client
        .post(format!("{base}/supplements"))
        .json(&json!({ "name": "S", "description": "d", "brand_id": "nope", "price": 1.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Invalid brand_id format");

    // 404: well-formed but unknown brand
    let resp = client
        .post(format!("{base}/supplements"))
        .json(&json!({
            "name": "S",
            "description": "d",
            "brand_id": "507f1f77bcf86cd799439011",
            "price": 1.0
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Brand not found");

    // 404: update on an unassigned id
    let resp = client
        .put(format!("{base}/supplements/507f1f77bcf86cd799439011"))
        .json(&json!({ "price": 2.0 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Supplement not found");

    // 404: unassigned id still wins over a malformed brand_id
    let resp = client
        .put(format!("{base}/supplements/507f1f77bcf86cd799439011"))
        .json(&json!({ "brand_id": "xyz" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Supplement not found");

    // 400: unknown field in the body
    let resp = client
        .post(format!("{base}/brands"))
        .json(&json!({ "name": "Brand B", "country": "Turkey", "founded": 1999 }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.unwrap();
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_update_and_delete_routes() {
    let system = StoreSystem::new(16);
    system.seed().await.unwrap();
    let base = start_server(&system).await;
    let client = reqwest::Client::new();

    let brands: Vec<Value> = client
        .get(format!("{base}/brands"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(brands.len(), 2);
    let id = brands[1]["id"].as_str().unwrap().to_string();

    let resp = client
        .put(format!("{base}/brands/{id}"))
        .json(&json!({ "country": "Greece" }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let updated: Value = resp.json().await.unwrap();
    assert_eq!(updated["name"], "Brand B");
    assert_eq!(updated["country"], "Greece");

    let resp = client.delete(format!("{base}/brands/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Brand deleted" }));

    let resp = client.delete(format!("{base}/brands/{id}")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "error": "Brand not found" }));

    // Supplements of a deleted brand stay listed
    let supplements: Vec<Value> = client
        .get(format!("{base}/supplements"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(supplements.len(), 3);
    assert_eq!(
        supplements.iter().filter(|s| s["brand_id"] == Value::String(id.clone())).count(),
        2
    );

    let supplement_id = supplements[0]["id"].as_str().unwrap().to_string();
    let resp = client
        .delete(format!("{base}/supplements/{supplement_id}"))
        .send()
        .await
        .unwrap();
    let body: Value = resp.json().await.unwrap();
    assert_eq!(body, json!({ "message": "Supplement deleted" }));

    let resp = client
        .delete(format!("{base}/supplements/not-an-id"))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_api_documentation_is_served() {
    let system = StoreSystem::new(16);
    let base = start_server(&system).await;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{base}/apispec_1.json")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let doc: Value = resp.json().await.unwrap();
    assert_eq!(doc["info"]["title"], "Supplement Store API");

    let paths = doc["paths"].as_object().unwrap();
    for (path, methods) in [
        ("/brands", &["get", "post"]),
        ("/brands/{id}", &["put", "delete"]),
        ("/supplements", &["get", "post"]),
        ("/supplements/{id}", &["put", "delete"]),
    ] {
        for method in methods {
            assert!(paths[path].get(*method).is_some(), "{method} {path} not documented");
        }
    }
    assert!(doc["components"]["schemas"]["Supplement"].is_object());

    let resp = client.get(format!("{base}/swagger/")).send().await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let page = resp.text().await.unwrap();
    assert!(page.contains("swagger-ui"));
    assert!(page.contains("/apispec_1.json"));
}
