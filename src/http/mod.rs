//! HTTP transport: maps the eight resource routes onto the managers.
//!
//! ## Routes
//!
//! - `GET /brands`, `POST /brands`
//! - `PUT /brands/:id`, `DELETE /brands/:id`
//! - `GET /supplements`, `POST /supplements`
//! - `PUT /supplements/:id`, `DELETE /supplements/:id`
//! - `GET /apispec_1.json` (OpenAPI document), `GET /swagger/` (Swagger UI)
//!
//! Errors are returned as `{"error": <message>}` with the status of the error's kind.
//!
//! ## Example
//!
//! ```ignore
//! let system = StoreSystem::new(32);
//! let state = AppState::new(&system);
//!
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! http::serve(state, listener, async {
//!     let _ = tokio::signal::ctrl_c().await;
//! })
//! .await?;
//! ```

pub mod brands;
pub mod docs;
pub mod error;
pub mod supplements;

use crate::lifecycle::StoreSystem;
use crate::managers::{BrandManager, SupplementManager};
use axum::body::Body;
use axum::http::Request;
use axum::middleware::{from_fn, Next};
use axum::response::Response;
use axum::routing::{get, put};
use axum::Router;
use serde::Serialize;
use std::future::Future;
use tokio::net::TcpListener;
use tracing::info;
use utoipa::ToSchema;

pub use error::ApiError;

/// Shared handler state: one manager per resource.
#[derive(Clone)]
pub struct AppState {
    pub brands: BrandManager,
    pub supplements: SupplementManager,
}

impl AppState {
    pub fn new(system: &StoreSystem) -> Self {
        Self {
            brands: system.brand_manager.clone(),
            supplements: system.supplement_manager.clone(),
        }
    }
}

/// Body of a successful delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageBody {
    pub message: String,
}

impl MessageBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/brands", get(brands::list).post(brands::create))
        .route("/brands/:id", put(brands::update).delete(brands::delete))
        .route("/supplements", get(supplements::list).post(supplements::create))
        .route(
            "/supplements/:id",
            put(supplements::update).delete(supplements::delete),
        )
        .route(docs::SPEC_ROUTE, get(docs::openapi_spec))
        .route("/swagger", get(docs::swagger_ui))
        .route("/swagger/", get(docs::swagger_ui))
        .layer(from_fn(log_request))
        .with_state(state)
}

/// Serve until `shutdown` resolves, then finish in-flight requests.
///
/// The router (and with it every manager clone in `state`) is dropped when this returns.
pub async fn serve(
    state: AppState,
    listener: TcpListener,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "Listening");
    }
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown)
        .await
}

async fn log_request(req: Request<Body>, next: Next) -> Response {
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let response = next.run(req).await;
    info!(%method, %path, status = response.status().as_u16(), "Request");
    response
}
