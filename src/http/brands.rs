//! `/brands` handlers.
use crate::http::error::{ApiError, ErrorBody};
use crate::http::{AppState, MessageBody};
use crate::model::{Brand, BrandUpdate, NewBrand};
use crate::store::ManagedCollection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/brands",
    tag = "brands",
    operation_id = "list_brands",
    responses(
        (status = 200, description = "Every brand, in insertion order", body = [Brand]),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Brand>>, ApiError> {
    Ok(Json(state.brands.list().await?))
}

#[utoipa::path(
    post,
    path = "/brands",
    tag = "brands",
    operation_id = "create_brand",
    request_body = NewBrand,
    responses(
        (status = 201, description = "Brand created", body = Brand),
        (status = 400, description = "Missing or malformed fields", body = ErrorBody),
        (status = 409, description = "Brand already exists", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewBrand>, JsonRejection>,
) -> Result<(StatusCode, Json<Brand>), ApiError> {
    let Json(input) = body?;
    let brand = state.brands.create(input).await?;
    Ok((StatusCode::CREATED, Json(brand)))
}

#[utoipa::path(
    put,
    path = "/brands/{id}",
    tag = "brands",
    operation_id = "update_brand",
    params(("id" = String, Path, description = "Brand identifier")),
    request_body = BrandUpdate,
    responses(
        (status = 200, description = "Updated brand", body = Brand),
        (status = 400, description = "Malformed body", body = ErrorBody),
        (status = 404, description = "Brand not found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<BrandUpdate>, JsonRejection>,
) -> Result<Json<Brand>, ApiError> {
    let Json(update) = body?;
    Ok(Json(state.brands.update(&id, update).await?))
}

#[utoipa::path(
    delete,
    path = "/brands/{id}",
    tag = "brands",
    operation_id = "delete_brand",
    params(("id" = String, Path, description = "Brand identifier")),
    responses(
        (status = 200, description = "Brand deleted", body = MessageBody),
        (status = 404, description = "Brand not found", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    state.brands.delete(&id).await?;
    Ok(Json(MessageBody::new("Brand deleted")))
}
