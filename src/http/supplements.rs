//! `/supplements` handlers.
use crate::http::error::{ApiError, ErrorBody};
use crate::http::{AppState, MessageBody};
use crate::model::{NewSupplement, Supplement, SupplementPatch};
use crate::store::ManagedCollection;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

#[utoipa::path(
    get,
    path = "/supplements",
    tag = "supplements",
    operation_id = "list_supplements",
    responses(
        (status = 200, description = "Every supplement, in insertion order", body = [Supplement]),
        (status = 500, description = "Store unavailable", body = ErrorBody)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Supplement>>, ApiError> {
    Ok(Json(state.supplements.list().await?))
}

#[utoipa::path(
    post,
    path = "/supplements",
    tag = "supplements",
    operation_id = "create_supplement",
    request_body = NewSupplement,
    responses(
        (status = 201, description = "Supplement created", body = Supplement),
        (status = 400, description = "Missing or malformed fields", body = ErrorBody),
        (status = 404, description = "Brand not found", body = ErrorBody),
        (status = 409, description = "Supplement already exists", body = ErrorBody)
    )
)]
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<NewSupplement>, JsonRejection>,
) -> Result<(StatusCode, Json<Supplement>), ApiError> {
    let Json(input) = body?;
    let supplement = state.supplements.create(input).await?;
    Ok((StatusCode::CREATED, Json(supplement)))
}

#[utoipa::path(
    put,
    path = "/supplements/{id}",
    tag = "supplements",
    operation_id = "update_supplement",
    params(("id" = String, Path, description = "Supplement identifier")),
    request_body = SupplementPatch,
    responses(
        (status = 200, description = "Updated supplement", body = Supplement),
        (status = 400, description = "Malformed body or brand_id", body = ErrorBody),
        (status = 404, description = "Supplement not found", body = ErrorBody)
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<SupplementPatch>, JsonRejection>,
) -> Result<Json<Supplement>, ApiError> {
    let Json(patch) = body?;
    Ok(Json(state.supplements.update(&id, patch).await?))
}

#[utoipa::path(
    delete,
    path = "/supplements/{id}",
    tag = "supplements",
    operation_id = "delete_supplement",
    params(("id" = String, Path, description = "Supplement identifier")),
    responses(
        (status = 200, description = "Supplement deleted", body = MessageBody),
        (status = 404, description = "Supplement not found", body = ErrorBody)
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageBody>, ApiError> {
    state.supplements.delete(&id).await?;
    Ok(Json(MessageBody::new("Supplement deleted")))
}
