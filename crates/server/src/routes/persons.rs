use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    Json,
};
use service::directory::domain::{NumberInput, Person, PersonInput};

use crate::errors::ApiError;
use crate::state::AppState;

#[utoipa::path(get, path = "/api/persons", tag = "persons", responses((status = 200, description = "All entries", body = [crate::openapi::PersonDoc])))]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    Ok(Json(state.directory.list().await?))
}

#[utoipa::path(get, path = "/api/persons/{id}", tag = "persons", params(("id" = String, Path, description = "Entry id")), responses((status = 200, description = "Entry", body = crate::openapi::PersonDoc), (status = 404, description = "Person not found", body = crate::openapi::ErrorDoc)))]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Person>, ApiError> {
    Ok(Json(state.directory.get_by_id(&id).await?))
}

#[utoipa::path(post, path = "/api/persons", tag = "persons", request_body = crate::openapi::PersonInputDoc, responses((status = 200, description = "Created entry", body = crate::openapi::PersonDoc), (status = 400, description = "name or number missing / name must be unique", body = crate::openapi::ErrorDoc)))]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<PersonInput>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(state.directory.add(input).await?))
}

#[utoipa::path(put, path = "/api/persons/{id}", tag = "persons", params(("id" = String, Path, description = "Entry id")), request_body = crate::openapi::NumberInputDoc, responses((status = 200, description = "Updated entry", body = crate::openapi::PersonDoc), (status = 400, description = "number missing", body = crate::openapi::ErrorDoc), (status = 404, description = "Person not found", body = crate::openapi::ErrorDoc)))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<NumberInput>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let Json(input) = payload?;
    Ok(Json(state.directory.update_number(&id, input).await?))
}

#[utoipa::path(delete, path = "/api/persons/{id}", tag = "persons", params(("id" = String, Path, description = "Entry id")), responses((status = 204, description = "Deleted"), (status = 404, description = "Person not found", body = crate::openapi::ErrorDoc)))]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, ApiError> {
    state.directory.delete_by_id(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
