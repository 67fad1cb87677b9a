use axum::{extract::State, response::Html, Json};
use common::types::Health;

use crate::errors::ApiError;
use crate::state::AppState;

#[utoipa::path(get, path = "/info", tag = "info", responses((status = 200, description = "Entry count and server time", body = String, content_type = "text/html")))]
pub async fn info(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let info = state.directory.info().await?;
    Ok(Html(info.render_html()))
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

/// Landing page when no static frontend is deployed.
pub async fn landing() -> Html<&'static str> {
    Html("<h1>Phonebook</h1>")
}
