pub mod info;
pub mod logging;
pub mod persons;

use axum::{
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use common::observability::encode_metrics;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::openapi::ApiDoc;
use crate::state::AppState;

async fn metrics() -> impl IntoResponse {
    encode_metrics()
}

async fn unknown_endpoint() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "unknown endpoint"})))
}

/// Build the application router.
///
/// `static_dir` is served for every path the API does not claim; without it
/// `/` answers with a small landing page and anything else is a JSON 404.
pub fn build_router(state: AppState, cors: CorsLayer, static_dir: Option<&str>) -> Router {
    let api = Router::new()
        .route("/api/persons", get(persons::list).post(persons::create))
        .route(
            "/api/persons/:id",
            get(persons::get).put(persons::update).delete(persons::delete),
        )
        .route("/info", get(info::info))
        .route("/health", get(info::health))
        .route("/metrics", get(metrics));

    let app = match static_dir {
        Some(dir) => {
            let index = format!("{}/index.html", dir.trim_end_matches('/'));
            api.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)))
        }
        None => api.route("/", get(info::landing)).fallback(unknown_endpoint),
    };

    app.merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(middleware::from_fn(logging::access_log))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::DEBUG))
                .on_response(DefaultOnResponse::new().level(Level::DEBUG).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
