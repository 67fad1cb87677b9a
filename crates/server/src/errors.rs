use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use service::errors::ServiceError;
use thiserror::Error;
use tracing::error;

/// Error returned by handlers; always rendered as `{"error": "..."}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Service(#[from] ServiceError),
    #[error(transparent)]
    Body(#[from] JsonRejection),
}

impl ApiError {
    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            ApiError::Service(ServiceError::Validation(reason)) => (StatusCode::BAD_REQUEST, reason.to_string()),
            ApiError::Service(e @ ServiceError::NotFound(_)) => (StatusCode::NOT_FOUND, e.to_string()),
            ApiError::Service(ServiceError::Store(cause)) => {
                error!(error = %cause, "store operation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal server error".into())
            }
            ApiError::Body(rejection) => (rejection.status(), rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = self.status_and_message();
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("store unavailable: {0}")]
    Store(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::errors::ValidationError;

    #[test]
    fn maps_service_errors_to_statuses() {
        let cases = [
            (ServiceError::from(ValidationError::MissingField), StatusCode::BAD_REQUEST, "name or number missing"),
            (ServiceError::from(ValidationError::DuplicateName), StatusCode::BAD_REQUEST, "name must be unique"),
            (ServiceError::not_found("Person"), StatusCode::NOT_FOUND, "Person not found"),
            (ServiceError::Store("connection refused".into()), StatusCode::INTERNAL_SERVER_ERROR, "internal server error"),
        ];
        for (err, status, msg) in cases {
            let (s, m) = ApiError::from(err).status_and_message();
            assert_eq!(s, status);
            assert_eq!(m, msg);
        }
    }
}
