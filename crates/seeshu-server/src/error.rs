use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Unified API error type for all route handlers.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Unauthorized(String),
    Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, msg),
            ApiError::Internal(msg) => {
                tracing::error!("internal error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

impl From<seeshu_core::error::CoreError> for ApiError {
    fn from(e: seeshu_core::error::CoreError) -> Self {
        match e {
            seeshu_core::error::CoreError::InvalidObservation(msg) => {
                ApiError::BadRequest(format!("invalid observation: {msg}"))
            }
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<seeshu_registry::error::RegistryError> for ApiError {
    fn from(e: seeshu_registry::error::RegistryError) -> Self {
        match e {
            seeshu_registry::error::RegistryError::NotFound { id } => {
                ApiError::NotFound(format!("record not found: {id}"))
            }
        }
    }
}

impl From<seeshu_auth::error::AuthError> for ApiError {
    fn from(e: seeshu_auth::error::AuthError) -> Self {
        match e {
            seeshu_auth::error::AuthError::MissingCredentials(field) => {
                ApiError::BadRequest(format!("missing credential: {field}"))
            }
            other => ApiError::Unauthorized(other.to_string()),
        }
    }
}

impl From<seeshu_triage::error::CoughAnalysisError> for ApiError {
    fn from(e: seeshu_triage::error::CoughAnalysisError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<seeshu_relay::error::RelayError> for ApiError {
    fn from(e: seeshu_relay::error::RelayError) -> Self {
        ApiError::Internal(e.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}
