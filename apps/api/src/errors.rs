use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::outcome::FatalKind;
use crate::store::StoreError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Degradable provider failures (rate limits, transient 5xx, unusable
/// output) never become an `AppError`: the pipeline absorbs them via
/// fallback content. Only fatal conditions cross this boundary.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Content blocked: {0}")]
    ContentBlocked(String),

    #[error("Provider credential error: {0}")]
    Credential(String),

    #[error("Database operation timed out")]
    StorageTimeout,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Unauthorized => (
                StatusCode::UNAUTHORIZED,
                "UNAUTHORIZED",
                "Authentication required".to_string(),
            ),
            AppError::ContentBlocked(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "CONTENT_BLOCKED",
                format!("Content blocked by safety filters: {reason}. Please rephrase and try again."),
            ),
            AppError::Credential(msg) => {
                tracing::error!("Provider credential error: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "PROVIDER_CREDENTIAL",
                    "The AI provider rejected our credentials".to_string(),
                )
            }
            AppError::StorageTimeout => (
                StatusCode::SERVICE_UNAVAILABLE,
                "STORAGE_TIMEOUT",
                "Database operation timed out. Please try again.".to_string(),
            ),
            AppError::Database(e) => {
                tracing::error!("Database error: {e}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "A database error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(what) => AppError::NotFound(format!("{what} not found")),
            StoreError::Timeout => AppError::StorageTimeout,
            StoreError::Database(e) => AppError::Database(e),
        }
    }
}

impl From<FatalKind> for AppError {
    fn from(kind: FatalKind) -> Self {
        match kind {
            FatalKind::Blocked { reason } => AppError::ContentBlocked(reason),
            FatalKind::Credential { message } => AppError::Credential(message),
        }
    }
}
