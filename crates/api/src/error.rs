use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use wayfarer_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`sqlx::Error`] for store
/// errors. Implements [`IntoResponse`] to produce consistent
/// `{"message": ...}` JSON error bodies.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `wayfarer_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl AppError {
    /// Shorthand for a 400 validation failure.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::Core(CoreError::Validation(message.into()))
    }

    /// Shorthand for a 404 with entity context.
    pub fn not_found(entity: &'static str, id: impl std::fmt::Display) -> Self {
        AppError::Core(CoreError::not_found(entity, id))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::Core(core) => match core {
                CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, core.to_string()),
                CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
                CoreError::Internal(msg) => {
                    tracing::error!(error = %msg, "internal core error");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "internal server error".to_string(),
                    )
                }
            },
            AppError::Database(err) => classify_sqlx_error(err),
        };

        (status, axum::Json(json!({ "message": message }))).into_response()
    }
}

/// Classify a sqlx error into an HTTP status and message.
///
/// `RowNotFound` maps to 404; everything else is logged and surfaced
/// as a sanitized 500 that leaks no internal detail.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, String) {
    match err {
        sqlx::Error::RowNotFound => (StatusCode::NOT_FOUND, "resource not found".to_string()),
        other => {
            tracing::error!(error = %other, "database error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal server error".to_string(),
            )
        }
    }
}
