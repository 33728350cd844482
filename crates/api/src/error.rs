use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use fitclass_core::error::CoreError;
use serde_json::json;

/// Message returned for every rejected authentication attempt.
pub const UNAUTHORIZED_MESSAGE: &str = "Unauthorized";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent `{ "message", "code" }`
/// JSON error bodies. Internal details are logged, never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `fitclass_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// An internal error with a human-readable message.
    #[error("Internal error: {0}")]
    InternalError(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::NotFound { entity, id } => (
                    StatusCode::NOT_FOUND,
                    "NOT_FOUND",
                    format!("{entity} with id {id} not found"),
                ),
                CoreError::Validation(msg) => {
                    (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
                }
                CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
                CoreError::Unauthorized(reason) => {
                    tracing::debug!(reason = %reason, "Rejected unauthenticated request");
                    (
                        StatusCode::UNAUTHORIZED,
                        "UNAUTHORIZED",
                        UNAUTHORIZED_MESSAGE.to_string(),
                    )
                }
            },

            // --- Database errors ---
            AppError::Database(err) => classify_sqlx_error(err),

            // --- HTTP-specific errors ---
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        };

        let body = json!({
            "message": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}

fn internal() -> (StatusCode, &'static str, String) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Client-facing message for a unique constraint. Constraint names stay in the log.
fn conflict_message(constraint: &str) -> &'static str {
    match constraint {
        "uq_users_username" => "username is already taken",
        _ => "A record with this value already exists",
    }
}

/// Classify a sqlx error into an HTTP status, error code, and message.
///
/// - `RowNotFound` maps to 404.
/// - Unique constraint violations (constraint name starting with `uq_`) map to 409.
/// - Foreign key violations map to 404: the referenced row does not exist.
/// - Everything else maps to 500 with a sanitized message.
fn classify_sqlx_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    match err {
        sqlx::Error::RowNotFound => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        ),
        sqlx::Error::Database(db_err) => {
            match db_err.code().as_deref() {
                // PostgreSQL unique_violation
                Some("23505") => {
                    let constraint = db_err.constraint().unwrap_or("unknown");
                    if constraint.starts_with("uq_") {
                        tracing::debug!(constraint, "Unique constraint violation");
                        return (
                            StatusCode::CONFLICT,
                            "CONFLICT",
                            conflict_message(constraint).to_string(),
                        );
                    }
                }
                // PostgreSQL foreign_key_violation
                Some("23503") => {
                    tracing::debug!(error = %db_err, "Foreign key violation");
                    return (
                        StatusCode::NOT_FOUND,
                        "NOT_FOUND",
                        "Referenced resource not found".to_string(),
                    );
                }
                _ => {}
            }
            tracing::error!(error = %db_err, "Database error");
            internal()
        }
        other => {
            tracing::error!(error = %other, "Database error");
            internal()
        }
    }
}
