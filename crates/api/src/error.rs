//! HTTP error type shared by every handler.
//!
//! Each failure renders as `{"error": <message>, "code": <CODE>}`. Internal
//! details are logged and replaced by a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use carcatalog_core::error::CoreError;
use serde_json::json;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Writing an uploaded image to disk failed.
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// Malformed request that never reached domain validation, e.g. a broken
    /// multipart stream.
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

/// Status, machine-readable code and client-facing message.
type ErrorParts = (StatusCode, &'static str, String);

impl AppError {
    fn parts(&self) -> ErrorParts {
        match self {
            AppError::Core(core) => core_parts(core),
            AppError::Database(err) => database_parts(err),
            AppError::Storage(err) => {
                tracing::error!(error = %err, "Image storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "STORAGE_ERROR",
                    "Failed to store uploaded image".to_string(),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => {
                tracing::error!(error = %msg, "Internal error");
                internal()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        (status, axum::Json(json!({ "error": message, "code": code }))).into_response()
    }
}

fn core_parts(err: &CoreError) -> ErrorParts {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Internal(msg) => {
            tracing::error!(error = %msg, "Data integrity fault");
            internal()
        }
    }
}

/// `RowNotFound` is a 404 and a unique violation on a `uq_*` constraint is a
/// 409. Anything else is logged and hidden behind a 500.
fn database_parts(err: &sqlx::Error) -> ErrorParts {
    if let sqlx::Error::RowNotFound = err {
        return (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            "Resource not found".to_string(),
        );
    }

    if let Some(constraint) = violated_unique_constraint(err) {
        return (StatusCode::CONFLICT, "CONFLICT", conflict_message(constraint));
    }

    tracing::error!(error = %err, "Database error");
    internal()
}

fn violated_unique_constraint(err: &sqlx::Error) -> Option<&str> {
    let db_err = err.as_database_error()?;
    if db_err.code().as_deref() != Some(UNIQUE_VIOLATION) {
        return None;
    }
    db_err.constraint().filter(|c| c.starts_with("uq_"))
}

fn internal() -> ErrorParts {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

/// Client-facing message for a known unique constraint.
fn conflict_message(constraint: &str) -> String {
    let message = match constraint {
        "uq_cars_configuration" => "Car already exists",
        "uq_suppliers_email" => "Supplier email already exists",
        "uq_suppliers_address" => "Supplier address already exists",
        "uq_suppliers_website" => "Supplier website already exists",
        "uq_suppliers_phone" => "Supplier phone already exists",
        "uq_admins_username" => "Username already exists",
        "uq_admins_email" => "Email already exists",
        other => return format!("Duplicate value violates unique constraint: {other}"),
    };
    message.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_constraints_get_friendly_messages() {
        assert_eq!(conflict_message("uq_cars_configuration"), "Car already exists");
        assert_eq!(conflict_message("uq_admins_email"), "Email already exists");
        assert_eq!(
            conflict_message("uq_other"),
            "Duplicate value violates unique constraint: uq_other"
        );
    }

    #[test]
    fn pool_timeouts_are_internal() {
        let (status, code, _) = AppError::Database(sqlx::Error::PoolTimedOut).parts();
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, "INTERNAL_ERROR");
    }
}
