//! Error types for Hardware Hub server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {message}")]
    Validation {
        message: String,
        /// Wire names of the offending fields
        fields: Vec<String>,
    },

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Business rule violation: {0}")]
    BusinessRule(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    /// Offending fields for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<String>>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error, message, fields) = match &self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NotFound", msg.clone(), None),
            AppError::Validation { message, fields } => (
                StatusCode::BAD_REQUEST,
                "Validation",
                message.clone(),
                Some(fields.clone()),
            ),
            AppError::Database(e) => {
                let (status, error, message) = classify_database_error(e);
                (status, error, message, None)
            }
            AppError::Conflict(msg) => (StatusCode::CONFLICT, "Conflict", msg.clone(), None),
            AppError::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, "BadRequest", msg.clone(), None)
            }
            AppError::BusinessRule(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "BusinessRule",
                msg.clone(),
                None,
            ),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal",
                    "Internal server error".to_string(),
                    None,
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
            fields,
        });

        (status, body).into_response()
    }
}

/// Map a sqlx error onto the HTTP surface. Unique-constraint violations
/// (PostgreSQL error code 23505) become a 409 so an enforced serial-number
/// constraint surfaces cleanly; everything else is a retryable 500.
fn classify_database_error(err: &sqlx::Error) -> (StatusCode, &'static str, String) {
    if let sqlx::Error::Database(db_err) = err {
        if db_err.code().as_deref() == Some("23505") {
            let constraint = db_err.constraint().unwrap_or("unknown");
            return (
                StatusCode::CONFLICT,
                "Conflict",
                format!("Duplicate value violates unique constraint {}", constraint),
            );
        }
    }
    tracing::error!("Database error: {:?}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Database",
        "Database error, please try again".to_string(),
    )
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
