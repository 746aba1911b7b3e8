//! Application error type and its HTTP mapping.
//!
//! Every service and repository returns [`AppError`]. Handlers propagate it with `?`
//! and axum turns it into a JSON body of the form:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "URL not found", "details": { "id": 7 } } }
//! ```

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Machine-readable error code plus human-readable message.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed or empty input. 400.
    #[error("{message}")]
    Validation { message: String, details: Value },
    /// Unknown id or short code. 404.
    #[error("{message}")]
    NotFound { message: String, details: Value },
    /// Custom alias already taken. 409.
    #[error("{message}")]
    Conflict { message: String, details: Value },
    /// Link is past its expiry. 400.
    #[error("{message}")]
    Expired { message: String, details: Value },
    /// Link was deactivated. 400.
    #[error("{message}")]
    Inactive { message: String, details: Value },
    #[error("{message}")]
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            message: message.into(),
            details,
        }
    }
    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            message: message.into(),
            details,
        }
    }
    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            message: message.into(),
            details,
        }
    }
    pub fn expired(message: impl Into<String>, details: Value) -> Self {
        Self::Expired {
            message: message.into(),
            details,
        }
    }
    pub fn inactive(message: impl Into<String>, details: Value) -> Self {
        Self::Inactive {
            message: message.into(),
            details,
        }
    }
    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            message: message.into(),
            details,
        }
    }

    /// Status code this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Expired { .. } | AppError::Inactive { .. } => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Conflict { .. } => StatusCode::CONFLICT,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Converts the error into its serializable payload.
    pub fn to_error_info(&self) -> ErrorInfo {
        let (code, message, details) = match self {
            AppError::Validation { message, details } => ("validation_error", message, details),
            AppError::NotFound { message, details } => ("not_found", message, details),
            AppError::Conflict { message, details } => ("conflict", message, details),
            AppError::Expired { message, details } => ("link_expired", message, details),
            AppError::Inactive { message, details } => ("link_inactive", message, details),
            AppError::Internal { message, details } => ("internal_error", message, details),
        };

        ErrorInfo {
            code,
            message: message.clone(),
            details: details.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict(
                "Unique constraint violation",
                json!({ "constraint": db.constraint() }),
            );
        }

        tracing::error!(error = ?e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let fields: Vec<String> = errors
            .field_errors()
            .keys()
            .map(|field| field.to_string())
            .collect();

        AppError::bad_request(
            "Request validation failed",
            json!({ "fields": fields, "reason": errors.to_string() }),
        )
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "Invalid JSON body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError::bad_request(
            "Invalid query parameters",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::bad_request(
            "Invalid path parameters",
            json!({ "reason": rejection.body_text() }),
        )
    }
}
