//! Application error type and its HTTP mapping.
//!
//! Every failure in the service layer is an [`AppError`]. The HTTP layer is the
//! only place that turns it into a status code and a `{"error": "..."}` body.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::utils::url_validator::UrlValidationError;

/// Message returned when a request body has no usable `url` field.
pub const URL_REQUIRED: &str = "URL is required";

/// Message returned when a short code does not resolve to a link.
pub const URL_NOT_FOUND: &str = "URL not found";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Client input was rejected (400).
    #[error("{message}")]
    Validation { message: String },
    /// The short code is unknown (404).
    #[error("{message}")]
    NotFound { message: String },
    /// Persistence or other server-side failure (500).
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    pub fn url_required() -> Self {
        Self::bad_request(URL_REQUIRED)
    }

    pub fn url_not_found() -> Self {
        Self::not_found(URL_NOT_FOUND)
    }

    /// Replaces the message of an [`AppError::Internal`] with a fixed user-facing one.
    ///
    /// The original cause is logged before it is dropped. Other variants pass
    /// through untouched.
    pub fn mask_internal(self, message: &str) -> Self {
        match self {
            AppError::Internal { message: cause } => {
                tracing::error!(%cause, "{message}");
                AppError::internal(message)
            }
            other => other,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let sqlx::Error::RowNotFound = e {
            return AppError::url_not_found();
        }

        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::internal("Short code already exists");
        }

        AppError::internal(format!("Database error: {e}"))
    }
}

impl From<UrlValidationError> for AppError {
    fn from(e: UrlValidationError) -> Self {
        AppError::bad_request(e.to_string())
    }
}
