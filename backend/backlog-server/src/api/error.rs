//! REST API error types
//!
//! Every failure leaves the service as a JSON body with a machine-readable
//! code, a human-readable detail and, for validation failures, the field.

use backlog_core::CoreError;
use backlog_devops::DevOpsError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "VALIDATION_ERROR", "REMOTE_ERROR")
    pub code: String,
    /// Human-readable error message
    pub detail: String,
    /// Field name if this is a validation error for a specific field
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Caller input failed local checks (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// No usable organization or credential (400)
    #[error("Configuration error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    /// Remote platform failure; status mirrors the upstream status
    #[error("Remote error (status: {status}): {message} {location}")]
    Remote {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500)
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S, field: Option<&str>) -> Self {
        ApiError::Validation {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ApiError::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal<S: Into<String>>(message: S) -> Self {
        ApiError::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// HTTP status for this error
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::Config { .. } => StatusCode::BAD_REQUEST,
            ApiError::Remote { status, .. } => StatusCode::from_u16(*status)
                .ok()
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::BAD_GATEWAY),
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        log::error!("{}", self);

        let status = self.status();
        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                detail: message,
                field,
            },
            ApiError::Config { message, .. } => ApiErrorBody {
                code: "CONFIG_ERROR".into(),
                detail: message,
                field: None,
            },
            ApiError::Remote { message, .. } => ApiErrorBody {
                code: "REMOTE_ERROR".into(),
                detail: message,
                field: None,
            },
            ApiError::Internal { message, .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                detail: message,
                field: None,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Convert domain validation errors to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert remote client errors to API errors
impl From<DevOpsError> for ApiError {
    #[track_caller]
    fn from(e: DevOpsError) -> Self {
        match e {
            DevOpsError::Remote {
                status, message, ..
            } => ApiError::Remote {
                status,
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            DevOpsError::Http { message, .. } => ApiError::Remote {
                status: StatusCode::BAD_GATEWAY.as_u16(),
                message: format!("Failed to reach remote platform: {message}"),
                location: ErrorLocation::from(Location::caller()),
            },
            DevOpsError::InvalidCredential { message, .. } => ApiError::Config {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
            other @ (DevOpsError::Json { .. } | DevOpsError::InvalidUrl { .. }) => {
                // Don't expose payload or parser details to clients
                log::error!("Remote client error: {}", other);
                ApiError::internal("Internal server error")
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
