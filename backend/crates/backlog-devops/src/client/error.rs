use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur during calls to the remote platform
#[derive(Error, Debug)]
pub enum DevOpsError {
    /// The request never produced an HTTP response (DNS, connect, TLS, ...)
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The platform answered with a non-success status
    #[error("Remote error: {message} (status: {status}) {location}")]
    Remote {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    /// The platform answered 2xx with a body we could not decode
    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid URL {url}: {message} {location}")]
    InvalidUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid credential: {message} {location}")]
    InvalidCredential {
        message: String,
        location: ErrorLocation,
    },
}

impl DevOpsError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        DevOpsError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Convert JSON error with context
    #[track_caller]
    pub fn from_json(err: serde_json::Error) -> Self {
        DevOpsError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    /// Create a remote error carrying the upstream status and body
    #[track_caller]
    pub fn remote(status: u16, context: &str, body: &str) -> Self {
        DevOpsError::Remote {
            status,
            message: format!("{context}: {body}"),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for DevOpsError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        DevOpsError::from_reqwest(err)
    }
}

impl From<serde_json::Error> for DevOpsError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        DevOpsError::from_json(err)
    }
}

pub type Result<T> = std::result::Result<T, DevOpsError>;
