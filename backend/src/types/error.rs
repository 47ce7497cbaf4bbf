//! Universal error handling for the API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::media_storage::BucketError;

use super::{ConfigError, ImageContentType};

/// Error envelope returned for every non-2xx response
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    /// Human-readable error message
    pub error: String,
    /// Underlying failure description, only set for internal errors
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

/// Application error taxonomy; every variant is terminal for the request
#[derive(Error, Debug)]
pub enum AppError {
    /// Request used a method other than POST
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// `Authorization` header absent or empty
    #[error("Missing authorization header")]
    Unauthenticated,

    /// Body is not valid JSON, lacks a required field, or names an unsafe path
    #[error("{0}")]
    InvalidRequest(&'static str),

    /// Declared content type is outside the allow-list
    #[error("Invalid content type. Allowed: {}", ImageContentType::allowed_list())]
    UnsupportedMediaType,

    /// Storage configuration is incomplete
    #[error("Server configuration error")]
    ServerMisconfiguration,

    /// Signing or another unexpected step failed
    #[error("Failed to generate upload URL")]
    Internal {
        /// Description of the caught error, echoed to the caller
        details: String,
    },
}

impl AppError {
    /// Message used when one of the body fields is missing or empty
    pub const MISSING_FIELDS: &'static str = "Missing required fields: bucket, path, contentType";
    /// Message used when the body cannot be parsed as JSON
    pub const INVALID_JSON: &'static str = "Invalid JSON payload";
    /// Message used when the object key fails sanitisation
    pub const INVALID_PATH: &'static str = "Invalid object path";

    /// HTTP status the error maps to
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Unauthenticated => StatusCode::UNAUTHORIZED,
            Self::InvalidRequest(_) | Self::UnsupportedMediaType => StatusCode::BAD_REQUEST,
            Self::ServerMisconfiguration | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            Self::Internal { details } => {
                tracing::error!(%status, details = %details, "Server error: {}", self);
            }
            _ if status.is_server_error() => tracing::error!(%status, "Server error: {}", self),
            _ => tracing::warn!(%status, "Client error: {}", self),
        }

        let details = match &self {
            Self::Internal { details } => Some(details.clone()),
            _ => None,
        };

        let body = ErrorResponse {
            error: self.to_string(),
            details,
        };

        (status, Json(body)).into_response()
    }
}

/// Missing configuration is logged with the variable name, the caller only sees a generic error
impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Storage configuration error: {err}");
        Self::ServerMisconfiguration
    }
}

/// Convert bucket errors to application errors
impl From<BucketError> for AppError {
    fn from(err: BucketError) -> Self {
        tracing::error!("Error generating upload URL: {err:?}");
        Self::Internal {
            details: err.to_string(),
        }
    }
}
