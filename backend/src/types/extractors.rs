//! Custom extractors for request validation

use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde_json::error::Category;
use validator::Validate;

use crate::types::error::AppError;

/// Custom JSON extractor that validates the payload
///
/// The body is parsed as JSON whatever the request's `Content-Type` says.
/// Every rejection maps to `AppError::InvalidRequest`.
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let body = Bytes::from_request(req, state).await.map_err(|err| {
            tracing::debug!("Failed to read request body: {err}");
            AppError::InvalidRequest(AppError::INVALID_JSON)
        })?;

        let payload = serde_json::from_slice::<T>(&body).map_err(|err| {
            tracing::debug!("JSON rejection: {err}");
            match err.classify() {
                // Wrong field types fall in here, treat them like absent fields
                Category::Data => AppError::InvalidRequest(AppError::MISSING_FIELDS),
                Category::Io | Category::Syntax | Category::Eof => {
                    AppError::InvalidRequest(AppError::INVALID_JSON)
                }
            }
        })?;

        payload.validate().map_err(|errors| {
            tracing::debug!("Validation failed: {errors}");
            AppError::InvalidRequest(AppError::MISSING_FIELDS)
        })?;

        Ok(Self(payload))
    }
}
