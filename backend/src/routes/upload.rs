use std::str::FromStr;
use std::time::SystemTime;

use axum::{Extension, Json};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use validator::Validate;

use crate::{
    media_storage::MediaStorage,
    middleware::AuthorizationHeader,
    state::UploadBackend,
    types::{AppError, ImageContentType, ValidatedJson},
};

/// Body of an upload URL request
///
/// Missing fields deserialize to empty strings so they fail validation the
/// same way as explicit empty values.
#[derive(Debug, Default, Deserialize, Serialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct UploadRequest {
    /// Key prefix the object is stored under (not the storage bucket)
    #[validate(length(min = 1))]
    pub bucket: String,
    /// Path of the object below the prefix
    #[validate(length(min = 1))]
    pub path: String,
    /// Content type the client will upload with
    #[validate(length(min = 1))]
    pub content_type: String,
}

/// Issued upload capability
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Presigned URL to PUT the object to, valid for 15 minutes
    pub upload_url: String,
    /// URL the object is publicly readable from once uploaded
    pub public_url: String,
}

/// Issues a presigned upload URL for an image
///
/// Checks run in a fixed order, each one rejecting without side effects:
/// 1. `Authorization` header present (enforced by the extractor)
/// 2. JSON body with non-empty `bucket`, `path`, `contentType`
/// 3. `contentType` in the image allow-list
/// 4. `bucket/path` is a safe object key
///
/// The storage backend is consulted only after all of them pass.
///
/// # Errors
///
/// - `AppError::Unauthenticated` - missing `Authorization` header
/// - `AppError::InvalidRequest` - malformed body, missing fields or unsafe path
/// - `AppError::UnsupportedMediaType` - content type outside the allow-list
/// - `AppError::ServerMisconfiguration` - storage configuration incomplete
/// - `AppError::Internal` - signing failed
#[instrument(skip_all)]
pub async fn generate_upload_url(
    Extension(backend): Extension<UploadBackend>,
    _authorization: AuthorizationHeader,
    ValidatedJson(payload): ValidatedJson<UploadRequest>,
) -> Result<Json<UploadResponse>, AppError> {
    tracing::debug!(bucket = %payload.bucket, path = %payload.path, "Upload URL requested");

    let content_type = ImageContentType::from_str(&payload.content_type)
        .map_err(|_| AppError::UnsupportedMediaType)?;

    let object_key = MediaStorage::object_key(&payload.bucket, &payload.path)
        .ok_or(AppError::InvalidRequest(AppError::INVALID_PATH))?;

    let storage = backend.storage()?;

    let upload = storage
        .generate_presigned_put_url(&object_key, content_type.as_ref(), SystemTime::now())
        .await?;

    tracing::info!(
        object_key = %upload.object_key,
        expires_at = %upload.expires_at.to_rfc3339(),
        "Issued presigned upload URL"
    );

    Ok(Json(UploadResponse {
        upload_url: upload.upload_url,
        public_url: upload.public_url,
    }))
}

/// Fallback for every method other than POST on the upload route
#[allow(clippy::unused_async)]
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
