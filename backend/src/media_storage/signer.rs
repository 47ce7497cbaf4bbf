use std::time::{Duration, SystemTime};

use async_trait::async_trait;

use super::BucketResult;

/// Parameters of a single presigned PUT
#[derive(Debug, Clone, Copy)]
pub struct PresignPut<'a> {
    /// Bucket the object is written to
    pub bucket: &'a str,
    /// Object key inside the bucket
    pub key: &'a str,
    /// `Content-Type` the uploader must send, bound into the signature
    pub content_type: &'a str,
    /// Signing time, the start of the validity window
    pub issued_at: SystemTime,
    /// Length of the validity window
    pub expires_in: Duration,
}

/// Produces time-bounded signed write URLs
#[async_trait]
pub trait UploadSigner: Send + Sync {
    /// Signs a PUT for the given object and returns the URL
    ///
    /// # Errors
    ///
    /// Returns `BucketError` when the request cannot be signed
    async fn presign_put(&self, request: PresignPut<'_>) -> BucketResult<String>;
}
