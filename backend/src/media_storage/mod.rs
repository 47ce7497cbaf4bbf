//! Presigned upload URL issuance for the public media bucket
mod error;
mod r2;
mod signer;

use std::sync::Arc;
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Utc};

pub use error::{BucketError, BucketResult};
pub use r2::R2Signer;
pub use signer::{PresignPut, UploadSigner};

use crate::types::StorageConfig;

/// Presigned upload URLs are valid for 15 minutes
pub const PRESIGNED_URL_EXPIRY_SECS: u64 = 15 * 60;

/// An issued upload capability and where the object will be served from
#[derive(Debug, Clone)]
pub struct PresignedUpload {
    /// Key the object will be stored under
    pub object_key: String,
    /// The presigned URL for the PUT
    pub upload_url: String,
    /// Public URL of the object once uploaded
    pub public_url: String,
    /// When `upload_url` stops being accepted
    pub expires_at: DateTime<Utc>,
}

/// Issues presigned PUT URLs against the configured bucket
pub struct MediaStorage {
    signer: Arc<dyn UploadSigner>,
    bucket_name: String,
    public_domain: String,
    presigned_url_expiry_secs: u64,
}

impl MediaStorage {
    /// Creates a new media storage client
    ///
    /// # Arguments
    ///
    /// * `signer` - Signer producing the presigned URLs
    /// * `config` - Storage configuration; supplies the bucket and public domain
    #[must_use]
    pub fn new(signer: Arc<dyn UploadSigner>, config: &StorageConfig) -> Self {
        Self {
            signer,
            bucket_name: config.bucket_name.clone(),
            public_domain: config.public_domain.clone(),
            presigned_url_expiry_secs: PRESIGNED_URL_EXPIRY_SECS,
        }
    }

    /// Joins the caller supplied prefix and path into an object key
    ///
    /// Returns `None` when the key could escape its prefix or is otherwise
    /// unsafe to use: a leading `/`, empty or blank segments, `.` or `..`
    /// segments, backslashes or control characters.
    #[must_use]
    pub fn object_key(prefix: &str, path: &str) -> Option<String> {
        let key = format!("{prefix}/{path}");

        let unsafe_segment = key
            .split('/')
            .any(|segment| segment.trim().is_empty() || segment == "." || segment == "..");
        let unsafe_char = key.chars().any(|c| c == '\\' || c.is_control());

        if unsafe_segment || unsafe_char {
            return None;
        }

        Some(key)
    }

    /// Public URL an object key is served from
    #[must_use]
    pub fn public_url(&self, object_key: &str) -> String {
        format!("https://{}/{object_key}", self.public_domain)
    }

    /// Generates a presigned PUT URL for `object_key`
    ///
    /// The upload must be sent with `Content-Type: {content_type}`, the header
    /// is part of the signature.
    ///
    /// # Errors
    ///
    /// Returns `BucketError::Signing` if the signer fails
    /// Returns `BucketError::ConfigError` if the presigning config is rejected
    pub async fn generate_presigned_put_url(
        &self,
        object_key: &str,
        content_type: &str,
        issued_at: SystemTime,
    ) -> BucketResult<PresignedUpload> {
        let expires_in = Duration::from_secs(self.presigned_url_expiry_secs);

        let upload_url = self
            .signer
            .presign_put(PresignPut {
                bucket: &self.bucket_name,
                key: object_key,
                content_type,
                issued_at,
                expires_in,
            })
            .await?;

        let expires_at = DateTime::<Utc>::from(issued_at + expires_in);

        Ok(PresignedUpload {
            object_key: object_key.to_string(),
            upload_url,
            public_url: self.public_url(object_key),
            expires_at,
        })
    }
}
