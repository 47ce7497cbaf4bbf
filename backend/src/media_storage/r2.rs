//! R2 signer backed by the AWS S3 SDK

use async_trait::async_trait;
use aws_sdk_s3::{
    config::{BehaviorVersion, Credentials, Region},
    presigning::PresigningConfig,
    Client as S3Client,
};
use tracing::instrument;

use super::{BucketResult, PresignPut, UploadSigner};
use crate::types::StorageConfig;

/// R2 only accepts the `auto` region
const R2_REGION: &str = "auto";

/// Signs uploads with static R2 credentials
pub struct R2Signer {
    client: S3Client,
}

impl R2Signer {
    /// Builds an S3 client pointed at the configured R2 account
    ///
    /// Virtual-hosted addressing is used against R2 itself; an endpoint
    /// override (`MinIO`, `LocalStack`) switches to path-style addressing.
    #[must_use]
    pub fn new(config: &StorageConfig) -> Self {
        let credentials = Credentials::new(
            &config.access_key_id,
            &config.secret_access_key,
            None,
            None,
            "r2-static",
        );

        let endpoint = config.endpoint_url();

        tracing::info!(
            endpoint = %endpoint,
            bucket = %config.bucket_name,
            "Initializing R2 signer"
        );

        let s3_config = aws_sdk_s3::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(Region::new(R2_REGION))
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .force_path_style(config.endpoint_override.is_some())
            .build();

        Self {
            client: S3Client::from_conf(s3_config),
        }
    }
}

#[async_trait]
impl UploadSigner for R2Signer {
    #[instrument(skip(self), fields(bucket = request.bucket, key = request.key))]
    async fn presign_put(&self, request: PresignPut<'_>) -> BucketResult<String> {
        let presigning_config = PresigningConfig::builder()
            .start_time(request.issued_at)
            .expires_in(request.expires_in)
            .build()?;

        let presigned = self
            .client
            .put_object()
            .bucket(request.bucket)
            .key(request.key)
            .content_type(request.content_type)
            .presigned(presigning_config)
            .await?;

        Ok(presigned.uri().to_string())
    }
}
