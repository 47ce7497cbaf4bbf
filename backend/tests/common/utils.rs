use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::UNIX_EPOCH;

use async_trait::async_trait;
use axum::response::Response;
use backend::{
    media_storage::{BucketError, BucketResult, PresignPut, UploadSigner},
    types::StorageConfig,
};
use http_body_util::BodyExt;
use serde_json::json;

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Build an upload request body
pub fn create_upload_request(bucket: &str, path: &str, content_type: &str) -> serde_json::Value {
    json!({
        "bucket": bucket,
        "path": path,
        "contentType": content_type,
    })
}

/// Storage configuration matching the documented example deployment
pub fn test_storage_config() -> StorageConfig {
    StorageConfig {
        account_id: "acct123".to_string(),
        access_key_id: "AKIDEXAMPLE".to_string(),
        secret_access_key: "wJalrXUtnFEMI/K7MDENG+bPxRfiCYEXAMPLEKEY".to_string(),
        bucket_name: "prod-bucket".to_string(),
        public_domain: "cdn.example.com".to_string(),
        endpoint_override: None,
    }
}

/// Deterministic signer that encodes its inputs in the returned URL
#[derive(Default)]
pub struct StubSigner {
    calls: AtomicUsize,
}

impl StubSigner {
    /// Number of presign calls received so far
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UploadSigner for StubSigner {
    async fn presign_put(&self, request: PresignPut<'_>) -> BucketResult<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let issued_at = request
            .issued_at
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();
        Ok(format!(
            "https://{}.signer.test/{}?X-Amz-Expires={}&X-Amz-Date={}&content-type={}",
            request.bucket,
            request.key,
            request.expires_in.as_secs(),
            issued_at,
            request.content_type,
        ))
    }
}

/// Signer that always fails
pub struct FailingSigner;

#[async_trait]
impl UploadSigner for FailingSigner {
    async fn presign_put(&self, _request: PresignPut<'_>) -> BucketResult<String> {
        Err(BucketError::Signing("signing service unavailable".to_string()))
    }
}
