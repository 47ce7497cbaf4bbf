use std::sync::Arc;

use axum::{body::Body, http::Request, response::Response, Router};
use backend::{
    media_storage::{MediaStorage, UploadSigner},
    routes::GENERATE_UPLOAD_URL_PATH,
    server,
    state::UploadBackend,
    types::{ConfigError, StorageConfig},
};
use tower::ServiceExt;

use super::{test_storage_config, StubSigner};

/// Setup test environment
pub fn setup_test_env() {
    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Router under test plus the signer it was built with
pub struct TestContext {
    pub router: Router,
    pub signer: Arc<StubSigner>,
}

impl TestContext {
    /// Context with complete storage configuration and a stub signer
    pub fn new() -> Self {
        let signer = Arc::new(StubSigner::default());
        let router = Self::router_with_signer(signer.clone(), &test_storage_config());
        Self { router, signer }
    }

    /// Context whose storage configuration failed to load
    pub fn misconfigured(missing: &'static str) -> Self {
        setup_test_env();
        let signer = Arc::new(StubSigner::default());
        let router = server::router(UploadBackend::Misconfigured(ConfigError::Missing(missing)));
        Self { router, signer }
    }

    /// Router backed by an arbitrary signer
    pub fn router_with_signer(signer: Arc<dyn UploadSigner>, config: &StorageConfig) -> Router {
        setup_test_env();
        server::router(UploadBackend::from(MediaStorage::new(signer, config)))
    }

    /// POST a JSON payload to the issuer with an `Authorization` header
    pub async fn send_upload_request(&self, payload: serde_json::Value) -> Response {
        let request = Request::builder()
            .uri(GENERATE_UPLOAD_URL_PATH)
            .method("POST")
            .header("Content-Type", "application/json")
            .header("Authorization", "Bearer test-token")
            .body(Body::from(payload.to_string()))
            .unwrap();

        self.send(request).await
    }

    /// Send an arbitrary request through the router
    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}
