/// Liveness check
pub mod health;
/// Presigned upload URL issuance
pub mod upload;

use axum::{
    routing::{get, post},
    Router,
};

/// Path the upload URL issuer is mounted on
pub const GENERATE_UPLOAD_URL_PATH: &str = "/generate-upload-url";

/// Creates the router with all handler routes
///
/// Non-POST requests to the issuer get a JSON 405 before any other check runs.
pub fn handler() -> Router {
    Router::new()
        .route("/health", get(health::handler))
        .route(
            GENERATE_UPLOAD_URL_PATH,
            post(upload::generate_upload_url).fallback(upload::method_not_allowed),
        )
}
