use std::sync::Arc;

use backend::{
    media_storage::{MediaStorage, R2Signer},
    server,
    state::UploadBackend,
    types::{Environment, StorageConfig},
};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env()?;

    // JSON logs for staging/production, human readable for development
    let filter = EnvFilter::builder()
        .with_default_directive(environment.tracing_level().into())
        .from_env_lossy();
    if environment.json_logs() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    let backend = match StorageConfig::from_env() {
        Ok(config) => {
            let signer = Arc::new(R2Signer::new(&config));
            UploadBackend::from(MediaStorage::new(signer, &config))
        }
        Err(err) if environment.allows_degraded_start() => {
            tracing::error!("Starting without storage, upload requests will fail: {err}");
            UploadBackend::Misconfigured(err)
        }
        Err(err) => return Err(err.into()),
    };

    server::start(environment, backend).await
}
