//! Application state management

use std::sync::Arc;

use crate::{
    media_storage::MediaStorage,
    types::{AppError, ConfigError},
};

/// Upload backend resolved once at startup
///
/// A misconfigured backend only exists when the environment allows a degraded
/// start; every issuance request then fails with a server misconfiguration.
#[derive(Clone)]
pub enum UploadBackend {
    /// Storage is configured and ready to sign
    Ready(Arc<MediaStorage>),
    /// Storage configuration was incomplete at startup
    Misconfigured(ConfigError),
}

impl UploadBackend {
    /// Returns the media storage, or the misconfiguration as an `AppError`
    ///
    /// # Errors
    ///
    /// Returns `AppError::ServerMisconfiguration` when storage is not configured
    pub fn storage(&self) -> Result<&MediaStorage, AppError> {
        match self {
            Self::Ready(storage) => Ok(storage),
            Self::Misconfigured(err) => Err(AppError::from(err.clone())),
        }
    }
}

impl From<MediaStorage> for UploadBackend {
    fn from(storage: MediaStorage) -> Self {
        Self::Ready(Arc::new(storage))
    }
}
