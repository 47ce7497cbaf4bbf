//! Error types for storage signing operations

use aws_sdk_s3::{
    error::{DisplayErrorContext, SdkError},
    operation::put_object::PutObjectError,
    presigning::PresigningConfigError,
};
use thiserror::Error;

/// Result type for storage operations
pub type BucketResult<T> = Result<T, BucketError>;

/// Errors that can occur while issuing upload URLs
#[derive(Error, Debug)]
pub enum BucketError {
    /// The signer could not produce a presigned request
    #[error("Failed to presign upload: {0}")]
    Signing(String),

    /// Presigning configuration was rejected, e.g. an out of range expiry
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl From<PresigningConfigError> for BucketError {
    fn from(error: PresigningConfigError) -> Self {
        Self::ConfigError(error.to_string())
    }
}

impl<R> From<SdkError<PutObjectError, R>> for BucketError
where
    R: std::fmt::Debug + 'static,
{
    fn from(error: SdkError<PutObjectError, R>) -> Self {
        Self::Signing(DisplayErrorContext(&error).to_string())
    }
}
