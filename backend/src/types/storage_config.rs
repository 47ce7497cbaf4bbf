//! R2 storage configuration loaded once at startup

use std::env;
use std::fmt;

use thiserror::Error;

/// Cloudflare account identifier, used to derive the R2 endpoint
pub const ACCOUNT_ID_VAR: &str = "R2_ACCOUNT_ID";
/// R2 API access key id
pub const ACCESS_KEY_ID_VAR: &str = "R2_ACCESS_KEY_ID";
/// R2 API secret access key
pub const SECRET_ACCESS_KEY_VAR: &str = "R2_SECRET_ACCESS_KEY";
/// Bucket presigned uploads are issued against
pub const BUCKET_NAME_VAR: &str = "R2_BUCKET_NAME";
/// Domain serving the bucket publicly
pub const PUBLIC_DOMAIN_VAR: &str = "R2_PUBLIC_DOMAIN";
/// Optional endpoint override for local S3-compatible servers
pub const ENDPOINT_URL_VAR: &str = "R2_ENDPOINT_URL";

/// Errors raised while resolving process configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// A required variable is unset or empty
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    /// `APP_ENV` holds an unknown value
    #[error("invalid environment: {0}")]
    InvalidEnvironment(String),

    /// `PORT` is not a valid port number
    #[error("invalid port: {0}")]
    InvalidPort(String),
}

/// Static credentials and addressing for the R2 bucket
#[derive(Clone, PartialEq, Eq)]
pub struct StorageConfig {
    /// Cloudflare account identifier
    pub account_id: String,
    /// Access key id
    pub access_key_id: String,
    /// Secret access key
    pub secret_access_key: String,
    /// Target bucket for every presigned upload
    pub bucket_name: String,
    /// Host serving uploaded objects, e.g. `cdn.example.com`
    pub public_domain: String,
    /// Endpoint override; `None` targets R2 directly
    pub endpoint_override: Option<String>,
}

impl StorageConfig {
    /// Reads the configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the first absent variable
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup
    ///
    /// Values that are empty or only whitespace count as missing.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Missing` naming the first absent variable
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let read = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let require = |key: &'static str| read(key).ok_or(ConfigError::Missing(key));

        Ok(Self {
            account_id: require(ACCOUNT_ID_VAR)?,
            access_key_id: require(ACCESS_KEY_ID_VAR)?,
            secret_access_key: require(SECRET_ACCESS_KEY_VAR)?,
            bucket_name: require(BUCKET_NAME_VAR)?,
            public_domain: require(PUBLIC_DOMAIN_VAR)?,
            endpoint_override: read(ENDPOINT_URL_VAR),
        })
    }

    /// Endpoint the storage client signs against
    #[must_use]
    pub fn endpoint_url(&self) -> String {
        self.endpoint_override.as_ref().map_or_else(
            || format!("https://{}.r2.cloudflarestorage.com", self.account_id),
            |url| url.trim_end_matches('/').to_string(),
        )
    }
}

// Keep the secret out of logs
impl fmt::Debug for StorageConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StorageConfig")
            .field("account_id", &self.account_id)
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("bucket_name", &self.bucket_name)
            .field("public_domain", &self.public_domain)
            .field("endpoint_override", &self.endpoint_override)
            .finish()
    }
}
