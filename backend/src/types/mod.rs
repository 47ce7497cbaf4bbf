mod content_type;
mod environment;
mod error;
mod extractors;
mod storage_config;

pub use content_type::ImageContentType;
pub use environment::Environment;
pub use error::{AppError, ErrorResponse};
pub use extractors::ValidatedJson;
pub use storage_config::{ConfigError, StorageConfig};
