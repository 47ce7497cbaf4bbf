//! Environment configuration for different deployment stages

use std::env;

use tracing::Level;

use super::ConfigError;

/// Application environment configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    Production,
    /// Staging environment
    Staging,
    /// Development environment (local S3-compatible endpoint allowed)
    Development,
}

impl Environment {
    /// Creates an Environment from the `APP_ENV` environment variable
    ///
    /// Defaults to development when `APP_ENV` is unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidEnvironment` if `APP_ENV` holds an unknown value
    pub fn from_env() -> Result<Self, ConfigError> {
        let env = env::var("APP_ENV")
            .unwrap_or_else(|_| "development".to_string())
            .trim()
            .to_lowercase();

        match env.as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            _ => Err(ConfigError::InvalidEnvironment(env)),
        }
    }

    /// Whether the service may boot without complete storage configuration.
    ///
    /// Only development allows it; requests then fail with a server
    /// misconfiguration error instead of the process refusing to start.
    #[must_use]
    pub const fn allows_degraded_start(&self) -> bool {
        matches!(self, Self::Development)
    }

    /// Whether logs are emitted as JSON
    #[must_use]
    pub const fn json_logs(&self) -> bool {
        matches!(self, Self::Production | Self::Staging)
    }

    /// Default tracing level, overridable with `TRACING_LEVEL`
    #[must_use]
    pub fn tracing_level(&self) -> Level {
        env::var("TRACING_LEVEL")
            .ok()
            .and_then(|val| val.parse::<Level>().ok())
            .unwrap_or(match self {
                Self::Production | Self::Staging => Level::INFO,
                Self::Development => Level::DEBUG,
            })
    }

    /// Port the HTTP server listens on (`PORT`, defaults to 8001)
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidPort` if `PORT` is set but not a valid port number
    pub fn port() -> Result<u16, ConfigError> {
        env::var("PORT").map_or(Ok(8001), |p| {
            p.parse().map_err(|_| ConfigError::InvalidPort(p))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_environment_from_env() {
        // Test development (default)
        env::remove_var("APP_ENV");
        assert_eq!(Environment::from_env().unwrap(), Environment::Development);

        env::set_var("APP_ENV", "development");
        assert_eq!(Environment::from_env().unwrap(), Environment::Development);

        env::set_var("APP_ENV", " Staging ");
        assert_eq!(Environment::from_env().unwrap(), Environment::Staging);

        env::set_var("APP_ENV", "production");
        assert_eq!(Environment::from_env().unwrap(), Environment::Production);

        env::remove_var("APP_ENV");
    }

    #[test]
    #[serial]
    fn test_invalid_environment() {
        env::set_var("APP_ENV", "invalid");
        let err = Environment::from_env().unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvironment(ref v) if v == "invalid"));
        env::remove_var("APP_ENV");
    }

    #[test]
    fn test_degraded_start_only_in_development() {
        assert!(Environment::Development.allows_degraded_start());
        assert!(!Environment::Staging.allows_degraded_start());
        assert!(!Environment::Production.allows_degraded_start());
    }

    #[test]
    #[serial]
    fn test_tracing_level() {
        env::remove_var("TRACING_LEVEL");
        assert_eq!(Environment::Production.tracing_level(), Level::INFO);
        assert_eq!(Environment::Development.tracing_level(), Level::DEBUG);

        env::set_var("TRACING_LEVEL", "warn");
        assert_eq!(Environment::Production.tracing_level(), Level::WARN);

        env::set_var("TRACING_LEVEL", "nonsense");
        assert_eq!(Environment::Staging.tracing_level(), Level::INFO);

        env::remove_var("TRACING_LEVEL");
    }

    #[test]
    #[serial]
    fn test_port() {
        env::remove_var("PORT");
        assert_eq!(Environment::port().unwrap(), 8001);

        env::set_var("PORT", "9000");
        assert_eq!(Environment::port().unwrap(), 9000);

        env::set_var("PORT", "not-a-port");
        assert!(matches!(
            Environment::port(),
            Err(ConfigError::InvalidPort(_))
        ));

        env::remove_var("PORT");
    }
}
