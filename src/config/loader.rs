//! Configuration loader
//!
//! Layers a TOML file under `STUDYQUEST_`-prefixed environment variables.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use std::path::PathBuf;

use crate::config::config::AppConfig;

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from the default path
    ///
    /// Search order:
    /// 1. ./studyquest.toml
    /// 2. environment variables
    pub fn load() -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file("studyquest.toml"))
            .merge(Env::prefixed("STUDYQUEST_").split("_").global());

        figment.extract()
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: PathBuf) -> Result<AppConfig, figment::Error> {
        let figment = Figment::new()
            .merge(Toml::file(path))
            .merge(Env::prefixed("STUDYQUEST_").split("_").global());

        figment.extract()
    }

    /// Validate configuration
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        if config.server.port == 0 {
            return Err(ConfigValidationError::InvalidPort);
        }

        if config.database.url.is_empty() {
            return Err(ConfigValidationError::MissingDatabaseUrl);
        }

        if config.auth.secret.is_empty() {
            return Err(ConfigValidationError::MissingAuthSecret);
        }

        Ok(())
    }
}

/// Configuration validation errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigValidationError {
    #[error("server port must be greater than 0")]
    InvalidPort,

    #[error("database connection URL is not configured")]
    MissingDatabaseUrl,

    #[error("auth token secret is not configured")]
    MissingAuthSecret,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::config::AppConfig;

    #[test]
    fn default_config_fails_validation_without_database_url() {
        let config = AppConfig::default();
        assert!(matches!(
            ConfigLoader::validate(&config),
            Err(ConfigValidationError::MissingDatabaseUrl)
        ));
    }

    #[test]
    fn populated_config_passes_validation() {
        let mut config = AppConfig::default();
        config.database.url = "postgres://localhost/studyquest".to_string();
        config.auth.secret = "secret".to_string();
        assert!(ConfigLoader::validate(&config).is_ok());
    }
}
