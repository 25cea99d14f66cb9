//! Typed application configuration

use serde::{Deserialize, Serialize};

/// Top-level application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP server settings
    pub server: ServerConfig,
    /// Relational store settings
    pub database: DatabaseConfig,
    /// Session and re-authentication token settings
    pub auth: AuthConfig,
    /// External identity collaborator settings
    pub identity: IdentityConfig,
}

/// HTTP server settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Relational store settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Postgres connection URL
    pub url: String,
    /// Maximum pool connections
    pub connections: u32,
    /// Pool acquire timeout in seconds; bounds every read issued by the
    /// data-access adapter, which imposes no retry policy of its own
    pub timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            connections: 5,
            timeout: 10,
        }
    }
}

/// Session and re-authentication token settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 secret shared with the identity collaborator
    pub secret: String,
}

/// External identity collaborator settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IdentityConfig {
    /// Admin API base URL of the identity service
    pub endpoint: String,
    /// Service-role key for admin calls
    pub key: String,
}
