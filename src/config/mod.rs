//! Configuration module

pub mod config;
pub mod loader;

pub use config::{AppConfig, AuthConfig, DatabaseConfig, IdentityConfig, ServerConfig};
pub use loader::ConfigLoader;
