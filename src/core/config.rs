//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Default directory holding the knowledge files.
pub const DEFAULT_CATALOG_PATH: &str = "knowledge";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Where the catalog is loaded from.
    pub catalog: CatalogConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the catalog data files.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Directory containing `rules/`, `prompts/` and `instructions/`.
    pub base_path: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from(DEFAULT_CATALOG_PATH),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "enterprise-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            catalog: CatalogConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_CATALOG_PATH`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(value) = std::env::var("MCP_LOG_TIMESTAMPS") {
            match parse_flag("MCP_LOG_TIMESTAMPS", &value) {
                Ok(flag) => config.logging.with_timestamps = flag,
                Err(e) => warn!("{}, keeping timestamps enabled", e),
            }
        }

        if let Ok(path) = std::env::var("MCP_CATALOG_PATH") {
            config.catalog.base_path = PathBuf::from(path);
            info!("Catalog path set to {:?}", config.catalog.base_path);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config
    }
}

/// Parse a boolean-ish environment value.
fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::config(format!("{} has invalid value '{}'", name, other))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.server.name, "enterprise-mcp-server");
        assert_eq!(config.catalog.base_path, PathBuf::from("knowledge"));
        assert!(config.logging.with_timestamps);
    }

    #[test]
    fn test_catalog_path_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_CATALOG_PATH", "/srv/enterprise/knowledge");
        }
        let config = Config::from_env();
        assert_eq!(
            config.catalog.base_path,
            PathBuf::from("/srv/enterprise/knowledge")
        );
        unsafe {
            std::env::remove_var("MCP_CATALOG_PATH");
        }
    }

    #[test]
    fn test_invalid_timestamp_flag_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_LOG_TIMESTAMPS", "sometimes");
        }
        let config = Config::from_env();
        assert!(config.logging.with_timestamps);
        unsafe {
            std::env::set_var("MCP_LOG_TIMESTAMPS", "off");
        }
        let config = Config::from_env();
        assert!(!config.logging.with_timestamps);
        unsafe {
            std::env::remove_var("MCP_LOG_TIMESTAMPS");
        }
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag("X", "TRUE").unwrap());
        assert!(!parse_flag("X", "0").unwrap());
        assert!(matches!(parse_flag("X", "maybe"), Err(Error::Config(_))));
    }
}
