//! # Server Configuration
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`WMS_*`)
//! 2. Config file (`wms.toml`, path from `WMS_CONFIG` or the platform
//!    config directory)
//! 3. Defaults (this file)
//!
//! The result is validated once; the server never starts with a config it
//! cannot use.
//!
//! ## Example `wms.toml`
//! ```toml
//! bind_addr = "127.0.0.1"
//! port = 9090
//! database_path = "/var/lib/wms/wms.db"
//! db_max_connections = 8
//! ```

use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use wms_db::DbConfig;

/// Name of the config file looked up in the platform config directory.
pub const CONFIG_FILE_NAME: &str = "wms.toml";

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ApiConfig {
    /// Interface to listen on.
    pub bind_addr: String,

    /// TCP port to listen on.
    pub port: u16,

    /// SQLite database file. Created on first start.
    pub database_path: PathBuf,

    /// Upper bound on pooled SQLite connections.
    pub db_max_connections: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: "0.0.0.0".to_string(),
            port: 8080,
            database_path: PathBuf::from("wms.db"),
            db_max_connections: 5,
        }
    }
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Could not read config file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse config file {path}: {source}")]
    ParseFile {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ApiConfig {
    /// Loads configuration from the process environment and, if present,
    /// the config file.
    pub fn load() -> Result<Self, ConfigError> {
        let explicit = std::env::var_os("WMS_CONFIG").map(PathBuf::from);
        let file = match explicit {
            Some(path) => Some(path),
            None => default_config_file().filter(|path| path.exists()),
        };

        Self::load_from(file.as_deref(), |key| std::env::var(key).ok())
    }

    /// Builds a config from an optional file and an environment lookup.
    pub fn load_from(
        file: Option<&Path>,
        env: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let mut config = match file {
            Some(path) => Self::from_file(path)?,
            None => ApiConfig::default(),
        };

        config.apply_env(env)?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&text).map_err(|source| ConfigError::ParseFile {
            path: path.to_path_buf(),
            source,
        })
    }

    fn apply_env(&mut self, env: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(addr) = env("WMS_BIND_ADDR") {
            self.bind_addr = addr;
        }

        if let Some(port) = env("WMS_PORT") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue("WMS_PORT".to_string()))?;
        }

        if let Some(path) = env("WMS_DATABASE_PATH") {
            self.database_path = PathBuf::from(path);
        }

        if let Some(max) = env("WMS_DB_MAX_CONNECTIONS") {
            self.db_max_connections = max
                .parse()
                .map_err(|_| ConfigError::InvalidValue("WMS_DB_MAX_CONNECTIONS".to_string()))?;
        }

        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_addr.parse::<IpAddr>().is_err() {
            return Err(ConfigError::InvalidValue("bind_addr".to_string()));
        }

        if self.port == 0 {
            return Err(ConfigError::InvalidValue("port".to_string()));
        }

        if self.database_path.as_os_str().is_empty() {
            return Err(ConfigError::InvalidValue("database_path".to_string()));
        }

        if self.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue("db_max_connections".to_string()));
        }

        Ok(())
    }

    /// Address the listener binds to. Only valid after `validate`.
    pub fn socket_addr(&self) -> SocketAddr {
        let ip = self
            .bind_addr
            .parse()
            .unwrap_or(IpAddr::from([0, 0, 0, 0]));
        SocketAddr::new(ip, self.port)
    }

    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(self.database_path.clone()).max_connections(self.db_max_connections)
    }
}

/// `wms.toml` inside the platform config directory, e.g.
/// `~/.config/wms-api/wms.toml` on Linux.
fn default_config_file() -> Option<PathBuf> {
    ProjectDirs::from("com", "wms", "wms-api").map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    fn temp_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("{}-{}", std::process::id(), name));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults() {
        let config = ApiConfig::load_from(None, env(&[])).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_env_overrides_file() {
        let path = temp_file(
            "wms-env-overrides.toml",
            "port = 9090\ndatabase_path = \"/tmp/from-file.db\"\n",
        );

        let config = ApiConfig::load_from(
            Some(&path),
            env(&[("WMS_PORT", "7070"), ("WMS_DB_MAX_CONNECTIONS", "2")]),
        )
        .unwrap();

        assert_eq!(config.port, 7070);
        assert_eq!(config.database_path, PathBuf::from("/tmp/from-file.db"));
        assert_eq!(config.db_max_connections, 2);
        assert_eq!(config.bind_addr, "0.0.0.0");
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn test_bad_env_value() {
        let err = ApiConfig::load_from(None, env(&[("WMS_PORT", "eighty")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "WMS_PORT"));
    }

    #[test]
    fn test_validation() {
        let err = ApiConfig::load_from(None, env(&[("WMS_BIND_ADDR", "localhost")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(ref key) if key == "bind_addr"));

        let err =
            ApiConfig::load_from(None, env(&[("WMS_DB_MAX_CONNECTIONS", "0")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_unreadable_and_malformed_files() {
        let missing = std::env::temp_dir().join("wms-does-not-exist.toml");
        assert!(matches!(
            ApiConfig::load_from(Some(&missing), env(&[])),
            Err(ConfigError::ReadFile { .. })
        ));

        let path = temp_file("wms-malformed.toml", "port = \"not a number\"\n");
        assert!(matches!(
            ApiConfig::load_from(Some(&path), env(&[])),
            Err(ConfigError::ParseFile { .. })
        ));
        std::fs::remove_file(path).ok();
    }
}
