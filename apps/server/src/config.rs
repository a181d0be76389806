//! Server configuration module.
//!
//! Configuration is layered: built-in defaults, then an optional TOML file,
//! then `SHOPLIST_*` environment variables.
//!
//! | Key               | Env Var                    | Default       |
//! |-------------------|----------------------------|---------------|
//! | `storage_path`    | `SHOPLIST_STORAGE_PATH`    | `shopping.db` |
//! | `bind_host`       | `SHOPLIST_BIND_HOST`       | `0.0.0.0`     |
//! | `bind_port`       | `SHOPLIST_BIND_PORT`       | `5000`        |
//! | `max_connections` | `SHOPLIST_MAX_CONNECTIONS` | `5`           |
//! | `seed_demo_data`  | `SHOPLIST_SEED_DEMO_DATA`  | `true`        |
//!
//! The file defaults to `shoplist.toml` in the working directory; set
//! `SHOPLIST_CONFIG` to point somewhere else.

use config::{Config, Environment, File, Map};
use serde::{Deserialize, Serialize};
use std::env;

use shoplist_db::DbConfig;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "shoplist.toml";

const ENV_PREFIX: &str = "SHOPLIST";

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// SQLite database file
    pub storage_path: String,

    /// Interface to listen on
    pub bind_host: String,

    /// TCP port to listen on
    pub bind_port: u16,

    /// Pool size
    pub max_connections: u32,

    /// Insert demo products when the table is empty
    pub seed_demo_data: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            storage_path: "shopping.db".to_string(),
            bind_host: "0.0.0.0".to_string(),
            bind_port: 5000,
            max_connections: 5,
            seed_demo_data: true,
        }
    }
}

impl ServerConfig {
    /// Load configuration from the config file and process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let path = env::var(format!("{ENV_PREFIX}_CONFIG"))
            .unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

        Self::from_sources(&path, None)
    }

    /// Load configuration from `path` (if it exists) and an environment.
    ///
    /// `env` replaces the process environment when given.
    pub fn from_sources(
        path: &str,
        env: Option<Map<String, String>>,
    ) -> Result<Self, ConfigError> {
        let defaults = ServerConfig::default();

        let settings = Config::builder()
            .set_default("storage_path", defaults.storage_path)?
            .set_default("bind_host", defaults.bind_host)?
            .set_default("bind_port", i64::from(defaults.bind_port))?
            .set_default("max_connections", i64::from(defaults.max_connections))?
            .set_default("seed_demo_data", defaults.seed_demo_data)?
            .add_source(File::with_name(path).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .source(env),
            )
            .build()?;

        let config: ServerConfig = settings
            .try_deserialize()
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_path.trim().is_empty() {
            return Err(ConfigError::MissingRequired("storage_path".to_string()));
        }
        if self.bind_port == 0 {
            return Err(ConfigError::InvalidValue("bind_port".to_string()));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::InvalidValue("max_connections".to_string()));
        }
        Ok(())
    }

    /// `host:port` for the listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.bind_port)
    }

    /// Pool settings derived from this configuration.
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.storage_path)
            .max_connections(self.max_connections)
            .seed_demo_data(self.seed_demo_data)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_FILE: &str = "does-not-exist/shoplist.toml";

    fn env(pairs: &[(&str, &str)]) -> Option<Map<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        )
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_sources(NO_FILE, env(&[])).unwrap();

        assert_eq!(config.storage_path, "shopping.db");
        assert_eq!(config.bind_addr(), "0.0.0.0:5000");
        assert_eq!(config.max_connections, 5);
        assert!(config.seed_demo_data);
    }

    #[test]
    fn test_env_overrides() {
        let config = ServerConfig::from_sources(
            NO_FILE,
            env(&[
                ("SHOPLIST_STORAGE_PATH", "/var/lib/shoplist/list.db"),
                ("SHOPLIST_BIND_PORT", "8080"),
                ("SHOPLIST_SEED_DEMO_DATA", "false"),
            ]),
        )
        .unwrap();

        assert_eq!(config.storage_path, "/var/lib/shoplist/list.db");
        assert_eq!(config.bind_port, 8080);
        assert!(!config.seed_demo_data);

        let db = config.db_config();
        assert!(!db.seed_demo_data);
        assert_eq!(db.max_connections, 5);
    }

    #[test]
    fn test_invalid_port() {
        let result =
            ServerConfig::from_sources(NO_FILE, env(&[("SHOPLIST_BIND_PORT", "not-a-port")]));
        assert!(result.is_err());

        let result = ServerConfig::from_sources(NO_FILE, env(&[("SHOPLIST_BIND_PORT", "0")]));
        assert!(matches!(result, Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_empty_storage_path() {
        let result = ServerConfig::from_sources(NO_FILE, env(&[("SHOPLIST_STORAGE_PATH", "  ")]));
        assert!(matches!(result, Err(ConfigError::MissingRequired(_))));
    }
}
