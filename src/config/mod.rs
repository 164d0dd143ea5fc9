//! Configuration loading and management

use crate::core::error::{ServiceError, ServiceResult};
use crate::core::item::ItemForm;
use serde::{Deserialize, Serialize};

/// Environment variable naming a YAML configuration file
pub const CONFIG_PATH_ENV: &str = "ITEM_SERVICE_CONFIG";

/// Listen address of the HTTP server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl ServerConfig {
    /// `host:port`, as accepted by `TcpListener::bind`
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// Complete configuration of the item service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub server: ServerConfig,

    /// Tracing filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,

    /// Items saved into the repository at startup
    #[serde(default = "default_seed_items")]
    pub seed_items: Vec<ItemForm>,
}

impl ServiceConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> ServiceResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| ServiceError::Config {
            message: format!("cannot read '{}': {}", path, e),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> ServiceResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load the process configuration
    ///
    /// Reads the file named by `ITEM_SERVICE_CONFIG` when set, defaults
    /// otherwise, then applies `HOST` / `PORT` overrides.
    pub fn load() -> ServiceResult<Self> {
        let config = match std::env::var(CONFIG_PATH_ENV) {
            Ok(path) => Self::from_yaml_file(&path)?,
            Err(_) => Self::default_config(),
        };

        config.with_overrides(
            std::env::var("HOST").ok(),
            std::env::var("PORT").ok().as_deref(),
        )
    }

    /// Apply host/port overrides, rejecting a port that is not a number
    pub fn with_overrides(mut self, host: Option<String>, port: Option<&str>) -> ServiceResult<Self> {
        if let Some(host) = host {
            self.server.host = host;
        }
        if let Some(port) = port {
            self.server.port = port.parse().map_err(|_| ServiceError::Config {
                message: format!("PORT must be a number, got '{}'", port),
            })?;
        }
        Ok(self)
    }

    /// Create a default configuration
    pub fn default_config() -> Self {
        Self {
            server: ServerConfig::default(),
            log_filter: default_log_filter(),
            seed_items: default_seed_items(),
        }
    }
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self::default_config()
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_filter() -> String {
    "item_service=info,tower_http=info".to_string()
}

fn default_seed_items() -> Vec<ItemForm> {
    vec![
        ItemForm::new("itemA", 10000, 10),
        ItemForm::new("itemB", 20000, 20),
    ]
}
