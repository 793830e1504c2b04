mod config_loader;

pub use config_loader::{ConfigLoader, FileConfig};

use mockall::automock;
use std::collections::HashMap;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration key `{key}` is not set")]
    Missing { key: String },

    #[error("configuration key `{key}` has an invalid value: {source}")]
    Invalid {
        key: String,
        #[source]
        source: config::ConfigError,
    },

    #[error("failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),
}

/// Looks up configuration values by key.
///
/// Clients take one of these at construction and query it on every call, so a
/// changed value is picked up without rebuilding the client.
#[automock]
pub trait ConfigSource: Send + Sync {
    fn read_config(&self, key: &str) -> Result<String, ConfigError>;
}

/// Fixed in-memory values.
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    values: HashMap<String, String>,
}

impl StaticConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }
}

impl ConfigSource for StaticConfig {
    fn read_config(&self, key: &str) -> Result<String, ConfigError> {
        self.values
            .get(key)
            .cloned()
            .ok_or_else(|| ConfigError::Missing {
                key: key.to_string(),
            })
    }
}
