use std::path::Path;

use config::{Config as RConfig, File, FileFormat};
use tracing::debug;

use super::{ConfigError, ConfigSource};
use crate::constants::{DEFAULT_CONFIG_FILE, TRACER_SERVER_ENV, TRACER_SERVER_KEY};

/// Settings assembled from the config file, the environment and explicit overrides.
#[derive(Debug, Clone)]
pub struct FileConfig {
    settings: RConfig,
}

impl FileConfig {
    pub fn from_settings(settings: RConfig) -> Self {
        Self { settings }
    }
}

impl ConfigSource for FileConfig {
    fn read_config(&self, key: &str) -> Result<String, ConfigError> {
        self.settings.get_string(key).map_err(|err| match err {
            config::ConfigError::NotFound(_) => ConfigError::Missing {
                key: key.to_string(),
            },
            source => ConfigError::Invalid {
                key: key.to_string(),
                source,
            },
        })
    }
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `tracer.toml` from the working directory if present, then the
    /// `TRACER_SERVER` environment variable.
    pub fn load_default_config() -> Result<FileConfig, ConfigError> {
        Self::load_config(None, None)
    }

    /// Same as [`ConfigLoader::load_default_config`], but an explicit `path`
    /// must exist, and `server` wins over every other source.
    pub fn load_config(
        path: Option<&Path>,
        server: Option<String>,
    ) -> Result<FileConfig, ConfigError> {
        let mut builder = RConfig::builder();

        builder = match path {
            Some(path) => {
                debug!("Loading configuration from {}", path.display());
                builder.add_source(File::new(&path.to_string_lossy(), FileFormat::Toml))
            }
            None => builder
                .add_source(File::new(DEFAULT_CONFIG_FILE, FileFormat::Toml).required(false)),
        };

        // set overrides
        builder = builder
            .set_override_option(TRACER_SERVER_KEY, std::env::var(TRACER_SERVER_ENV).ok())?
            .set_override_option(TRACER_SERVER_KEY, server)?;

        Ok(FileConfig::from_settings(builder.build()?))
    }
}
