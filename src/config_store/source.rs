use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::ShippingConfig;

use super::ConfigError;

/// Where the configuration store reads the rate matrix from.
///
/// The administrative side owns the data; the store only reads it on startup
/// and whenever it is told the data changed.
pub trait ConfigSource: Send + Sync + 'static {
    /// Human-readable origin, used in logs.
    fn describe(&self) -> String;

    fn load(&self) -> Result<ShippingConfig, ConfigError>;
}

/// A TOML rate table on disk. See [`ShippingConfig`] for the layout.
#[derive(Debug, Clone)]
pub struct TomlFileSource {
    path: PathBuf,
}

impl TomlFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for TomlFileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn load(&self) -> Result<ShippingConfig, ConfigError> {
        let contents = fs::read_to_string(&self.path).map_err(|err| ConfigError::Io {
            path: self.describe(),
            message: err.to_string(),
        })?;
        parse_toml(&contents)
    }
}

/// A configuration held in memory.
#[derive(Debug, Clone)]
pub struct StaticSource {
    config: ShippingConfig,
}

impl StaticSource {
    pub fn new(config: ShippingConfig) -> Self {
        Self { config }
    }
}

impl ConfigSource for StaticSource {
    fn describe(&self) -> String {
        "in-memory".to_string()
    }

    fn load(&self) -> Result<ShippingConfig, ConfigError> {
        Ok(self.config.clone())
    }
}

pub fn parse_toml(contents: &str) -> Result<ShippingConfig, ConfigError> {
    toml::from_str(contents).map_err(|err| ConfigError::Parse(err.to_string()))
}
