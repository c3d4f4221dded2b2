//! Configuration for metadata application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Prefix of references to entries in the `definitions` section
pub const DEFAULT_DEFINITIONS_PREFIX: &str = "#/definitions/";

/// Separator between values of an explicit `enum` tag
pub const DEFAULT_ENUM_SEPARATOR: char = '|';

/// Errors raised while loading a configuration document
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to parse YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for metadata application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetadataConfig {
    /// Prefix prepended to enum type names when building `$ref` values
    pub definitions_prefix: String,

    /// Separator splitting an explicit `enum` tag into values
    pub enum_separator: char,
}

impl Default for MetadataConfig {
    fn default() -> Self {
        Self {
            definitions_prefix: DEFAULT_DEFINITIONS_PREFIX.to_string(),
            enum_separator: DEFAULT_ENUM_SEPARATOR,
        }
    }
}

impl MetadataConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> MetadataConfigBuilder {
        MetadataConfigBuilder::default()
    }

    /// Load a configuration from YAML; missing keys keep their defaults
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// Load a configuration from JSON; missing keys keep their defaults
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}

/// Builder for MetadataConfig
#[derive(Debug, Default)]
pub struct MetadataConfigBuilder {
    config: MetadataConfig,
}

impl MetadataConfigBuilder {
    /// Set the prefix used for definition references
    pub fn definitions_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.definitions_prefix = prefix.into();
        self
    }

    /// Set the separator for explicit enum values
    pub fn enum_separator(mut self, separator: char) -> Self {
        self.config.enum_separator = separator;
        self
    }

    /// Build the configuration
    pub fn build(self) -> MetadataConfig {
        self.config
    }
}
