//! Enum registry importer
//!
//! Builds a [`StaticEnumRegistry`] from documents of the form:
//!
//! ```yaml
//! enums:
//!   pkg.Color:
//!     RED: 0
//!     BLUE: 1
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeMap;

use super::ImportError;
use crate::models::DocumentFormat;
use crate::registry::StaticEnumRegistry;

#[derive(Debug, Deserialize)]
struct EnumDocument {
    #[serde(default)]
    enums: BTreeMap<String, BTreeMap<String, i32>>,
}

/// Enum registry importer
#[derive(Debug, Default)]
pub struct EnumImporter;

impl EnumImporter {
    /// Create a new EnumImporter
    pub fn new() -> Self {
        Self
    }

    /// Parse an enum registry, detecting the format from the content
    pub fn parse_auto(&self, content: &str) -> Result<StaticEnumRegistry> {
        self.parse(content, super::detect_format(content))
    }

    /// Parse an enum registry from YAML
    pub fn parse_yaml(&self, content: &str) -> Result<StaticEnumRegistry> {
        self.parse(content, DocumentFormat::Yaml)
    }

    /// Parse an enum registry from JSON
    pub fn parse_json(&self, content: &str) -> Result<StaticEnumRegistry> {
        self.parse(content, DocumentFormat::Json)
    }

    /// Parse an enum registry
    ///
    /// Values must fit in a signed 32-bit integer. Empty type or value names
    /// are rejected.
    pub fn parse(&self, content: &str, format: DocumentFormat) -> Result<StaticEnumRegistry> {
        let document: EnumDocument = match format {
            DocumentFormat::Json => {
                serde_json::from_str(content).context("Failed to parse enum JSON content")?
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).context("Failed to parse enum YAML content")?
            }
        };

        let mut registry = StaticEnumRegistry::new();
        for (type_name, values) in document.enums {
            if type_name.is_empty() {
                return Err(
                    ImportError::ValidationError("Enum type name is empty".to_string()).into(),
                );
            }
            if values.keys().any(String::is_empty) {
                return Err(ImportError::ValidationError(format!(
                    "Enum '{}' has a value with an empty name",
                    type_name
                ))
                .into());
            }
            tracing::debug!(type_name = %type_name, count = values.len(), "Imported enum type");
            registry = registry.register(type_name, values);
        }

        Ok(registry)
    }
}
