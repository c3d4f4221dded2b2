//! Definitions exporter
//!
//! Serializes schemas and the `definitions` section to JSON or YAML.

use serde::Serialize;

use crate::export::ExportError;
use crate::models::{Definitions, DocumentFormat, Schema};

/// Definitions Exporter
///
/// Unset schema attributes are omitted; extensions are written inline.
#[derive(Debug, Default)]
pub struct DefinitionsExporter;

impl DefinitionsExporter {
    /// Create a new DefinitionsExporter
    pub fn new() -> Self {
        Self
    }

    /// Export the `definitions` section
    ///
    /// # Example
    ///
    /// ```rust
    /// use property_metadata_sdk::export::DefinitionsExporter;
    /// use property_metadata_sdk::models::{Definitions, DocumentFormat, Schema};
    ///
    /// let mut definitions = Definitions::new();
    /// definitions.insert("Name".to_string(), Schema::with_type("string"));
    ///
    /// let json = DefinitionsExporter::new()
    ///     .export_definitions(&definitions, DocumentFormat::Json)
    ///     .unwrap();
    /// assert!(json.contains("\"Name\""));
    /// ```
    pub fn export_definitions(
        &self,
        definitions: &Definitions,
        format: DocumentFormat,
    ) -> Result<String, ExportError> {
        serialize(definitions, format)
    }

    /// Export a single schema
    pub fn export_schema(
        &self,
        schema: &Schema,
        format: DocumentFormat,
    ) -> Result<String, ExportError> {
        serialize(schema, format)
    }
}

fn serialize<T: Serialize + ?Sized>(
    value: &T,
    format: DocumentFormat,
) -> Result<String, ExportError> {
    match format {
        DocumentFormat::Yaml => serde_yaml::to_string(value).map_err(|e| {
            ExportError::SerializationError(format!("Failed to serialize to YAML: {}", e))
        }),
        DocumentFormat::Json => serde_json::to_string_pretty(value).map_err(|e| {
            ExportError::SerializationError(format!("Failed to serialize to JSON: {}", e))
        }),
    }
}
