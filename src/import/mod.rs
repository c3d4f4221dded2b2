//! Import functionality
//!
//! Provides parsers for the inputs of metadata application:
//! - Field descriptors (YAML or JSON documents listing fields and their tags)
//! - Enum registries (YAML or JSON documents mapping enum types to values)

pub mod enums;
pub mod fields;

use crate::models::DocumentFormat;

/// Error during import
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Detect format (YAML or JSON) from content
///
/// Content that parses as JSON is JSON; anything else is treated as YAML.
pub fn detect_format(content: &str) -> DocumentFormat {
    if serde_json::from_str::<serde_json::Value>(content).is_ok() {
        DocumentFormat::Json
    } else {
        DocumentFormat::Yaml
    }
}

// Re-export for convenience
pub use enums::EnumImporter;
pub use fields::FieldImporter;
