//! Export functionality
//!
//! Provides exporters for schemas and definitions in:
//! - JSON
//! - YAML

pub mod definitions;

/// Error during export
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

// Re-export for convenience
pub use definitions::DefinitionsExporter;
