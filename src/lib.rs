//! Property Metadata SDK - OpenAPI schema metadata from field tags
//!
//! Provides:
//! - Schema and field descriptor models
//! - Metadata application (description, default, enum, bounds, pattern,
//!   type override, uniqueness, read-only, nullability, origin name)
//! - Enum registries resolving external enum types
//! - Import of field descriptors and enum registries
//! - Export of schemas and definitions

pub mod export;
pub mod import;
pub mod metadata;
pub mod models;
pub mod registry;

// Re-export commonly used types
pub use export::{DefinitionsExporter, ExportError};
pub use import::{EnumImporter, FieldImporter, ImportError};
pub use metadata::{ConfigError, MetadataApplier, MetadataConfig, apply_metadata};
pub use registry::{EnumItem, EnumRegistry, StaticEnumRegistry};

// Re-export models
pub use models::{
    Definitions, DocumentFormat, Extensions, FieldDescriptor, FieldTags, Ref, Schema,
    SchemaItems, SchemaType,
};
