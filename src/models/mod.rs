//! Models module for the SDK
//!
//! Defines the schema record that metadata is written to, the field
//! descriptor it is read from, and the struct tag parser behind it.

pub mod field;
pub mod format;
pub mod schema;
pub mod tag;

pub use field::{FieldDescriptor, FieldTags};
pub use format::DocumentFormat;
pub use schema::{Definitions, Extensions, Ref, Schema, SchemaItems, SchemaType};
