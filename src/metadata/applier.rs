//! Property metadata applier

use super::config::MetadataConfig;
use super::setters;
use crate::models::{Definitions, FieldTags, Schema};
use crate::registry::EnumRegistry;

/// Applies field tag metadata to schema properties
///
/// The applier keeps no state between calls; every field is handled
/// independently. Enum definitions found through `protobuf` tags are added to
/// the caller's [`Definitions`], once per type name.
///
/// # Example
///
/// ```rust
/// use property_metadata_sdk::metadata::MetadataApplier;
/// use property_metadata_sdk::models::{Definitions, FieldDescriptor, Schema};
/// use property_metadata_sdk::registry::StaticEnumRegistry;
///
/// let registry = StaticEnumRegistry::new().register("pkg.Color", [("RED", 0), ("BLUE", 1)]);
/// let applier = MetadataApplier::new(&registry);
///
/// let mut definitions = Definitions::new();
/// let mut property = Schema::with_type("integer");
/// let field = FieldDescriptor::from_struct_tag(
///     "color",
///     r#"protobuf:"varint,1,opt,enum=pkg.Color" description:"Paint color""#,
/// );
///
/// applier.apply(&mut definitions, &mut property, &field);
///
/// assert_eq!(property.description, "Paint color");
/// assert!(definitions.contains_key("pkg.Color"));
/// ```
#[derive(Debug)]
pub struct MetadataApplier<'r, R: EnumRegistry + ?Sized> {
    config: MetadataConfig,
    registry: &'r R,
}

impl<'r, R: EnumRegistry + ?Sized> MetadataApplier<'r, R> {
    /// Create an applier with the default configuration
    pub fn new(registry: &'r R) -> Self {
        Self::with_config(registry, MetadataConfig::default())
    }

    /// Create an applier with a custom configuration
    pub fn with_config(registry: &'r R, config: MetadataConfig) -> Self {
        Self { config, registry }
    }

    /// Configuration used by [`apply`](Self::apply)
    pub fn config(&self) -> &MetadataConfig {
        &self.config
    }

    /// Apply the tags of `field` to `property`
    ///
    /// Setters run in a fixed order: description, default, enum, format,
    /// minimum, maximum, pattern, unique, type, readOnly, x-nullable and
    /// x-go-name. A `type` tag therefore wins over the array type set for a
    /// repeated protobuf enum.
    pub fn apply<F: FieldTags + ?Sized>(
        &self,
        definitions: &mut Definitions,
        property: &mut Schema,
        field: &F,
    ) {
        setters::set_description(property, field);
        setters::set_default_value(property, field);
        setters::set_enum_values(&self.config, self.registry, definitions, property, field);
        setters::set_format(property, field);
        setters::set_minimum(property, field);
        setters::set_maximum(property, field);
        setters::set_pattern(property, field);
        setters::set_unique_items(property, field);
        setters::set_type(property, field);
        setters::set_read_only(property, field);
        setters::set_nullable(property, field);
        setters::set_go_name(property, field);
    }
}

/// Apply the tags of `field` to `property` with the default configuration
pub fn apply_metadata<R, F>(
    definitions: &mut Definitions,
    registry: &R,
    property: &mut Schema,
    field: &F,
) where
    R: EnumRegistry + ?Sized,
    F: FieldTags + ?Sized,
{
    MetadataApplier::new(registry).apply(definitions, property, field);
}
