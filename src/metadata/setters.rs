//! Single-attribute setters
//!
//! Each setter reads one tag and writes one attribute. None of them fail:
//! unusable tag text is dropped or coerced and reported at debug level.

use serde_json::Value;
use tracing::{debug, trace};

use super::auto_type::string_auto_type;
use super::config::MetadataConfig;
use super::protobuf::ProtobufDirectives;
use super::tags;
use crate::models::{Definitions, FieldTags, Ref, Schema, SchemaItems, SchemaType};
use crate::registry::{EnumRegistry, flatten_enum_items, sorted_enum_items};

const ARRAY_TYPE: &str = "array";
const ARRAY_TYPE_PREFIX: &str = "[]";

pub(crate) fn set_description<F: FieldTags + ?Sized>(property: &mut Schema, field: &F) {
    let tag = field.tag(tags::DESCRIPTION);
    if !tag.is_empty() {
        property.description = tag.to_string();
    }
}

pub(crate) fn set_default_value<F: FieldTags + ?Sized>(property: &mut Schema, field: &F) {
    let tag = field.tag(tags::DEFAULT);
    if !tag.is_empty() {
        property.default = Some(string_auto_type(tag));
    }
}

pub(crate) fn set_nullable<F: FieldTags + ?Sized>(property: &mut Schema, field: &F) {
    let tag = field.tag(tags::NULLABLE);
    if tag.is_empty() {
        return;
    }
    let nullable = match tag.parse::<bool>() {
        Ok(value) => value,
        Err(_) => {
            debug!(tag, "x-nullable tag is not a boolean, storing false");
            false
        }
    };
    property.set_extension(tags::NULLABLE, Value::Bool(nullable));
}

pub(crate) fn set_go_name<F: FieldTags + ?Sized>(property: &mut Schema, field: &F) {
    let tag = field.tag(tags::GO_NAME);
    if !tag.is_empty() {
        property.set_extension(tags::GO_NAME, Value::from(tag));
    }
}

/// Enum values from an explicit `enum` tag, or from the enum type named by
/// a `protobuf` tag
///
/// Protobuf enums are registered once in `definitions` and referenced from
/// the property (or from its items when the field is repeated).
pub(crate) fn set_enum_values<F, R>(
    config: &MetadataConfig,
    registry: &R,
    definitions: &mut Definitions,
    property: &mut Schema,
    field: &F,
) where
    F: FieldTags + ?Sized,
    R: EnumRegistry + ?Sized,
{
    let tag = field.tag(tags::ENUM);
    if !tag.is_empty() {
        property.enum_values = tag
            .split(config.enum_separator)
            .map(Value::from)
            .collect();
        return;
    }

    let proto_tag = field.tag(tags::PROTOBUF);
    if proto_tag.is_empty() {
        return;
    }
    let directives = ProtobufDirectives::parse(proto_tag);
    let Some(type_name) = directives.enum_type else {
        return;
    };

    let values = registry.enum_values(type_name);
    if values.is_empty() {
        debug!(type_name, "enum registry returned no values");
    }
    let enums = flatten_enum_items(&sorted_enum_items(values));

    definitions.entry(type_name.to_string()).or_insert_with(|| {
        trace!(type_name, "registering enum definition");
        Schema {
            enum_values: enums,
            ..Schema::default()
        }
    });

    let reference = Ref::definition(&config.definitions_prefix, type_name);
    if directives.repeated {
        property.schema_type = SchemaType::single(ARRAY_TYPE);
        property.items = Some(SchemaItems::from(Schema::from_ref(reference)));
    } else {
        property.reference = Some(reference);
    }
}

pub(crate) fn set_format<F: FieldTags + ?Sized>(property: &mut Schema, field: &F) {
    let tag = field.tag(tags::FORMAT);
    if !tag.is_empty() {
        property.format = tag.to_string();
    }
}

pub(crate) fn set_maximum<F: FieldTags + ?Sized>(property: &mut Schema, field: &F) {
    if let Some(value) = parse_bound(field.tag(tags::MAXIMUM), tags::MAXIMUM) {
        property.maximum = Some(value);
    }
}

pub(crate) fn set_minimum<F: FieldTags + ?Sized>(property: &mut Schema, field: &F) {
    if let Some(value) = parse_bound(field.tag(tags::MINIMUM), tags::MINIMUM) {
        property.minimum = Some(value);
    }
}

fn parse_bound(tag: &str, name: &str) -> Option<f64> {
    if tag.is_empty() {
        return None;
    }
    match tag.parse::<f64>() {
        Ok(value) if value.is_finite() => Some(value),
        _ => {
            debug!(tag, name, "bound is not a finite number, leaving it unset");
            None
        }
    }
}

pub(crate) fn set_pattern<F: FieldTags + ?Sized>(property: &mut Schema, field: &F) {
    let tag = field.tag(tags::PATTERN);
    if !tag.is_empty() {
        property.pattern = tag.to_string();
    }
}

/// Type override; `[]<type>` declares an array of `<type>`
pub(crate) fn set_type<F: FieldTags + ?Sized>(property: &mut Schema, field: &F) {
    let tag = field.tag(tags::TYPE);
    if tag.is_empty() {
        return;
    }

    if let Some(item_type) = tag
        .strip_prefix(ARRAY_TYPE_PREFIX)
        .filter(|item_type| !item_type.is_empty())
    {
        property.schema_type = SchemaType::single(ARRAY_TYPE);
        property.items = Some(SchemaItems::from(Schema::with_type(item_type)));
        return;
    }

    property.schema_type = SchemaType::single(tag);
}

pub(crate) fn set_unique_items<F: FieldTags + ?Sized>(property: &mut Schema, field: &F) {
    if let Some(unique) = parse_flag(field.tag(tags::UNIQUE)) {
        property.unique_items = unique;
    }
}

pub(crate) fn set_read_only<F: FieldTags + ?Sized>(property: &mut Schema, field: &F) {
    if let Some(read_only) = parse_flag(field.tag(tags::READ_ONLY)) {
        property.read_only = read_only;
    }
}

/// Only the exact literals `true` and `false` change a flag
fn parse_flag(tag: &str) -> Option<bool> {
    match tag {
        "true" => Some(true),
        "false" => Some(false),
        _ => None,
    }
}
