//! Metadata application tests

use property_metadata_sdk::metadata::{MetadataApplier, MetadataConfig, apply_metadata};
use property_metadata_sdk::models::{Definitions, FieldDescriptor, Ref, Schema};
use property_metadata_sdk::registry::StaticEnumRegistry;
use serde_json::json;
use std::collections::HashMap;

fn color_registry() -> StaticEnumRegistry {
    StaticEnumRegistry::new().register("pkg.Color", [("GREEN", 2), ("RED", 0), ("BLUE", 1)])
}

fn apply(field: &FieldDescriptor) -> (Schema, Definitions) {
    let registry = color_registry();
    let mut definitions = Definitions::new();
    let mut property = Schema::new();
    apply_metadata(&mut definitions, &registry, &mut property, field);
    (property, definitions)
}

fn tagged(raw: &str) -> FieldDescriptor {
    FieldDescriptor::from_struct_tag("field", raw)
}

mod untagged_field_tests {
    use super::*;

    #[test]
    fn test_no_tags_leave_property_untouched() {
        let (property, definitions) = apply(&FieldDescriptor::new("plain"));
        assert_eq!(property, Schema::new());
        assert!(definitions.is_empty());
    }

    #[test]
    fn test_unrelated_tags_leave_property_untouched() {
        let (property, _) = apply(&tagged(r#"json:"plain,omitempty" yaml:"plain""#));
        assert_eq!(property, Schema::new());
    }

    #[test]
    fn test_existing_attributes_survive_missing_tags() {
        let registry = StaticEnumRegistry::new();
        let mut property = Schema::with_type("integer");
        property.description = "kept".to_string();
        property.minimum = Some(1.0);
        property.unique_items = true;
        property.read_only = true;

        apply_metadata(
            &mut Definitions::new(),
            &registry,
            &mut property,
            &FieldDescriptor::new("plain"),
        );

        assert_eq!(property.description, "kept");
        assert_eq!(property.minimum, Some(1.0));
        assert_eq!(property.schema_type.as_single(), Some("integer"));
        assert!(property.unique_items);
        assert!(property.read_only);
    }

    #[test]
    fn test_empty_tag_is_treated_as_absent() {
        let mut property = Schema::new();
        property.description = "kept".to_string();
        apply_metadata(
            &mut Definitions::new(),
            &StaticEnumRegistry::new(),
            &mut property,
            &tagged(r#"description:"" x-nullable:"""#),
        );
        assert_eq!(property.description, "kept");
        assert!(property.extensions.is_empty());
    }
}

mod scalar_tag_tests {
    use super::*;

    #[test]
    fn test_description_format_pattern() {
        let (property, _) = apply(&tagged(
            r#"description:"The user's e-mail" format:"email" pattern:"^\\S+@\\S+$""#,
        ));
        assert_eq!(property.description, "The user's e-mail");
        assert_eq!(property.format, "email");
        assert_eq!(property.pattern, r"^\S+@\S+$");
    }

    #[test]
    fn test_default_integer() {
        let (property, _) = apply(&tagged(r#"default:"42""#));
        assert_eq!(property.default, Some(json!(42)));
        assert_ne!(property.default, Some(json!("42")));
    }

    #[test]
    fn test_default_float() {
        let (property, _) = apply(&tagged(r#"default:"2.75""#));
        assert_eq!(property.default, Some(json!(2.75)));
    }

    #[test]
    fn test_default_boolean() {
        let (property, _) = apply(&tagged(r#"default:"true""#));
        assert_eq!(property.default, Some(json!(true)));
    }

    #[test]
    fn test_default_string() {
        let (property, _) = apply(&tagged(r#"default:"hello""#));
        assert_eq!(property.default, Some(json!("hello")));
    }

    #[test]
    fn test_bounds() {
        let (property, _) = apply(&tagged(r#"minimum:"0" maximum:"99.5""#));
        assert_eq!(property.minimum, Some(0.0));
        assert_eq!(property.maximum, Some(99.5));
    }

    #[test]
    fn test_unparsable_bounds_stay_unset() {
        let (property, _) = apply(&tagged(r#"minimum:"low" maximum:"1,000""#));
        assert_eq!(property.minimum, None);
        assert_eq!(property.maximum, None);
    }

    #[test]
    fn test_non_finite_bounds_stay_unset() {
        let (property, _) = apply(&tagged(r#"maximum:"1e400" minimum:"NaN""#));
        assert_eq!(property.maximum, None);
        assert_eq!(property.minimum, None);

        let (property, _) = apply(&tagged(r#"maximum:"inf" minimum:"-infinity""#));
        assert_eq!(property.maximum, None);
        assert_eq!(property.minimum, None);
        assert_eq!(serde_json::to_value(&property).unwrap(), json!({}));
    }
}

mod type_tag_tests {
    use super::*;

    #[test]
    fn test_scalar_type_override() {
        let (property, _) = apply(&tagged(r#"type:"string" format:"date-time""#));
        assert_eq!(property.schema_type.as_single(), Some("string"));
        assert!(property.items.is_none());
    }

    #[test]
    fn test_array_type_override() {
        let (property, _) = apply(&tagged(r#"type:"[]string""#));
        assert_eq!(property.schema_type.as_single(), Some("array"));
        let items = property.item_schema().unwrap();
        assert_eq!(items.schema_type.as_single(), Some("string"));
    }

    #[test]
    fn test_array_type_override_serializes() {
        let (property, _) = apply(&tagged(r#"type:"[]integer""#));
        assert_eq!(
            serde_json::to_value(&property).unwrap(),
            json!({ "type": "array", "items": { "type": "integer" } })
        );
    }
}

mod flag_tag_tests {
    use super::*;

    #[test]
    fn test_unique_items_survive_untagged_call() {
        let registry = StaticEnumRegistry::new();
        let mut definitions = Definitions::new();
        let mut property = Schema::new();

        apply_metadata(&mut definitions, &registry, &mut property, &tagged(r#"unique:"true""#));
        assert!(property.unique_items);

        apply_metadata(&mut definitions, &registry, &mut property, &FieldDescriptor::new("f"));
        assert!(property.unique_items);

        apply_metadata(&mut definitions, &registry, &mut property, &tagged(r#"unique:"false""#));
        assert!(!property.unique_items);
    }

    #[test]
    fn test_read_only_tri_state() {
        let registry = StaticEnumRegistry::new();
        let mut definitions = Definitions::new();
        let mut property = Schema::new();

        apply_metadata(&mut definitions, &registry, &mut property, &tagged(r#"readOnly:"true""#));
        assert!(property.read_only);

        apply_metadata(&mut definitions, &registry, &mut property, &tagged(r#"readOnly:"yes""#));
        assert!(property.read_only);

        apply_metadata(&mut definitions, &registry, &mut property, &tagged(r#"readOnly:"false""#));
        assert!(!property.read_only);
    }

    #[test]
    fn test_capitalized_true_is_not_recognized() {
        let (property, _) = apply(&tagged(r#"unique:"True" readOnly:"TRUE""#));
        assert!(!property.unique_items);
        assert!(!property.read_only);
    }
}

mod extension_tag_tests {
    use super::*;

    #[test]
    fn test_nullable_true() {
        let (property, _) = apply(&tagged(r#"x-nullable:"true""#));
        assert_eq!(property.extension("x-nullable"), Some(&json!(true)));
    }

    #[test]
    fn test_nullable_unparsable_is_false() {
        let (property, _) = apply(&tagged(r#"x-nullable:"banana""#));
        assert_eq!(property.extension("x-nullable"), Some(&json!(false)));

        let (property, _) = apply(&tagged(r#"x-nullable:"True""#));
        assert_eq!(property.extension("x-nullable"), Some(&json!(false)));
    }

    #[test]
    fn test_go_name() {
        let (property, _) = apply(&tagged(r#"x-go-name:"UserID""#));
        assert_eq!(property.extension("x-go-name"), Some(&json!("UserID")));
    }

    #[test]
    fn test_existing_extensions_are_kept() {
        let mut property = Schema::new();
        property.set_extension("x-order", json!(3));
        apply_metadata(
            &mut Definitions::new(),
            &StaticEnumRegistry::new(),
            &mut property,
            &tagged(r#"x-nullable:"true" x-go-name:"Name""#),
        );

        assert_eq!(property.extensions.len(), 3);
        assert_eq!(property.extension("x-order"), Some(&json!(3)));
    }
}

mod enum_tag_tests {
    use super::*;

    #[test]
    fn test_explicit_enum_in_order() {
        let (property, definitions) = apply(&tagged(r#"enum:"a|b|c""#));
        assert_eq!(property.enum_values, vec![json!("a"), json!("b"), json!("c")]);
        assert!(definitions.is_empty());
    }

    #[test]
    fn test_explicit_enum_values_stay_strings() {
        let (property, _) = apply(&tagged(r#"enum:"1|2|true""#));
        assert_eq!(property.enum_values, vec![json!("1"), json!("2"), json!("true")]);
    }

    #[test]
    fn test_explicit_enum_wins_over_protobuf() {
        let (property, definitions) =
            apply(&tagged(r#"enum:"x|y" protobuf:"varint,1,opt,enum=pkg.Color""#));
        assert_eq!(property.enum_values, vec![json!("x"), json!("y")]);
        assert!(property.reference.is_none());
        assert!(definitions.is_empty());
    }

    #[test]
    fn test_protobuf_enum_registers_sorted_definition() {
        let (property, definitions) = apply(&tagged(r#"protobuf:"varint,1,opt,enum=pkg.Color""#));

        let definition = &definitions["pkg.Color"];
        assert_eq!(
            definition.enum_values,
            vec![json!("RED"), json!(0), json!("BLUE"), json!(1), json!("GREEN"), json!(2)]
        );
        assert_eq!(property.reference, Some(Ref::new("#/definitions/pkg.Color")));
        assert!(property.schema_type.is_empty());
        assert!(property.enum_values.is_empty());
    }

    #[test]
    fn test_repeated_protobuf_enum_is_array_of_ref() {
        let (property, definitions) =
            apply(&tagged(r#"protobuf:"varint,2,rep,packed,name=colors,enum=pkg.Color""#));

        assert!(definitions.contains_key("pkg.Color"));
        assert!(property.reference.is_none());
        assert_eq!(property.schema_type.as_single(), Some("array"));
        assert_eq!(
            property.item_schema().and_then(|items| items.reference.clone()),
            Some(Ref::new("#/definitions/pkg.Color"))
        );
    }

    #[test]
    fn test_protobuf_without_enum_does_nothing() {
        let (property, definitions) = apply(&tagged(r#"protobuf:"bytes,3,opt,name=payload""#));
        assert_eq!(property, Schema::new());
        assert!(definitions.is_empty());
    }

    #[test]
    fn test_registration_is_idempotent() {
        let registry = color_registry();
        let applier = MetadataApplier::new(&registry);
        let mut definitions = Definitions::new();

        let mut primary = Schema::new();
        let mut secondary = Schema::new();
        applier.apply(
            &mut definitions,
            &mut primary,
            &tagged(r#"protobuf:"varint,1,opt,enum=pkg.Color""#),
        );
        applier.apply(
            &mut definitions,
            &mut secondary,
            &tagged(r#"protobuf:"varint,2,rep,enum=pkg.Color""#),
        );

        assert_eq!(definitions.len(), 1);
        assert_eq!(primary.reference, Some(Ref::new("#/definitions/pkg.Color")));
        assert!(secondary.item_schema().is_some());
    }

    #[test]
    fn test_existing_definition_is_not_overwritten() {
        let registry = color_registry();
        let mut definitions = Definitions::new();
        let mut existing = Schema::new();
        existing.description = "hand written".to_string();
        definitions.insert("pkg.Color".to_string(), existing.clone());

        apply_metadata(
            &mut definitions,
            &registry,
            &mut Schema::new(),
            &tagged(r#"protobuf:"varint,1,opt,enum=pkg.Color""#),
        );

        assert_eq!(definitions["pkg.Color"], existing);
    }

    #[test]
    fn test_type_tag_overrides_repeated_enum_type() {
        let (property, _) =
            apply(&tagged(r#"protobuf:"varint,2,rep,enum=pkg.Color" type:"string""#));
        assert_eq!(property.schema_type.as_single(), Some("string"));
        assert!(property.item_schema().and_then(|items| items.reference.as_ref()).is_some());
    }

    #[test]
    fn test_custom_registry_implementation() {
        struct FixedRegistry;

        impl property_metadata_sdk::registry::EnumRegistry for FixedRegistry {
            fn enum_values(&self, type_name: &str) -> HashMap<String, i32> {
                if type_name == "pkg.State" {
                    HashMap::from([("ON".to_string(), 1), ("OFF".to_string(), 0)])
                } else {
                    HashMap::new()
                }
            }
        }

        let mut definitions = Definitions::new();
        let mut property = Schema::new();
        apply_metadata(
            &mut definitions,
            &FixedRegistry,
            &mut property,
            &tagged(r#"protobuf:"varint,1,opt,enum=pkg.State""#),
        );

        assert_eq!(
            definitions["pkg.State"].enum_values,
            vec![json!("OFF"), json!(0), json!("ON"), json!(1)]
        );
    }
}

mod config_tests {
    use super::*;

    #[test]
    fn test_components_prefix() {
        let registry = color_registry();
        let config = MetadataConfig::builder()
            .definitions_prefix("#/components/schemas/")
            .build();
        let applier = MetadataApplier::with_config(&registry, config);
        let mut definitions = Definitions::new();
        let mut property = Schema::new();

        applier.apply(
            &mut definitions,
            &mut property,
            &tagged(r#"protobuf:"varint,1,opt,enum=pkg.Color""#),
        );

        assert_eq!(property.reference, Some(Ref::new("#/components/schemas/pkg.Color")));
        assert_eq!(applier.config().definitions_prefix, "#/components/schemas/");
    }

    #[test]
    fn test_plain_map_as_field() {
        let registry = StaticEnumRegistry::new();
        let applier = MetadataApplier::new(&registry);
        let tags: HashMap<String, String> =
            HashMap::from([("description".to_string(), "from a map".to_string())]);
        let mut property = Schema::new();

        applier.apply(&mut Definitions::new(), &mut property, &tags);

        assert_eq!(property.description, "from a map");
    }
}

#[test]
fn test_full_field_serializes() {
    let (property, definitions) = apply(&tagged(
        r#"description:"Sizes" type:"[]integer" minimum:"1" maximum:"10" unique:"true" readOnly:"true" x-nullable:"true" x-go-name:"Sizes""#,
    ));

    assert_eq!(
        serde_json::to_value(&property).unwrap(),
        json!({
            "type": "array",
            "description": "Sizes",
            "minimum": 1.0,
            "maximum": 10.0,
            "uniqueItems": true,
            "readOnly": true,
            "items": { "type": "integer" },
            "x-go-name": "Sizes",
            "x-nullable": true
        })
    );
    assert!(definitions.is_empty());
}
