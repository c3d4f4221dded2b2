//! Schema model for the SDK
//!
//! An OpenAPI 2.0 style schema object. Properties produced from field tags
//! and the shared `definitions` section are both expressed with [`Schema`].

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Named schemas shared between properties (the `definitions` section)
///
/// Owned by the caller; metadata application only ever adds missing entries.
pub type Definitions = BTreeMap<String, Schema>;

/// JSON type names of a schema
///
/// Serialized as a plain string when it holds exactly one name and as an
/// array otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SchemaType(Vec<String>);

impl SchemaType {
    /// Create a type holding a single name
    pub fn single(name: impl Into<String>) -> Self {
        Self(vec![name.into()])
    }

    /// Whether no type name is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the given type name is present
    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    /// The type name, if exactly one is set
    pub fn as_single(&self) -> Option<&str> {
        match self.0.as_slice() {
            [name] => Some(name.as_str()),
            _ => None,
        }
    }
}

impl Serialize for SchemaType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_single() {
            Some(name) => serializer.serialize_str(name),
            None => self.0.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SchemaType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum OneOrMany {
            One(String),
            Many(Vec<String>),
        }

        Ok(match OneOrMany::deserialize(deserializer)? {
            OneOrMany::One(name) => Self::single(name),
            OneOrMany::Many(names) => Self(names),
        })
    }
}

/// Item schema of an array: a single schema or a tuple of schemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SchemaItems {
    Schema(Box<Schema>),
    Array(Vec<Schema>),
}

impl SchemaItems {
    /// The single item schema, if this is not a tuple
    pub fn as_schema(&self) -> Option<&Schema> {
        match self {
            SchemaItems::Schema(schema) => Some(&**schema),
            SchemaItems::Array(_) => None,
        }
    }
}

impl From<Schema> for SchemaItems {
    fn from(schema: Schema) -> Self {
        SchemaItems::Schema(Box::new(schema))
    }
}

/// JSON reference (`$ref`) to another schema
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ref(String);

impl Ref {
    /// Create a reference from a raw URI
    pub fn new(uri: impl Into<String>) -> Self {
        Self(uri.into())
    }

    /// Reference to the named entry under the given definitions prefix
    ///
    /// # Example
    ///
    /// ```rust
    /// use property_metadata_sdk::models::Ref;
    ///
    /// let r = Ref::definition("#/definitions/", "pkg.Color");
    /// assert_eq!(r.as_str(), "#/definitions/pkg.Color");
    /// ```
    pub fn definition(prefix: &str, name: &str) -> Self {
        Self(format!("{}{}", prefix, name))
    }

    /// The raw reference URI
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ref {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Vendor extensions (`x-*` keys) of a schema
///
/// Serialized inline with the owning schema. When deserializing, only keys
/// starting with `x-` (any case) are kept.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Extensions(BTreeMap<String, Value>);

impl Extensions {
    /// Create an empty set of extensions
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an extension value
    pub fn insert(&mut self, key: impl Into<String>, value: Value) -> Option<Value> {
        self.0.insert(key.into(), value)
    }

    /// Look up an extension value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Whether the extension key is set
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Whether no extension is set
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of extensions
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Extensions in key order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for Extensions {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let mut map = BTreeMap::<String, Value>::deserialize(deserializer)?;
        map.retain(|key, _| is_extension_key(key));
        Ok(Self(map))
    }
}

fn is_extension_key(key: &str) -> bool {
    key.get(..2)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("x-"))
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Schema object
///
/// Every attribute starts unset; unset attributes are omitted when
/// serialized. `minimum` and `maximum` distinguish "not set" from zero.
///
/// # Example
///
/// ```rust
/// use property_metadata_sdk::models::Schema;
///
/// let schema = Schema::with_type("string");
/// assert_eq!(schema.schema_type.as_single(), Some("string"));
/// assert!(schema.minimum.is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Reference to a named definition
    #[serde(rename = "$ref", default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<Ref>,
    #[serde(rename = "type", default, skip_serializing_if = "SchemaType::is_empty")]
    pub schema_type: SchemaType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub format: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub description: String,
    /// Default value, typed from the tag text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    /// Allowed values
    #[serde(rename = "enum", default, skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum: Option<f64>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub pattern: String,
    #[serde(default, skip_serializing_if = "is_false")]
    pub unique_items: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub read_only: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<SchemaItems>,
    /// Vendor extensions such as `x-nullable`
    #[serde(flatten, default, skip_serializing_if = "Extensions::is_empty")]
    pub extensions: Extensions,
}

impl Schema {
    /// Create an empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a schema with a single type name
    pub fn with_type(name: impl Into<String>) -> Self {
        Self {
            schema_type: SchemaType::single(name),
            ..Self::default()
        }
    }

    /// Create a schema that only holds a reference
    pub fn from_ref(reference: Ref) -> Self {
        Self {
            reference: Some(reference),
            ..Self::default()
        }
    }

    /// Single item schema, if `items` holds one
    pub fn item_schema(&self) -> Option<&Schema> {
        self.items.as_ref().and_then(SchemaItems::as_schema)
    }

    /// Set a vendor extension
    pub fn set_extension(&mut self, key: impl Into<String>, value: Value) {
        self.extensions.insert(key, value);
    }

    /// Look up a vendor extension
    pub fn extension(&self, key: &str) -> Option<&Value> {
        self.extensions.get(key)
    }
}
