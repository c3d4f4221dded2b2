//! Field descriptor model for the SDK

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use super::tag::parse_struct_tag;

/// Named tag lookup over one field of a data structure
///
/// An absent tag and a tag with an empty value are treated the same by
/// metadata application: both read as `""` through [`FieldTags::tag`].
pub trait FieldTags {
    /// Value of the named tag, if present
    fn lookup(&self, key: &str) -> Option<&str>;

    /// Value of the named tag, or `""` when absent
    fn tag(&self, key: &str) -> &str {
        self.lookup(key).unwrap_or("")
    }
}

impl FieldTags for HashMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl FieldTags for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// One field of a data structure being converted to a schema
///
/// # Example
///
/// ```rust
/// use property_metadata_sdk::models::{FieldDescriptor, FieldTags};
///
/// let field = FieldDescriptor::from_struct_tag("color", r#"json:"color" enum:"red|blue""#);
/// assert_eq!(field.tag("enum"), "red|blue");
/// assert_eq!(field.tag("description"), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Field name as declared in the source structure
    pub name: String,
    /// Tag name to tag value
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
}

impl FieldDescriptor {
    /// Create a field without tags
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tags: BTreeMap::new(),
        }
    }

    /// Create a field from a raw struct tag string
    ///
    /// When a key occurs more than once the first occurrence wins. Pairs
    /// after a malformed one are ignored.
    pub fn from_struct_tag(name: impl Into<String>, raw: &str) -> Self {
        let mut field = Self::new(name);
        for (key, value) in parse_struct_tag(raw) {
            field.tags.entry(key).or_insert(value);
        }
        field
    }

    /// Set a tag, replacing any previous value
    pub fn with_tag(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.tags.insert(key.into(), value.into());
        self
    }
}

impl FieldTags for FieldDescriptor {
    fn lookup(&self, key: &str) -> Option<&str> {
        self.tags.lookup(key)
    }
}
