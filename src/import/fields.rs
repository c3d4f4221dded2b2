//! Field descriptor importer
//!
//! Reads field descriptors from YAML or JSON documents of the form:
//!
//! ```yaml
//! fields:
//!   - name: color
//!     tag: 'json:"color" protobuf:"varint,1,opt,enum=pkg.Color"'
//!   - name: size
//!     tags:
//!       minimum: 1
//!       maximum: 10
//! ```
//!
//! `tag` holds a raw struct tag string; `tags` holds individual tags and
//! overrides entries parsed from `tag`.

use anyhow::{Context, Result};
use serde::Deserialize;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

use super::ImportError;
use crate::models::tag::try_parse_struct_tag;
use crate::models::{DocumentFormat, FieldDescriptor};

#[derive(Debug, Deserialize)]
struct FieldDocument {
    #[serde(default)]
    fields: Vec<FieldEntry>,
}

#[derive(Debug, Deserialize)]
struct FieldEntry {
    #[serde(default)]
    name: String,
    #[serde(default)]
    tag: Option<String>,
    #[serde(default)]
    tags: BTreeMap<String, Value>,
}

/// Field descriptor importer
#[derive(Debug, Default)]
pub struct FieldImporter;

impl FieldImporter {
    /// Create a new FieldImporter
    pub fn new() -> Self {
        Self
    }

    /// Parse field descriptors, detecting the format from the content
    pub fn parse_auto(&self, content: &str) -> Result<Vec<FieldDescriptor>> {
        self.parse(content, super::detect_format(content))
    }

    /// Parse field descriptors from YAML
    pub fn parse_yaml(&self, content: &str) -> Result<Vec<FieldDescriptor>> {
        self.parse(content, DocumentFormat::Yaml)
    }

    /// Parse field descriptors from JSON
    pub fn parse_json(&self, content: &str) -> Result<Vec<FieldDescriptor>> {
        self.parse(content, DocumentFormat::Json)
    }

    /// Parse field descriptors
    ///
    /// # Arguments
    ///
    /// * `content` - The document as a string.
    /// * `format` - The format of the content.
    ///
    /// # Returns
    ///
    /// The fields in document order. Fails on unparsable documents, malformed
    /// raw tags, fields without a name, duplicate field names and non-scalar
    /// tag values.
    pub fn parse(&self, content: &str, format: DocumentFormat) -> Result<Vec<FieldDescriptor>> {
        let document: FieldDocument = match format {
            DocumentFormat::Json => {
                serde_json::from_str(content).context("Failed to parse field JSON content")?
            }
            DocumentFormat::Yaml => {
                serde_yaml::from_str(content).context("Failed to parse field YAML content")?
            }
        };

        if document.fields.is_empty() {
            tracing::warn!("Field document does not contain any fields");
        }

        let mut seen = HashSet::new();
        let mut fields = Vec::with_capacity(document.fields.len());
        for (index, entry) in document.fields.into_iter().enumerate() {
            if entry.name.is_empty() {
                return Err(ImportError::ValidationError(format!(
                    "Field at index {} has no name",
                    index
                ))
                .into());
            }
            if !seen.insert(entry.name.clone()) {
                return Err(ImportError::ValidationError(format!(
                    "Duplicate field name '{}'",
                    entry.name
                ))
                .into());
            }

            let mut field = FieldDescriptor::new(&entry.name);
            if let Some(raw) = entry.tag.as_deref() {
                let pairs = try_parse_struct_tag(raw).map_err(|remainder| {
                    ImportError::ParseError(format!(
                        "Malformed tag of field '{}' at '{}'",
                        entry.name, remainder
                    ))
                })?;
                for (key, value) in pairs {
                    field.tags.entry(key).or_insert(value);
                }
            }
            for (key, value) in entry.tags {
                let text = tag_text(&value).ok_or_else(|| {
                    ImportError::ValidationError(format!(
                        "Tag '{}' of field '{}' must be a scalar value",
                        key, entry.name
                    ))
                })?;
                field = field.with_tag(key, text);
            }
            fields.push(field);
        }

        Ok(fields)
    }
}

/// Tag text of a scalar document value
fn tag_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null => Some(String::new()),
        Value::Array(_) | Value::Object(_) => None,
    }
}
