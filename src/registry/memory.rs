//! In-memory enum registry

use std::collections::HashMap;

use super::EnumRegistry;

/// Enum registry backed by a map of type name to values
///
/// # Example
///
/// ```rust
/// use property_metadata_sdk::registry::{EnumRegistry, StaticEnumRegistry};
///
/// let registry = StaticEnumRegistry::new()
///     .register("pkg.Color", [("RED", 0), ("BLUE", 1)]);
///
/// assert_eq!(registry.enum_values("pkg.Color").get("BLUE"), Some(&1));
/// assert!(registry.enum_values("pkg.Unknown").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticEnumRegistry {
    enums: HashMap<String, HashMap<String, i32>>,
}

impl StaticEnumRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add values to an enum type, returning the registry
    pub fn register<I, N>(mut self, type_name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (N, i32)>,
        N: Into<String>,
    {
        let entry = self.enums.entry(type_name.into()).or_default();
        for (name, value) in values {
            entry.insert(name.into(), value);
        }
        self
    }

    /// Add or replace a single value of an enum type
    pub fn insert(&mut self, type_name: impl Into<String>, name: impl Into<String>, value: i32) {
        self.enums
            .entry(type_name.into())
            .or_default()
            .insert(name.into(), value);
    }

    /// Whether the enum type is known
    pub fn contains(&self, type_name: &str) -> bool {
        self.enums.contains_key(type_name)
    }

    /// Known enum type names, sorted
    pub fn type_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.enums.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of known enum types
    pub fn len(&self) -> usize {
        self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.enums.is_empty()
    }
}

impl EnumRegistry for StaticEnumRegistry {
    fn enum_values(&self, type_name: &str) -> HashMap<String, i32> {
        self.enums.get(type_name).cloned().unwrap_or_default()
    }
}
