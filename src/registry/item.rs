//! Enum items and their flattened schema form

use serde_json::Value;
use std::collections::HashMap;

/// One named enum value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumItem {
    pub name: String,
    pub value: i32,
}

/// Sort enum values ascending by numeric value
///
/// Values shared by several names are ordered by name, so the result does
/// not depend on map iteration order.
pub fn sorted_enum_items(values: HashMap<String, i32>) -> Vec<EnumItem> {
    let mut items: Vec<EnumItem> = values
        .into_iter()
        .map(|(name, value)| EnumItem { name, value })
        .collect();
    items.sort_by(|a, b| a.value.cmp(&b.value).then_with(|| a.name.cmp(&b.name)));
    items
}

/// Alternating `[name, value, name, value, ...]` sequence
pub fn flatten_enum_items(items: &[EnumItem]) -> Vec<Value> {
    items
        .iter()
        .flat_map(|item| [Value::from(item.name.as_str()), Value::from(item.value)])
        .collect()
}
