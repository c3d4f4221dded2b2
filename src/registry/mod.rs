//! Enum registry
//!
//! Resolves an external enum type name (for example a protobuf enum such as
//! `pkg.Color`) to its named integer values. The registry is a capability
//! handed to the metadata applier, so callers decide where values come from:
//! generated code, reflection data, or a loaded document.

mod item;
mod memory;

use std::collections::HashMap;

pub use item::{EnumItem, flatten_enum_items, sorted_enum_items};
pub use memory::StaticEnumRegistry;

/// Source of named integer enum values
pub trait EnumRegistry {
    /// All `name -> value` pairs of the given enum type
    ///
    /// Unknown type names yield an empty map.
    fn enum_values(&self, type_name: &str) -> HashMap<String, i32>;
}

impl<T: EnumRegistry + ?Sized> EnumRegistry for &T {
    fn enum_values(&self, type_name: &str) -> HashMap<String, i32> {
        (**self).enum_values(type_name)
    }
}

impl<T: EnumRegistry + ?Sized> EnumRegistry for Box<T> {
    fn enum_values(&self, type_name: &str) -> HashMap<String, i32> {
        (**self).enum_values(type_name)
    }
}
