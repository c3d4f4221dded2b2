//! Property metadata from field tags
//!
//! Reads the tags of one field and writes the matching attributes onto a
//! schema property:
//!
//! | Tag | Attribute |
//! |---|---|
//! | `description` | `description` |
//! | `default` | `default`, typed by [`string_auto_type`] |
//! | `enum` | `enum`, split on the configured separator |
//! | `protobuf` (`enum=<type>`) | `$ref` (or array items) to a registered enum definition |
//! | `format` | `format` |
//! | `minimum`, `maximum` | numeric bounds |
//! | `pattern` | `pattern` |
//! | `type` | `type`; `[]<type>` declares an array |
//! | `unique` | `uniqueItems` |
//! | `readOnly` | `readOnly` |
//! | `x-nullable` | `x-nullable` extension |
//! | `x-go-name` | `x-go-name` extension |
//!
//! Application never fails. Malformed tag values are dropped or coerced.

mod applier;
mod auto_type;
mod config;
mod protobuf;
mod setters;
pub mod tags;

pub use applier::{MetadataApplier, apply_metadata};
pub use auto_type::string_auto_type;
pub use config::{
    ConfigError, DEFAULT_DEFINITIONS_PREFIX, DEFAULT_ENUM_SEPARATOR, MetadataConfig,
    MetadataConfigBuilder,
};
pub use protobuf::ProtobufDirectives;
