//! Protobuf field tag directives

/// Directives of a `protobuf` tag relevant to schema metadata
///
/// A tag such as `varint,1,rep,name=colors,enum=pkg.Color` is a comma
/// separated list; `rep` marks a repeated field and `enum=<type>` names the
/// enum type of the field.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProtobufDirectives<'a> {
    /// Field is repeated
    pub repeated: bool,
    /// Enum type name, when present and non-empty
    pub enum_type: Option<&'a str>,
}

impl<'a> ProtobufDirectives<'a> {
    /// Parse a `protobuf` tag
    ///
    /// Scanning ends at the first `enum=` directive, so a `rep` after it is
    /// not seen.
    pub fn parse(tag: &'a str) -> Self {
        let mut directives = Self::default();
        for directive in tag.split(',') {
            if directive == "rep" {
                directives.repeated = true;
            }
            if let Some(type_name) = directive.strip_prefix("enum=") {
                directives.enum_type = Some(type_name).filter(|name| !name.is_empty());
                break;
            }
        }
        directives
    }
}
