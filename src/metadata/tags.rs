//! Recognized tag names

pub const DESCRIPTION: &str = "description";
pub const DEFAULT: &str = "default";
pub const NULLABLE: &str = "x-nullable";
pub const GO_NAME: &str = "x-go-name";
pub const ENUM: &str = "enum";
pub const PROTOBUF: &str = "protobuf";
pub const FORMAT: &str = "format";
pub const MAXIMUM: &str = "maximum";
pub const MINIMUM: &str = "minimum";
pub const PATTERN: &str = "pattern";
pub const TYPE: &str = "type";
pub const UNIQUE: &str = "unique";
pub const READ_ONLY: &str = "readOnly";
