//! Typed values from tag text

use serde_json::{Number, Value};

/// Infer a typed value from tag text
///
/// Tries, in order: 64-bit integer, finite 64-bit float, boolean
/// (`true`/`false` only), and finally keeps the text as a string.
///
/// # Example
///
/// ```rust
/// use property_metadata_sdk::metadata::string_auto_type;
/// use serde_json::json;
///
/// assert_eq!(string_auto_type("42"), json!(42));
/// assert_eq!(string_auto_type("0.5"), json!(0.5));
/// assert_eq!(string_auto_type("false"), json!(false));
/// assert_eq!(string_auto_type("hello"), json!("hello"));
/// ```
pub fn string_auto_type(text: &str) -> Value {
    if let Ok(int) = text.parse::<i64>() {
        return Value::from(int);
    }
    if let Ok(float) = text.parse::<f64>()
        && let Some(number) = Number::from_f64(float)
    {
        return Value::Number(number);
    }
    if let Ok(flag) = text.parse::<bool>() {
        return Value::Bool(flag);
    }
    Value::String(text.to_string())
}
