//! Runtime type inspection for JSON values

use serde_json::Value;

/// Human-readable name of a JSON value's runtime type.
///
/// Used in `TypeMismatch` and `Comparison` error messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
