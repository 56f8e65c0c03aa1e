//! Loosely-typed inbound payload fields.
//!
//! Request bodies arrive as JSON whose shape is not trusted. Each field is
//! kept as `Option<serde_json::Value>` until an entity constructor checks it:
//! `None` is an absent key, `Some(Value::Null)` an explicit `null`.
//!
//! Presence follows the usual "truthy" rule: absent, `null`, `false`, `0`
//! and `""` all count as missing. Type checks run only after presence.

use serde_json::Value;

/// A single untrusted payload field.
pub type Field = Option<Value>;

/// Wraps a string as a present field.
pub fn text(value: impl Into<String>) -> Field {
    Some(Value::String(value.into()))
}

/// Returns true when the field is present and truthy.
pub fn is_truthy(field: &Field) -> bool {
    match field {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map_or(true, |f| f != 0.0 && !f.is_nan()),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

/// Returns true when every field is present and truthy.
pub fn all_truthy(fields: &[&Field]) -> bool {
    fields.iter().all(|f| is_truthy(f))
}

/// Returns the string content if the field holds a JSON string.
pub fn as_text(field: &Field) -> Option<&str> {
    match field {
        Some(Value::String(s)) => Some(s.as_str()),
        _ => None,
    }
}

/// Returns true when every field holds a JSON string.
pub fn all_text(fields: &[&Field]) -> bool {
    fields.iter().all(|f| as_text(f).is_some())
}
