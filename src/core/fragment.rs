use serde::Serialize;
use serde_json::Value;
use tracing::warn;

use super::tree::OptionsMap;

/// Converts a typed partial record into a mapping fragment.
///
/// Returns `None` (and logs) when the record does not serialize into a mapping.
pub fn to_fragment<T: Serialize>(partial: &T, context: &str) -> Option<OptionsMap> {
    match to_option_value(partial, context)? {
        Value::Object(fragment) => Some(fragment),
        other => {
            warn!(
                context,
                kind = value_kind(&other),
                "skipping partial options that are not a mapping"
            );
            None
        }
    }
}

/// Converts any serializable value into a tree value.
pub fn to_option_value<T: Serialize>(value: &T, context: &str) -> Option<Value> {
    match serde_json::to_value(value) {
        Ok(value) => Some(value),
        Err(err) => {
            warn!(error = %err, context, "skipping options that failed to serialize");
            None
        }
    }
}

#[must_use]
pub fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}
