//! Scalar-or-list coercion for polymorphic config fields.
//!
//! `hiera.yaml` lets `:backends` and `:hierarchy` be written either as a bare
//! string or as a list of strings. Both forms are flattened into a `Vec<String>`
//! here so nothing past the normalizer sees the difference.

use serde_yaml::Value;

use super::ConfigError;

/// Coerces a scalar string or a list of strings into an ordered list.
///
/// Fails on the first list element that is not a string, and on any value
/// that is neither a string nor a list. `field` names the field in the error.
pub fn coerce(field: &str, value: &Value) -> Result<Vec<String>, ConfigError> {
    match value {
        Value::String(s) => Ok(vec![s.clone()]),
        Value::Sequence(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => Ok(s.clone()),
                other => Err(shape_error(field, other)),
            })
            .collect(),
        other => Err(shape_error(field, other)),
    }
}

fn shape_error(field: &str, value: &Value) -> ConfigError {
    ConfigError::DecodeShape {
        field: field.to_string(),
        value: display_value(value),
    }
}

/// Renders a YAML value for error messages.
fn display_value(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_else(|_| format!("{other:?}")),
    }
}
