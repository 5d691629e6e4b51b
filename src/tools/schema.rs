//! Input validation against a tool's declared JSON Schema.
//!
//! Only the subset of JSON Schema the tool catalog uses is understood:
//! an object with `properties`, `required`, per-property `type`
//! (`string` | `boolean`), `enum`, and `minLength`. Unknown properties are
//! ignored and `null` counts as absent.

use serde_json::{Map, Value};

use crate::error::ToolError;

/// Normalize raw call arguments to an object. Absent/`null` means `{}`.
pub fn arguments_object(arguments: Option<Value>) -> Result<Map<String, Value>, ToolError> {
    match arguments {
        None | Some(Value::Null) => Ok(Map::new()),
        Some(Value::Object(map)) => Ok(map),
        Some(other) => Err(ToolError::InvalidArguments(format!(
            "expected a JSON object, got {}",
            json_type_name(&other)
        ))),
    }
}

/// Check `arguments` against `schema`, naming the first offending field.
pub fn validate_arguments(schema: &Value, arguments: &Map<String, Value>) -> Result<(), ToolError> {
    let properties = schema.get("properties").and_then(Value::as_object);

    let required = schema
        .get("required")
        .and_then(Value::as_array)
        .into_iter()
        .flatten()
        .filter_map(Value::as_str);
    for field in required {
        if arguments.get(field).map_or(true, Value::is_null) {
            return Err(ToolError::invalid_argument(field, "required field is missing"));
        }
    }

    let Some(properties) = properties else {
        return Ok(());
    };
    for (field, spec) in properties {
        let Some(value) = arguments.get(field).filter(|v| !v.is_null()) else {
            continue;
        };
        validate_property(field, spec, value)?;
    }
    Ok(())
}

fn validate_property(field: &str, spec: &Value, value: &Value) -> Result<(), ToolError> {
    if let Some(expected) = spec.get("type").and_then(Value::as_str) {
        let matches = match expected {
            "string" => value.is_string(),
            "boolean" => value.is_boolean(),
            "integer" => value.is_i64() || value.is_u64(),
            "number" => value.is_number(),
            "object" => value.is_object(),
            "array" => value.is_array(),
            _ => true,
        };
        if !matches {
            return Err(ToolError::invalid_argument(
                field,
                format!("expected {expected}, got {}", json_type_name(value)),
            ));
        }
    }

    if let Some(allowed) = spec.get("enum").and_then(Value::as_array) {
        if !allowed.contains(value) {
            let options = allowed
                .iter()
                .filter_map(Value::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            return Err(ToolError::invalid_argument(
                field,
                format!("expected one of {options}, got {value}"),
            ));
        }
    }

    if let (Some(min), Some(text)) = (spec.get("minLength").and_then(Value::as_u64), value.as_str())
    {
        if (text.chars().count() as u64) < min {
            let message = if min == 1 {
                "must not be empty".to_string()
            } else {
                format!("must be at least {min} characters")
            };
            return Err(ToolError::invalid_argument(field, message));
        }
    }

    Ok(())
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
