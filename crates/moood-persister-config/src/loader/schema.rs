//! Schema validation helpers for persister JSON5 configuration.

use crate::ConfigError;
use serde_json::{Map, Value};

/// Validate a raw config value against the schema.
pub(super) fn validate_config_schema(value: &Value, label: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, label, "")?;
    ensure_allowed_keys(map, &["$schema", "validation"], label, "")?;

    if let Some(value) = map.get("$schema") {
        expect_string(value, label, "$schema")?;
    }
    if let Some(value) = map.get("validation") {
        validate_validation(value, label, "validation")?;
    }
    Ok(())
}

/// Validate the "validation" block.
fn validate_validation(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    let map = expect_object(value, label, path)?;
    ensure_allowed_keys(
        map,
        &["metadata_min_entries", "allow_unknown_fields", "id_format"],
        label,
        path,
    )?;

    if let Some(value) = map.get("metadata_min_entries") {
        expect_u64(value, label, &join_path(path, "metadata_min_entries"))?;
    }
    if let Some(value) = map.get("allow_unknown_fields") {
        expect_bool(value, label, &join_path(path, "allow_unknown_fields"))?;
    }
    if let Some(value) = map.get("id_format") {
        validate_id_format(value, label, &join_path(path, "id_format"))?;
    }
    Ok(())
}

/// Validate the accepted UUID text form.
fn validate_id_format(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    let Some(format) = value.as_str() else {
        return Err(invalid_field(label, path, "expected string"));
    };
    match format {
        "hyphenated" | "any" => Ok(()),
        _ => Err(invalid_field(
            label,
            path,
            "expected one of: hyphenated, any",
        )),
    }
}

/// Expect a JSON object or return a typed error.
fn expect_object<'a>(
    value: &'a Value,
    label: &str,
    path: &str,
) -> Result<&'a Map<String, Value>, ConfigError> {
    match value {
        Value::Object(map) => Ok(map),
        _ => Err(invalid_field(label, path, "expected object")),
    }
}

/// Expect a JSON string or return a typed error.
fn expect_string(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    if value.as_str().is_some() {
        Ok(())
    } else {
        Err(invalid_field(label, path, "expected string"))
    }
}

/// Expect a JSON boolean or return a typed error.
fn expect_bool(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    if matches!(value, Value::Bool(_)) {
        Ok(())
    } else {
        Err(invalid_field(label, path, "expected bool"))
    }
}

/// Expect a non-negative JSON integer or return a typed error.
fn expect_u64(value: &Value, label: &str, path: &str) -> Result<(), ConfigError> {
    if value.is_u64() {
        Ok(())
    } else {
        Err(invalid_field(label, path, "expected non-negative integer"))
    }
}

/// Ensure an object contains only allowed keys.
fn ensure_allowed_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    label: &str,
    path: &str,
) -> Result<(), ConfigError> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(invalid_field(label, &join_path(path, key), "unknown key"));
        }
    }
    Ok(())
}

/// Join nested paths for better error messages.
fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{prefix}.{key}")
    }
}

/// Build a structured invalid-field error.
fn invalid_field(label: &str, path: &str, message: &str) -> ConfigError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    ConfigError::InvalidField {
        path: format!("{label}:{normalized_path}"),
        message: message.to_string(),
    }
}
