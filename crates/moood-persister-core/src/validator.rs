//! Schema validation for a single entry event record.

use crate::error::ValidationError;
use moood_persister_config::{IdFormat, ValidationConfig};
use moood_persister_protocol::{
    EVENT_FIELDS, EntryEvent, EventKey, FIELD_CREATED_AT, FIELD_ENTRY, FIELD_ID, FIELD_METADATA,
};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Length of the canonical `8-4-4-4-12` UUID text form.
const HYPHENATED_UUID_LEN: usize = 36;

/// Validates raw records against the entry event schema.
///
/// A record is valid iff `id` is a UUID, `entry` and `createdAt` are
/// non-empty strings, and `metadata` is an object. Fields are checked in that
/// order and the first failure is reported.
#[derive(Debug, Clone)]
pub struct EventValidator {
    metadata_min_entries: usize,
    allow_unknown_fields: bool,
    id_format: IdFormat,
}

impl Default for EventValidator {
    fn default() -> Self {
        Self::new(&ValidationConfig::default())
    }
}

impl EventValidator {
    /// Build a validator from config. Holds no per-record state.
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            metadata_min_entries: config.metadata_min_entries,
            allow_unknown_fields: config.allow_unknown_fields,
            id_format: config.id_format,
        }
    }

    /// Validate one record and decode it into an `EntryEvent`.
    pub fn validate(&self, key: EventKey, value: &Value) -> Result<EntryEvent, ValidationError> {
        let label = event_label(key);
        let map = match value {
            Value::Object(map) => map,
            Value::Null => return Err(invalid_field(&label, "", "missing record")),
            _ => return Err(invalid_field(&label, "", "expected object")),
        };
        if !self.allow_unknown_fields {
            ensure_allowed_keys(map, EVENT_FIELDS, &label)?;
        }

        let id = required_string(map, FIELD_ID, &label)?;
        let id = self.parse_id(id, &label)?;
        let entry = required_string(map, FIELD_ENTRY, &label)?;
        let created_at = required_string(map, FIELD_CREATED_AT, &label)?;
        let metadata = required_object(map, FIELD_METADATA, &label)?;
        if metadata.len() < self.metadata_min_entries {
            return Err(invalid_field(
                &label,
                FIELD_METADATA,
                &format!("expected at least {} entries", self.metadata_min_entries),
            ));
        }

        Ok(EntryEvent {
            id,
            entry: entry.to_string(),
            created_at: created_at.to_string(),
            metadata: metadata.clone(),
        })
    }

    /// Parse the event id according to the configured text form.
    fn parse_id(&self, raw: &str, label: &str) -> Result<Uuid, ValidationError> {
        let id = Uuid::try_parse(raw).map_err(|_| invalid_field(label, FIELD_ID, "expected uuid"))?;
        if self.id_format == IdFormat::Hyphenated {
            if raw.len() != HYPHENATED_UUID_LEN {
                return Err(invalid_field(label, FIELD_ID, "expected hyphenated uuid"));
            }
            if raw.bytes().any(|b| b.is_ascii_uppercase()) {
                return Err(invalid_field(
                    label,
                    FIELD_ID,
                    "expected lowercase hyphenated uuid",
                ));
            }
        }
        Ok(id)
    }
}

/// Fetch a field that must be a non-empty string.
fn required_string<'a>(
    map: &'a Map<String, Value>,
    field: &str,
    label: &str,
) -> Result<&'a str, ValidationError> {
    let value = match map.get(field) {
        None | Some(Value::Null) => {
            return Err(invalid_field(label, field, "missing required field"));
        }
        Some(value) => value,
    };
    let Some(value) = value.as_str() else {
        return Err(invalid_field(label, field, "expected string"));
    };
    if value.is_empty() {
        return Err(invalid_field(label, field, "must not be empty"));
    }
    Ok(value)
}

/// Fetch a field that must be a JSON object (possibly empty).
fn required_object<'a>(
    map: &'a Map<String, Value>,
    field: &str,
    label: &str,
) -> Result<&'a Map<String, Value>, ValidationError> {
    match map.get(field) {
        None | Some(Value::Null) => Err(invalid_field(label, field, "missing required field")),
        Some(Value::Object(inner)) => Ok(inner),
        Some(_) => Err(invalid_field(label, field, "expected object")),
    }
}

/// Ensure a record contains only known keys.
fn ensure_allowed_keys(
    map: &Map<String, Value>,
    allowed: &[&str],
    label: &str,
) -> Result<(), ValidationError> {
    for key in map.keys() {
        if !allowed.contains(&key.as_str()) {
            return Err(invalid_field(label, key, "unknown key"));
        }
    }
    Ok(())
}

/// Label used to prefix every diagnostic path for a record.
fn event_label(key: EventKey) -> String {
    format!("event[{key}]")
}

/// Build a structured invalid-field error.
fn invalid_field(label: &str, path: &str, message: &str) -> ValidationError {
    let normalized_path = if path.is_empty() { "root" } else { path };
    ValidationError {
        path: format!("{label}:{normalized_path}"),
        message: message.to_string(),
    }
}
