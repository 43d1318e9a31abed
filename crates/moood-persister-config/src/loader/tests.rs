//! Tests for persister configuration loading.

use super::*;
use crate::{IdFormat, ValidationConfig};
use pretty_assertions::assert_eq;
use std::ffi::OsString;
use std::fs;
use tempfile::TempDir;

/// Verify that a minimal config parses with defaults.
#[test]
fn parse_minimal_config() {
    let config = PersisterConfig::load_from_str("{}").expect("config");
    assert_eq!(config, PersisterConfig::default());
    assert_eq!(config.validation.metadata_min_entries, 0);
    assert!(config.validation.allow_unknown_fields);
    assert_eq!(config.validation.id_format, IdFormat::Hyphenated);
}

/// Parse every validation setting from JSON5 syntax.
#[test]
fn parse_full_validation_block() {
    let json5 = r#"{
        // enforce non-empty metadata
        validation: {
            metadata_min_entries: 1,
            allow_unknown_fields: false,
            id_format: "any",
        },
    }"#;
    let config = PersisterConfig::load_from_str(json5).expect("config");
    assert_eq!(
        config.validation,
        ValidationConfig {
            metadata_min_entries: 1,
            allow_unknown_fields: false,
            id_format: IdFormat::Any,
        }
    );
}

/// Reject unexpected top-level config keys.
#[test]
fn rejects_unknown_top_level_key() {
    let err = PersisterConfig::load_from_str(r#"{ unexpected: true }"#).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("unknown key"));
    assert!(msg.contains("config:unexpected"));
}

/// Reject unknown keys nested inside the validation block.
#[test]
fn rejects_unknown_validation_key() {
    let err = PersisterConfig::load_from_str(r#"{ validation: { strict: true } }"#).unwrap_err();
    assert!(format!("{err}").contains("validation.strict"));
}

/// Reject id formats outside the supported set.
#[test]
fn rejects_invalid_id_format() {
    let err =
        PersisterConfig::load_from_str(r#"{ validation: { id_format: "braced" } }"#).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("validation.id_format"));
    assert!(msg.contains("hyphenated, any"));
}

/// Negative minimums are a schema error rather than a decode error.
#[test]
fn rejects_negative_metadata_minimum() {
    let err = PersisterConfig::load_from_str(r#"{ validation: { metadata_min_entries: -1 } }"#)
        .unwrap_err();
    assert!(matches!(err, ConfigError::InvalidField { .. }));
}

/// Malformed JSON5 surfaces as a parse failure.
#[test]
fn rejects_malformed_json5() {
    let err = PersisterConfig::load_from_str("{ validation: ").unwrap_err();
    assert!(matches!(err, ConfigError::ParseFailed(_)));
}

/// Load a config file from disk.
#[test]
fn loads_config_from_path() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("persister.json5");
    fs::write(&path, "{ validation: { metadata_min_entries: 2 } }").expect("write");

    let config = PersisterConfig::load_from_path(&path).expect("config");
    assert_eq!(config.validation.metadata_min_entries, 2);
}

/// Schema errors from files carry the file label.
#[test]
fn file_errors_name_the_file() {
    let temp = TempDir::new().expect("tmp");
    let path = temp.path().join("broken.json5");
    fs::write(&path, "{ validation: [] }").expect("write");

    let err = PersisterConfig::load_from_path(&path).unwrap_err();
    let msg = format!("{err}");
    assert!(msg.contains("broken.json5"));
    assert!(msg.contains("expected object"));
}

/// A missing file is a read failure.
#[test]
fn missing_file_is_read_failure() {
    let temp = TempDir::new().expect("tmp");
    let err = PersisterConfig::load_from_path(temp.path().join("absent.json5")).unwrap_err();
    assert!(matches!(err, ConfigError::ReadFailed(_)));
}

/// No path means defaults.
#[test]
fn optional_load_without_path_uses_defaults() {
    let config = PersisterConfig::load_optional(None).expect("config");
    assert_eq!(config, PersisterConfig::default());
}

/// Env resolution treats unset as defaults and empty as an error.
#[test]
fn env_path_resolution() {
    assert_eq!(config_path_from_env(None).expect("unset"), None);
    assert_eq!(
        config_path_from_env(Some(OsString::from("/etc/persister.json5"))).expect("set"),
        Some(PathBuf::from("/etc/persister.json5"))
    );
    let err = config_path_from_env(Some(OsString::new())).unwrap_err();
    assert!(format!("{err}").contains(CONFIG_PATH_ENV));
}

/// The builder overrides individual validation settings.
#[test]
fn builder_sets_validation_fields() {
    let config = PersisterConfig::builder()
        .metadata_min_entries(3)
        .allow_unknown_fields(false)
        .id_format(IdFormat::Any)
        .build();
    assert_eq!(config.validation.metadata_min_entries, 3);
    assert!(!config.validation.allow_unknown_fields);
    assert_eq!(config.validation.id_format, IdFormat::Any);
}

/// An editor `$schema` hint is accepted and otherwise ignored.
#[test]
fn schema_hint_is_ignored() {
    let config =
        PersisterConfig::load_from_str(r#"{ "$schema": "./persister.schema.json" }"#)
            .expect("config");
    assert_eq!(config, PersisterConfig::default());
}
