//! Startup wiring tests for the persister binaries.

use moood_persister::core::PersisterError;
use moood_persister::load_processor;
use moood_persister_test_utils::{batch_of, event_with, valid_event};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::fs;
use tempfile::tempdir;

/// An explicit config file drives the processor's validation rules.
#[test]
fn explicit_config_path_is_applied() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("persister.json5");
    fs::write(&path, "{ validation: { allow_unknown_fields: false } }").expect("write");

    let processor = load_processor(Some(path.as_path())).expect("processor");
    let batch = batch_of([
        (0, valid_event()),
        (1, event_with("extra", json!(true))),
    ]);
    assert_eq!(
        processor.handle(&batch).expect("summary"),
        "1 events were processed"
    );
}

/// A broken config file surfaces as a config error.
#[test]
fn invalid_config_file_is_rejected() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("persister.json5");
    fs::write(&path, "{ validation: { id_format: 3 } }").expect("write");

    let err = load_processor(Some(path.as_path())).unwrap_err();
    assert!(matches!(err, PersisterError::Config(_)));
    assert!(err.to_string().contains("validation.id_format"));
}
