//! Error types for batch processing and record validation.

use moood_persister_config::ConfigError;
use thiserror::Error;

/// Errors that fail a whole invocation.
#[derive(Debug, Error)]
pub enum PersisterError {
    /// The invocation carried no records.
    #[error("received empty event batch")]
    EmptyBatch,
    /// Config loading or validation failed.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// Reason a single record is dropped from a batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid event at {path}: {message}")]
pub struct ValidationError {
    /// Record label and field, e.g. `event[3]:id`.
    pub path: String,
    /// What the field failed.
    pub message: String,
}
