//! Core validation and filtering for entry event batches.
//!
//! This crate owns the record validator, the batch processor, and the error
//! taxonomy used by the Lambda handler and the local CLI.

pub mod batch;
pub mod error;
pub mod validator;

/// Batch processing facade and its outcome types.
pub use batch::{BatchOutcome, BatchProcessor, SkippedEvent};
/// Errors for whole invocations and single records.
pub use error::{PersisterError, ValidationError};
/// Per-record schema validator.
pub use validator::EventValidator;
