//! Batch filtering: validate every record, keep survivors, report a count.

use crate::error::{PersisterError, ValidationError};
use crate::validator::EventValidator;
use log::{debug, info, warn};
use moood_persister_config::{PersisterConfig, ValidationConfig};
use moood_persister_protocol::{BatchSummary, EntryEvent, EventBatch, EventKey, FIELD_ID};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// A record dropped from a batch and the reason it failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEvent {
    /// Key of the record in the incoming batch.
    pub key: EventKey,
    /// Raw `id` value when the record carried one as a string.
    pub id: Option<String>,
    /// First validation failure for the record.
    pub error: ValidationError,
}

impl fmt::Display for SkippedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = self.id.as_deref().unwrap_or("<missing>");
        write!(
            f,
            "event {} (id={}) was skipped because validation failed: {}",
            self.key, id, self.error
        )
    }
}

/// Records that survived validation plus the ones that were dropped.
#[derive(Debug, Clone, Default)]
pub struct BatchOutcome {
    /// Valid records keyed by their original batch key.
    pub accepted: BTreeMap<EventKey, EntryEvent>,
    /// Dropped records in key order.
    pub skipped: Vec<SkippedEvent>,
}

impl BatchOutcome {
    /// Counts reported to the invoker.
    pub fn summary(&self) -> BatchSummary {
        BatchSummary {
            processed: self.accepted.len(),
            skipped: self.skipped.len(),
        }
    }
}

/// Filters batches down to the records that pass validation.
///
/// The validator is built once and reused for every record and every batch.
/// Processing never mutates the input batch.
#[derive(Debug, Clone, Default)]
pub struct BatchProcessor {
    validator: EventValidator,
}

impl BatchProcessor {
    /// Build a processor from validation settings.
    pub fn new(config: &ValidationConfig) -> Self {
        Self {
            validator: EventValidator::new(config),
        }
    }

    /// Build a processor from the root persister config.
    pub fn from_config(config: &PersisterConfig) -> Self {
        Self::new(&config.validation)
    }

    /// Validate every record in `batch`.
    ///
    /// Fails only when the batch is empty; invalid records are logged and
    /// collected in `BatchOutcome::skipped`.
    pub fn process(&self, batch: &EventBatch) -> Result<BatchOutcome, PersisterError> {
        if batch.is_empty() {
            return Err(PersisterError::EmptyBatch);
        }
        debug!("processing event batch (records={})", batch.len());

        let mut outcome = BatchOutcome::default();
        for (key, value) in batch {
            match self.validator.validate(*key, value) {
                Ok(event) => {
                    outcome.accepted.insert(*key, event);
                }
                Err(error) => {
                    let skipped = SkippedEvent {
                        key: *key,
                        id: raw_id(value),
                        error,
                    };
                    warn!("{skipped}");
                    outcome.skipped.push(skipped);
                }
            }
        }

        let summary = outcome.summary();
        info!(
            "event batch processed (received={}, processed={}, skipped={})",
            summary.received(),
            summary.processed,
            summary.skipped
        );
        Ok(outcome)
    }

    /// Validate `batch` and render the invoker-facing summary string.
    pub fn handle(&self, batch: &EventBatch) -> Result<String, PersisterError> {
        self.process(batch)
            .map(|outcome| outcome.summary().to_string())
    }
}

/// Pull the id out of a record for diagnostics, whatever its validity.
fn raw_id(value: &Value) -> Option<String> {
    value
        .get(FIELD_ID)
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}
