//! Public surface for the Moood entry persister.
//!
//! This crate re-exports the building blocks, hosts the Lambda handler, and
//! provides the startup helpers shared by the Lambda and local binaries.

/// Re-export for convenience.
pub use moood_persister_config as config;
pub use moood_persister_core as core;
/// Re-export for convenience.
pub use moood_persister_protocol as protocol;

pub mod handler;

pub use handler::function_handler;

use log::info;
use moood_persister_config::PersisterConfig;
use moood_persister_core::{BatchProcessor, PersisterError};
use std::path::Path;

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::builder()
            .format_timestamp_millis()
            .parse_default_env()
            .try_init();
    }
}

/// Build the batch processor used for every invocation.
///
/// An explicit `config_path` wins; otherwise `MOOOD_PERSISTER_CONFIG` is
/// consulted, falling back to defaults when unset.
pub fn load_processor(config_path: Option<&Path>) -> Result<BatchProcessor, PersisterError> {
    let config = match config_path {
        Some(path) => PersisterConfig::load_from_path(path)?,
        None => PersisterConfig::from_env()?,
    };
    info!(
        "batch processor ready (metadata_min_entries={}, allow_unknown_fields={}, id_format={})",
        config.validation.metadata_min_entries,
        config.validation.allow_unknown_fields,
        config.validation.id_format.as_str()
    );
    Ok(BatchProcessor::from_config(&config))
}
