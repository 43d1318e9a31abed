//! Configuration models and loading for the entry persister.
//!
//! This crate owns the persister config schema, its validation, and the
//! JSON5 loading used by the Lambda binary and the local CLI.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Environment variable naming the config file.
pub use loader::CONFIG_PATH_ENV;
/// Configuration schema models.
pub use model::*;
