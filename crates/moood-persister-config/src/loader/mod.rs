//! Config loading from JSON5 files, strings, and the environment.
//!
//! Every source goes through the same pipeline: parse JSON5, check the raw
//! value against the schema, then decode into `PersisterConfig`.

mod schema;

#[cfg(test)]
mod tests;

use crate::{ConfigError, PersisterConfig};
use log::{debug, info};
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming the config file loaded by `from_env`.
pub const CONFIG_PATH_ENV: &str = "MOOOD_PERSISTER_CONFIG";

impl PersisterConfig {
    /// Load a single config from a path.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("loading config from path: {}", path.display());
        let contents = fs::read_to_string(path)?;
        let value: Value = json5::from_str(&contents)?;
        config_from_value(value, &format!("file({})", path.display()))
    }

    /// Load a single config from JSON5 contents.
    pub fn load_from_str(contents: &str) -> Result<Self, ConfigError> {
        debug!("loading config from raw contents (len={})", contents.len());
        let value: Value = json5::from_str(contents)?;
        config_from_value(value, "config")
    }

    /// Load from `path` when given, otherwise fall back to defaults.
    pub fn load_optional(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => {
                debug!("no config path provided; using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load the config named by `MOOOD_PERSISTER_CONFIG`, or defaults when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let path = config_path_from_env(std::env::var_os(CONFIG_PATH_ENV))?;
        Self::load_optional(path.as_deref())
    }
}

/// Resolve the raw env value into an optional path; an empty value is an error.
fn config_path_from_env(raw: Option<std::ffi::OsString>) -> Result<Option<PathBuf>, ConfigError> {
    match raw {
        None => Ok(None),
        Some(raw) if raw.is_empty() => Err(ConfigError::Invalid(format!(
            "{CONFIG_PATH_ENV} is set but empty"
        ))),
        Some(raw) => Ok(Some(PathBuf::from(raw))),
    }
}

fn config_from_value(value: Value, label: &str) -> Result<PersisterConfig, ConfigError> {
    schema::validate_config_schema(&value, label)?;
    let config: PersisterConfig = serde_json::from_value(value)?;
    debug!(
        "config decoded (metadata_min_entries={}, allow_unknown_fields={}, id_format={})",
        config.validation.metadata_min_entries,
        config.validation.allow_unknown_fields,
        config.validation.id_format.as_str()
    );
    Ok(config)
}
