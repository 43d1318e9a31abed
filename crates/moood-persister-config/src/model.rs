//! Configuration schema for the entry persister.

use serde::{Deserialize, Serialize};

/// Root config for the persister function.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct PersisterConfig {
    #[serde(default)]
    pub validation: ValidationConfig,
}

impl PersisterConfig {
    /// Start building a config programmatically with defaults applied.
    pub fn builder() -> PersisterConfigBuilder {
        PersisterConfigBuilder::new()
    }
}

/// Builder for assembling a `PersisterConfig` in code.
#[derive(Debug, Default, Clone)]
pub struct PersisterConfigBuilder {
    config: PersisterConfig,
}

impl PersisterConfigBuilder {
    /// Create a new builder seeded with default config values.
    pub fn new() -> Self {
        Self {
            config: PersisterConfig::default(),
        }
    }

    /// Require at least `min` metadata entries per record.
    pub fn metadata_min_entries(mut self, min: usize) -> Self {
        self.config.validation.metadata_min_entries = min;
        self
    }

    /// Allow or reject record keys outside the entry event schema.
    pub fn allow_unknown_fields(mut self, allow: bool) -> Self {
        self.config.validation.allow_unknown_fields = allow;
        self
    }

    /// Select the accepted textual UUID forms.
    pub fn id_format(mut self, format: IdFormat) -> Self {
        self.config.validation.id_format = format;
        self
    }

    /// Finalize and return the built `PersisterConfig`.
    pub fn build(self) -> PersisterConfig {
        self.config
    }
}

/// Record validation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Minimum number of metadata entries. `0` only requires the object to be present.
    #[serde(default)]
    pub metadata_min_entries: usize,
    #[serde(default = "default_allow_unknown_fields")]
    pub allow_unknown_fields: bool,
    #[serde(default)]
    pub id_format: IdFormat,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            metadata_min_entries: 0,
            allow_unknown_fields: default_allow_unknown_fields(),
            id_format: IdFormat::default(),
        }
    }
}

/// Unknown record keys are ignored unless configured otherwise.
fn default_allow_unknown_fields() -> bool {
    true
}

/// Textual UUID forms accepted for the event id.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdFormat {
    /// Canonical 36-character `8-4-4-4-12` form.
    #[default]
    Hyphenated,
    /// Any form the UUID parser understands (simple, braced, urn).
    Any,
}

impl IdFormat {
    /// Config string for this format.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdFormat::Hyphenated => "hyphenated",
            IdFormat::Any => "any",
        }
    }
}
