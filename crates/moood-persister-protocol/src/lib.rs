//! Wire types for entry event batches and persister responses.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::{Deref, DerefMut};
use uuid::Uuid;

/// Key of a record inside an invocation batch. Carries no ordering contract.
pub type EventKey = i64;

/// Raw invocation payload: integer-like keys mapped to candidate records.
///
/// Records stay as raw JSON until validated so one malformed record cannot
/// fail the decode of the whole batch. Keys are parsed with `i64::from_str`,
/// so `"+5"` and `"007"` are accepted; a `null` payload decodes as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EventBatch(BTreeMap<EventKey, Value>);

impl EventBatch {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Deref for EventBatch {
    type Target = BTreeMap<EventKey, Value>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for EventBatch {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl FromIterator<(EventKey, Value)> for EventBatch {
    fn from_iter<I: IntoIterator<Item = (EventKey, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a EventBatch {
    type Item = (&'a EventKey, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, EventKey, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<'de> Deserialize<'de> for EventBatch {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<BTreeMap<String, Value>>::deserialize(deserializer)?;
        let mut records = BTreeMap::new();
        for (key, value) in raw.unwrap_or_default() {
            let parsed = key
                .parse::<EventKey>()
                .map_err(|err| D::Error::custom(format!("invalid event key {key:?}: {err}")))?;
            records.insert(parsed, value);
        }
        Ok(Self(records))
    }
}

/// JSON field holding the event UUID.
pub const FIELD_ID: &str = "id";
/// JSON field holding the entry text.
pub const FIELD_ENTRY: &str = "entry";
/// JSON field holding the creation timestamp.
pub const FIELD_CREATED_AT: &str = "createdAt";
/// JSON field holding the free-form metadata object.
pub const FIELD_METADATA: &str = "metadata";

/// Every field an entry event may carry.
pub const EVENT_FIELDS: &[&str] = &[FIELD_ID, FIELD_ENTRY, FIELD_CREATED_AT, FIELD_METADATA];

/// A journal entry event that passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EntryEvent {
    /// Unique id for the event.
    pub id: Uuid,
    /// Entry text.
    pub entry: String,
    /// Creation timestamp as sent by the producer. Not parsed.
    #[serde(rename = "createdAt")]
    pub created_at: String,
    /// Free-form metadata attached by upstream workers.
    pub metadata: Map<String, Value>,
}

/// Result of a processed batch, reported back to the invoker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct BatchSummary {
    /// Records that passed validation.
    pub processed: usize,
    /// Records dropped because validation failed.
    pub skipped: usize,
}

impl BatchSummary {
    /// Number of records the invocation received.
    pub fn received(&self) -> usize {
        self.processed + self.skipped
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} events were processed", self.processed)
    }
}
