use moood_persister_protocol::{EventBatch, EventKey};
use serde_json::{Value, json};
use uuid::Uuid;

pub const SAMPLE_ID: &str = "123e4567-e89b-12d3-a456-426614174000";

pub fn valid_event() -> Value {
    json!({
        "id": SAMPLE_ID,
        "entry": "x",
        "createdAt": "2024-01-01",
        "metadata": { "a": 1 }
    })
}

/// Valid event with a random v4 id.
pub fn fresh_event() -> Value {
    event_with("id", json!(Uuid::new_v4().to_string()))
}

pub fn event_with(field: &str, value: Value) -> Value {
    let mut event = valid_event();
    event[field] = value;
    event
}

pub fn event_without(field: &str) -> Value {
    let mut event = valid_event();
    if let Some(map) = event.as_object_mut() {
        map.remove(field);
    }
    event
}

pub fn batch_of(records: impl IntoIterator<Item = (EventKey, Value)>) -> EventBatch {
    records.into_iter().collect()
}
