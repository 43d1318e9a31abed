//! Test helpers shared across Moood persister crates.

pub mod events;

pub use events::{SAMPLE_ID, batch_of, event_with, event_without, fresh_event, valid_event};
