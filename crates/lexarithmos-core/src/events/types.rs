//! Event payload types for registry and index events.

use std::path::PathBuf;

/// Payload for `on_phrase_inserted`.
#[derive(Debug, Clone)]
pub struct PhraseInsertedEvent {
    pub key: u64,
    pub phrase: String,
    /// True when the insert created the record.
    pub created_record: bool,
}

/// Payload for `on_phrase_removed`.
#[derive(Debug, Clone)]
pub struct PhraseRemovedEvent {
    pub key: u64,
    pub phrase: String,
}

/// Payload for `on_record_removed`, fired when cleanup drops an emptied record.
#[derive(Debug, Clone)]
pub struct RecordRemovedEvent {
    pub key: u64,
}

/// Payload for `on_indexes_rebuilt`.
#[derive(Debug, Clone)]
pub struct IndexesRebuiltEvent {
    pub permutation_groups: Option<usize>,
    pub variation_groups: Option<usize>,
    pub registry_path: PathBuf,
}

/// Payload for `on_error`.
#[derive(Debug, Clone)]
pub struct ErrorEvent {
    pub message: String,
    pub error_code: String,
}
