//! RegistryEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing registry mutations and index rebuilds.
///
/// All methods have no-op default implementations, so handlers only need
/// to override the events they care about.
pub trait RegistryEventHandler: Send + Sync {
    // ---- Registry ----
    fn on_phrase_inserted(&self, _event: &PhraseInsertedEvent) {}
    fn on_phrase_removed(&self, _event: &PhraseRemovedEvent) {}
    fn on_record_removed(&self, _event: &RecordRemovedEvent) {}

    // ---- Indexes ----
    fn on_indexes_rebuilt(&self, _event: &IndexesRebuiltEvent) {}

    // ---- Errors ----
    fn on_error(&self, _event: &ErrorEvent) {}
}
