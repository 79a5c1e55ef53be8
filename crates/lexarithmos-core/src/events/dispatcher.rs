//! EventDispatcher: synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::RegistryEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
#[derive(Default)]
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn RegistryEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn RegistryEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// A panicking handler is logged and does not stop later handlers.
    fn emit<F: Fn(&dyn RegistryEventHandler)>(&self, event_name: &'static str, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!(event = event_name, "event handler panicked");
            }
        }
    }

    // ---- Registry ----
    pub fn emit_phrase_inserted(&self, event: &PhraseInsertedEvent) {
        self.emit("phrase_inserted", |h| h.on_phrase_inserted(event));
    }

    pub fn emit_phrase_removed(&self, event: &PhraseRemovedEvent) {
        self.emit("phrase_removed", |h| h.on_phrase_removed(event));
    }

    pub fn emit_record_removed(&self, event: &RecordRemovedEvent) {
        self.emit("record_removed", |h| h.on_record_removed(event));
    }

    // ---- Indexes ----
    pub fn emit_indexes_rebuilt(&self, event: &IndexesRebuiltEvent) {
        self.emit("indexes_rebuilt", |h| h.on_indexes_rebuilt(event));
    }

    // ---- Errors ----
    pub fn emit_error(&self, event: &ErrorEvent) {
        self.emit("error", |h| h.on_error(event));
    }
}
