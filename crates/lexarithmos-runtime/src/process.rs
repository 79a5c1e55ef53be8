//! Phrase processing: transform, then evaluate, insert, or delete.

use lexarithmos_core::errors::{LexarithmosError, LexarithmosResult, RegistryError};
use lexarithmos_storage::{DeleteOutcome, UpsertOutcome};

use crate::indexes::IndexSummary;
use crate::runtime::LexarithmosRuntime;

/// What to do with a processed phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Compute the key chain only.
    Evaluate,
    /// Store the phrase under its key.
    Insert,
    /// Remove the phrase from its key.
    Delete,
}

/// Registry change made by [`LexarithmosRuntime::process`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Inserted(UpsertOutcome),
    Deleted(DeleteOutcome),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Primary key followed by its digit-sum reductions.
    pub key_chain: Vec<u64>,
    /// `None` for [`Action::Evaluate`].
    pub change: Option<Change>,
    /// Set when the indexes were regenerated after the change.
    pub indexes: Option<IndexSummary>,
}

impl ProcessOutcome {
    pub fn key(&self) -> u64 {
        self.key_chain.first().copied().unwrap_or_default()
    }
}

impl LexarithmosRuntime {
    /// Transform `phrase` and apply `action` to the registry.
    ///
    /// After a successful insert or delete the enabled indexes are regenerated
    /// when auto refresh is on. An index failure is returned as an error even
    /// though the registry change itself has been persisted.
    pub fn process(&mut self, phrase: &str, action: Action) -> LexarithmosResult<ProcessOutcome> {
        let key_chain = self.key_chain_of(phrase)?;
        let phrase = phrase.trim();

        let change = match action {
            Action::Evaluate => None,
            Action::Insert => Some(Change::Inserted(self.upsert(phrase, &key_chain)?)),
            Action::Delete => Some(Change::Deleted(self.delete(phrase, key_chain[0])?)),
        };
        tracing::info!(phrase, key = key_chain[0], ?action, "phrase processed");

        let indexes = match change {
            Some(_) => self.refresh_if_enabled()?,
            None => None,
        };
        Ok(ProcessOutcome {
            key_chain,
            change,
            indexes,
        })
    }

    /// Key chain of `phrase` via the configured transformer. Never empty.
    pub fn key_chain_of(&self, phrase: &str) -> LexarithmosResult<Vec<u64>> {
        let result = validate_phrase(phrase).and_then(|phrase| {
            let chain = self.transformer.transform(phrase)?;
            if chain.is_empty() {
                return Err(RegistryError::InvalidNumbers {
                    reason: format!("transformer produced no key for '{phrase}'"),
                }
                .into());
            }
            Ok(chain)
        });
        self.report(result)
    }
}

fn validate_phrase(phrase: &str) -> LexarithmosResult<&str> {
    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return Err(LexarithmosError::from(RegistryError::InvalidPhrase));
    }
    Ok(trimmed)
}
