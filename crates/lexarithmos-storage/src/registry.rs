//! RegistryStore: the owned key → record mapping and its mutation discipline.
//!
//! Every mutation validates first, applies in memory, drops emptied records,
//! and then re-persists the whole registry atomically before returning.

use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use lexarithmos_core::errors::RegistryError;
use lexarithmos_core::types::{Record, RegistrySnapshot};

use crate::artifact::{load_registry, write_json_atomic};

/// What an upsert did to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The key was new; a record was created.
    Created,
    /// The phrase joined an existing record.
    PhraseAdded,
    /// The phrase was already stored under the key.
    AlreadyPresent,
}

/// What a delete did to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The phrase was removed; the record still has other phrases.
    PhraseRemoved,
    /// The phrase was the last one; cleanup removed the record.
    RecordRemoved,
}

/// The word-number registry backed by a JSON artifact.
///
/// Single-writer: mutations take `&mut self` and there is no internal locking.
#[derive(Debug)]
pub struct RegistryStore {
    path: PathBuf,
    records: BTreeMap<u64, Record>,
}

impl RegistryStore {
    /// Open the registry at `path`.
    ///
    /// Never fails: a missing or malformed artifact yields an empty registry
    /// (with a warning logged).
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = load_registry(&path);
        Self { path, records }
    }

    /// Path of the registry artifact.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn get(&self, key: u64) -> Option<&Record> {
        self.records.get(&key)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Keys in ascending numeric order.
    pub fn keys(&self) -> impl Iterator<Item = u64> + '_ {
        self.records.keys().copied()
    }

    /// Materialize a copy of the in-memory registry.
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot::new(self.records.clone())
    }

    /// Insert `phrase` under the first element of `key_chain`.
    ///
    /// A new key stores `key_chain[1..]` as its subdivisions. An existing key
    /// keeps its original subdivisions and only gains the phrase; re-inserting
    /// a stored phrase is a no-op that still re-persists.
    pub fn upsert(&mut self, phrase: &str, key_chain: &[u64]) -> Result<UpsertOutcome, RegistryError> {
        let phrase = validate_phrase(phrase)?;
        let (&key, subdivisions) =
            key_chain
                .split_first()
                .ok_or_else(|| RegistryError::InvalidNumbers {
                    reason: "number list cannot be empty".to_string(),
                })?;

        let outcome = match self.records.entry(key) {
            Entry::Vacant(slot) => {
                slot.insert(Record::new(subdivisions.to_vec(), phrase));
                UpsertOutcome::Created
            }
            Entry::Occupied(mut slot) => {
                if slot.get_mut().phrases.insert(phrase.to_string()) {
                    UpsertOutcome::PhraseAdded
                } else {
                    UpsertOutcome::AlreadyPresent
                }
            }
        };
        tracing::debug!(key, phrase, ?outcome, "upsert applied");

        self.commit()?;
        Ok(outcome)
    }

    /// Remove `phrase` from the record stored under `key`.
    ///
    /// Fails with `UnknownKey` / `UnknownPhrase` before touching any state.
    pub fn delete(&mut self, phrase: &str, key: u64) -> Result<DeleteOutcome, RegistryError> {
        let phrase = validate_phrase(phrase)?;
        let record = self
            .records
            .get_mut(&key)
            .ok_or(RegistryError::UnknownKey { key })?;

        if !record.phrases.remove(phrase) {
            return Err(RegistryError::UnknownPhrase {
                phrase: phrase.to_string(),
                key,
            });
        }
        let outcome = if record.is_empty() {
            DeleteOutcome::RecordRemoved
        } else {
            DeleteOutcome::PhraseRemoved
        };
        tracing::debug!(key, phrase, ?outcome, "delete applied");

        self.commit()?;
        Ok(outcome)
    }

    /// Write the full registry to its artifact.
    pub fn persist(&self) -> Result<(), RegistryError> {
        write_json_atomic(&self.path, &self.records).map_err(|e| {
            tracing::error!(
                path = %self.path.display(),
                error = %e,
                "registry persist failed, durable copy is stale"
            );
            RegistryError::PersistenceFailure {
                path: self.path.display().to_string(),
                message: e.to_string(),
            }
        })
    }

    /// Cleanup followed by a full persist.
    fn commit(&mut self) -> Result<(), RegistryError> {
        let removed = self.cleanup();
        if !removed.is_empty() {
            tracing::debug!(?removed, "cleanup dropped emptied records");
        }
        self.persist()
    }

    /// Drop every record whose phrase set is empty, returning the dropped keys.
    fn cleanup(&mut self) -> Vec<u64> {
        let emptied: Vec<u64> = self
            .records
            .iter()
            .filter(|(_, record)| record.is_empty())
            .map(|(key, _)| *key)
            .collect();
        for key in &emptied {
            self.records.remove(key);
        }
        emptied
    }
}

/// Trim `phrase`, rejecting it when nothing is left.
fn validate_phrase(phrase: &str) -> Result<&str, RegistryError> {
    let trimmed = phrase.trim();
    if trimmed.is_empty() {
        return Err(RegistryError::InvalidPhrase);
    }
    Ok(trimmed)
}
