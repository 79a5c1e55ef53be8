//! A single registry record: the phrases sharing one word number.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// One entry of the registry.
///
/// `phrases` is a `BTreeSet`, so it is always deduplicated and serialized as a
/// lexicographically sorted sequence. `subdivisions` is opaque auxiliary data
/// and is never re-derived from the key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Record {
    #[serde(default, alias = "sub-divisions")]
    pub subdivisions: Vec<u64>,
    #[serde(alias = "key-phrases")]
    pub phrases: BTreeSet<String>,
}

impl Record {
    /// Create a record holding a single phrase.
    pub fn new(subdivisions: Vec<u64>, phrase: impl Into<String>) -> Self {
        let mut phrases = BTreeSet::new();
        phrases.insert(phrase.into());
        Self {
            subdivisions,
            phrases,
        }
    }

    /// A record with no phrases is dropped on the next cleanup.
    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn contains(&self, phrase: &str) -> bool {
        self.phrases.contains(phrase)
    }

    /// Phrases in sorted order, as written to the index artifacts.
    pub fn phrase_list(&self) -> Vec<String> {
        self.phrases.iter().cloned().collect()
    }
}

/// Number of decimal digits in `key` (`0` has one digit).
pub fn decimal_len(key: u64) -> usize {
    key.checked_ilog10().map_or(1, |d| d as usize + 1)
}
