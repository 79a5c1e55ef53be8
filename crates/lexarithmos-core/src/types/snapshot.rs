//! Immutable, numerically ordered view of the registry.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::record::{decimal_len, Record};

/// A materialized copy of the registry mapping.
///
/// Keys are `u64`, so iteration order is ascending numeric order by
/// construction and serialization emits decimal-string keys in that order.
/// The groupers consume this type and never mutate it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrySnapshot {
    records: BTreeMap<u64, Record>,
}

impl RegistrySnapshot {
    pub fn new(records: BTreeMap<u64, Record>) -> Self {
        Self { records }
    }

    pub fn get(&self, key: u64) -> Option<&Record> {
        self.records.get(&key)
    }

    pub fn contains(&self, key: u64) -> bool {
        self.records.contains_key(&key)
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

    pub fn iter(&self) -> impl Iterator<Item = (u64, &Record)> + '_ {
        self.records.iter().map(|(k, r)| (*k, r))
    }

    /// Length of the longest key in decimal digits, or 0 when empty.
    pub fn max_key_len(&self) -> usize {
        self.records.keys().map(|k| decimal_len(*k)).max().unwrap_or(0)
    }

    /// Consume the snapshot, returning the underlying mapping.
    pub fn into_records(self) -> BTreeMap<u64, Record> {
        self.records
    }
}

impl FromIterator<(u64, Record)> for RegistrySnapshot {
    fn from_iter<I: IntoIterator<Item = (u64, Record)>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}
