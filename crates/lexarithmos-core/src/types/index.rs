//! Derived index artifacts produced by the groupers.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Related key → its phrases, ascending by numeric key.
pub type PhraseMap = BTreeMap<u64, Vec<String>>;

/// Entry of the permutation index for one representative key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PermutationEntry {
    pub subdivisions: Vec<u64>,
    /// Other registry keys whose digits are a rearrangement of the representative's.
    pub permutations: PhraseMap,
}

/// Entry of the variation index for one representative key.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VariationEntry {
    /// All members of the group, the representative included.
    pub variations: PhraseMap,
}

/// Representative key → permutation entry.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermutationIndex {
    entries: BTreeMap<u64, PermutationEntry>,
}

/// Representative key → variation entry. Only groups of two or more members appear.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariationIndex {
    entries: BTreeMap<u64, VariationEntry>,
}

macro_rules! index_accessors {
    ($index:ty, $entry:ty) => {
        impl $index {
            pub fn new() -> Self {
                Self::default()
            }

            pub fn insert(&mut self, representative: u64, entry: $entry) {
                self.entries.insert(representative, entry);
            }

            pub fn get(&self, representative: u64) -> Option<&$entry> {
                self.entries.get(&representative)
            }

            pub fn contains(&self, representative: u64) -> bool {
                self.entries.contains_key(&representative)
            }

            pub fn len(&self) -> usize {
                self.entries.len()
            }

            pub fn is_empty(&self) -> bool {
                self.entries.is_empty()
            }

            /// Representatives in ascending numeric order.
            pub fn representatives(&self) -> impl Iterator<Item = u64> + '_ {
                self.entries.keys().copied()
            }

            pub fn iter(&self) -> impl Iterator<Item = (u64, &$entry)> + '_ {
                self.entries.iter().map(|(k, e)| (*k, e))
            }
        }
    };
}

index_accessors!(PermutationIndex, PermutationEntry);
index_accessors!(VariationIndex, VariationEntry);
