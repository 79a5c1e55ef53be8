//! Permutation index: keys whose decimal digits are rearrangements of each other.
//!
//! Registry keys are canonical decimal numbers (no leading zero), so the
//! registry-resident digit permutations of a key are exactly the other keys
//! with the same digit multiset. A rearrangement starting with `0` would be a
//! shorter number with a different multiset and never matches.

use lexarithmos_core::types::{
    FxHashMap, FxHashSet, PermutationEntry, PermutationIndex, PhraseMap, RegistrySnapshot,
};

/// Count of each decimal digit in a key.
type DigitSignature = [u8; 10];

fn digit_signature(mut key: u64) -> DigitSignature {
    let mut counts = [0u8; 10];
    loop {
        counts[(key % 10) as usize] += 1;
        key /= 10;
        if key == 0 {
            return counts;
        }
    }
}

/// Build the permutation index for `snapshot`.
///
/// Every key lands in exactly one entry: either as a representative or inside
/// the `permutations` map of the first (smallest) key sharing its digits.
/// A key never lists itself.
pub fn build_permutation_index(snapshot: &RegistrySnapshot) -> PermutationIndex {
    let mut buckets: FxHashMap<DigitSignature, Vec<u64>> = FxHashMap::default();
    for key in snapshot.keys() {
        buckets.entry(digit_signature(key)).or_default().push(key);
    }

    let mut consumed: FxHashSet<u64> = FxHashSet::default();
    let mut index = PermutationIndex::new();

    for (key, record) in snapshot.iter() {
        if consumed.contains(&key) {
            continue;
        }

        let mut permutations = PhraseMap::new();
        let siblings = buckets
            .get(&digit_signature(key))
            .map(Vec::as_slice)
            .unwrap_or_default();
        for &candidate in siblings.iter().filter(|&&c| c != key) {
            if let Some(related) = snapshot.get(candidate) {
                permutations.insert(candidate, related.phrase_list());
                consumed.insert(candidate);
            }
        }

        index.insert(
            key,
            PermutationEntry {
                subdivisions: record.subdivisions.clone(),
                permutations,
            },
        );
    }

    tracing::debug!(
        keys = snapshot.len(),
        entries = index.len(),
        "permutation index built"
    );
    index
}
