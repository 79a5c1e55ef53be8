//! Variation index: keys related by digit patterns.
//!
//! For a base key `b` the related candidates are:
//! - `b` itself;
//! - symmetrical: `b` followed by its digit reversal (`12` → `1221`);
//! - repetitive: `b` repeated `k >= 2` times, up to the longest key length;
//! - balanced: for a two-digit `b` with distinct digits `x`, `y`, the runs
//!   `x…xy…y` and `y…yx…x` for every run length up to half the longest key.
//!
//! Candidates that are not canonical decimals (leading zero) or overflow `u64`
//! can never be registry keys and are dropped.

use lexarithmos_core::types::{FxHashSet, PhraseMap, RegistrySnapshot, VariationEntry, VariationIndex};

/// Build the variation index for `snapshot`.
///
/// Only groups with at least two members are emitted. A key consumed by an
/// earlier (smaller) representative is neither a representative nor a member
/// of any later group.
pub fn build_variation_index(snapshot: &RegistrySnapshot) -> VariationIndex {
    let max_len = snapshot.max_key_len();
    let mut consumed: FxHashSet<u64> = FxHashSet::default();
    let mut index = VariationIndex::new();

    for (key, record) in snapshot.iter() {
        if consumed.contains(&key) {
            continue;
        }
        consumed.insert(key);

        let mut variations = PhraseMap::new();
        variations.insert(key, record.phrase_list());

        for candidate in candidates(key, max_len) {
            if candidate == key || consumed.contains(&candidate) {
                continue;
            }
            if let Some(related) = snapshot.get(candidate) {
                variations.insert(candidate, related.phrase_list());
                consumed.insert(candidate);
            }
        }

        if variations.len() > 1 {
            index.insert(key, VariationEntry { variations });
        }
    }

    tracing::debug!(
        keys = snapshot.len(),
        groups = index.len(),
        "variation index built"
    );
    index
}

/// Every related candidate of `key`, excluding `key` itself. May contain duplicates.
fn candidates(key: u64, max_len: usize) -> Vec<u64> {
    let base = key.to_string();
    let mut out = Vec::new();
    out.extend(symmetrical(&base));
    out.extend(repetitions(&base, max_len));
    out.extend(balanced(&base, max_len));
    out
}

fn symmetrical(base: &str) -> Option<u64> {
    let mirrored: String = base.chars().chain(base.chars().rev()).collect();
    parse_canonical(&mirrored)
}

fn repetitions(base: &str, max_len: usize) -> impl Iterator<Item = u64> + '_ {
    let times = max_len / base.len();
    (2..=times).filter_map(move |k| parse_canonical(&base.repeat(k)))
}

fn balanced(base: &str, max_len: usize) -> Vec<u64> {
    let bytes = base.as_bytes();
    let [first, second] = bytes else {
        return Vec::new();
    };
    if first == second {
        return Vec::new();
    }
    let (first, second) = (char::from(*first), char::from(*second));

    let mut out = Vec::new();
    for run in 1..=max_len / 2 {
        let forward = run_pair(first, second, run);
        let backward = run_pair(second, first, run);
        out.extend(parse_canonical(&forward));
        out.extend(parse_canonical(&backward));
    }
    out
}

fn run_pair(head: char, tail: char, run: usize) -> String {
    std::iter::repeat(head)
        .take(run)
        .chain(std::iter::repeat(tail).take(run))
        .collect()
}

/// Parse `digits` as a registry key, rejecting leading zeros and overflow.
fn parse_canonical(digits: &str) -> Option<u64> {
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    digits.parse().ok()
}
