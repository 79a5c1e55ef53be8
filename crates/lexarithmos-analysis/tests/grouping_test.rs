//! Grouping over registry snapshots: scenarios and partition properties.

use std::collections::BTreeSet;

use proptest::prelude::*;

use lexarithmos_analysis::{build_permutation_index, build_variation_index, transform};
use lexarithmos_core::types::{Record, RegistrySnapshot};

fn snapshot_of(keys: &[u64]) -> RegistrySnapshot {
    keys.iter()
        .map(|&k| (k, Record::new(vec![k % 10], format!("ΦΡΑΣΗ {k}"))))
        .collect()
}

fn sorted_digits(key: u64) -> Vec<u8> {
    let mut digits = key.to_string().into_bytes();
    digits.sort_unstable();
    digits
}

#[test]
fn test_permutation_pair_has_single_owner() {
    let index = build_permutation_index(&snapshot_of(&[12, 21]));

    assert_eq!(index.representatives().collect::<Vec<_>>(), vec![12]);
    let entry = index.get(12).unwrap();
    assert!(entry.permutations.contains_key(&21));
    assert!(!entry.permutations.contains_key(&12));
}

#[test]
fn test_unrelated_keys_get_empty_permutation_maps() {
    let index = build_permutation_index(&snapshot_of(&[7, 353]));
    assert_eq!(index.len(), 2);
    assert!(index.iter().all(|(_, e)| e.permutations.is_empty()));
}

#[test]
fn test_variation_group_collects_symmetry_and_repetition() {
    let index = build_variation_index(&snapshot_of(&[12, 1212, 1221]));

    assert_eq!(index.representatives().collect::<Vec<_>>(), vec![12]);
    let members: Vec<u64> = index.get(12).unwrap().variations.keys().copied().collect();
    assert_eq!(members, vec![12, 1212, 1221]);
}

#[test]
fn test_artifacts_serialize_with_decimal_string_keys() {
    let snapshot = snapshot_of(&[12, 21, 1221]);
    let permutations = serde_json::to_value(build_permutation_index(&snapshot)).unwrap();
    let variations = serde_json::to_value(build_variation_index(&snapshot)).unwrap();

    assert_eq!(permutations["12"]["subdivisions"], serde_json::json!([2]));
    assert_eq!(
        permutations["12"]["permutations"]["21"],
        serde_json::json!(["ΦΡΑΣΗ 21"])
    );
    assert!(permutations.get("21").is_none());

    let group = variations["12"]["variations"].as_object().unwrap();
    assert_eq!(group.keys().cloned().collect::<Vec<_>>(), vec!["12", "1221", "21"]);
}

#[test]
fn test_transformed_phrases_group_like_their_keys() {
    // ΙΒ = 12, ΚΑ = 21
    let chain_12 = transform("ιβ").unwrap();
    let chain_21 = transform("κα").unwrap();
    let snapshot: RegistrySnapshot = [
        (chain_12[0], Record::new(chain_12[1..].to_vec(), "ΙΒ")),
        (chain_21[0], Record::new(chain_21[1..].to_vec(), "ΚΑ")),
    ]
    .into_iter()
    .collect();

    let index = build_permutation_index(&snapshot);
    assert_eq!(index.get(12).unwrap().subdivisions, vec![3]);
    assert_eq!(
        index.get(12).unwrap().permutations.get(&21),
        Some(&vec!["ΚΑ".to_string()])
    );
}

fn keys() -> impl Strategy<Value = BTreeSet<u64>> {
    prop::collection::btree_set(
        prop_oneof![1u64..100, 100u64..10_000, Just(1221u64), Just(1212u64)],
        0..40,
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_permutations_partition_keys(keys in keys()) {
        let keys: Vec<u64> = keys.into_iter().collect();
        let index = build_permutation_index(&snapshot_of(&keys));

        let mut seen = Vec::new();
        for (rep, entry) in index.iter() {
            prop_assert!(!entry.permutations.contains_key(&rep));
            seen.push(rep);
            for &member in entry.permutations.keys() {
                prop_assert!(member > rep);
                prop_assert_eq!(sorted_digits(member), sorted_digits(rep));
                seen.push(member);
            }
        }
        seen.sort_unstable();
        prop_assert_eq!(seen, keys);
    }

    #[test]
    fn prop_variation_groups_are_disjoint(keys in keys()) {
        let keys: Vec<u64> = keys.into_iter().collect();
        let index = build_variation_index(&snapshot_of(&keys));

        let mut seen = BTreeSet::new();
        for (rep, entry) in index.iter() {
            prop_assert!(entry.variations.len() >= 2);
            prop_assert!(entry.variations.contains_key(&rep));
            prop_assert_eq!(entry.variations.keys().next().copied(), Some(rep));
            for &member in entry.variations.keys() {
                prop_assert!(keys.binary_search(&member).is_ok());
                prop_assert!(seen.insert(member), "key {} appears in two groups", member);
            }
        }
    }
}
