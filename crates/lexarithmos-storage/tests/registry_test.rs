//! Registry mutation tests: upsert/delete semantics, validation, and error cases.

use lexarithmos_core::errors::RegistryError;
use lexarithmos_storage::{read_snapshot, DeleteOutcome, RegistryStore, UpsertOutcome};

fn open_temp() -> (tempfile::TempDir, RegistryStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = RegistryStore::open(dir.path().join("Data").join("number_file.json"));
    (dir, store)
}

#[test]
fn test_upsert_into_empty_registry() {
    let (_dir, mut store) = open_temp();

    let outcome = store.upsert("ΛΟΓΟΣ", &[353, 11, 2]).unwrap();
    assert_eq!(outcome, UpsertOutcome::Created);

    let record = store.get(353).unwrap();
    assert_eq!(record.phrase_list(), vec!["ΛΟΓΟΣ".to_string()]);
    assert_eq!(record.subdivisions, vec![11, 2]);

    // The durable copy matches.
    let snapshot = read_snapshot(store.path()).unwrap();
    assert_eq!(snapshot.get(353), Some(record));
}

#[test]
fn test_repeated_upsert_is_idempotent() {
    let (_dir, mut store) = open_temp();
    store.upsert("ΛΟΓΟΣ", &[353, 11, 2]).unwrap();
    let second = store.upsert("ΛΟΓΟΣ", &[353, 11, 2]).unwrap();
    let third = store.upsert("ΛΟΓΟΣ", &[353, 11, 2]).unwrap();

    assert_eq!(second, UpsertOutcome::AlreadyPresent);
    assert_eq!(third, UpsertOutcome::AlreadyPresent);
    assert_eq!(store.get(353).unwrap().phrases.len(), 1);
}

#[test]
fn test_existing_key_keeps_first_subdivisions_and_sorts_phrases() {
    let (_dir, mut store) = open_temp();
    store.upsert("ΩΜΕΓΑ", &[353, 11, 2]).unwrap();
    let outcome = store.upsert("ΑΛΦΑ", &[353, 99, 18, 9]).unwrap();

    assert_eq!(outcome, UpsertOutcome::PhraseAdded);
    let record = store.get(353).unwrap();
    assert_eq!(record.subdivisions, vec![11, 2]);
    assert_eq!(
        record.phrase_list(),
        vec!["ΑΛΦΑ".to_string(), "ΩΜΕΓΑ".to_string()]
    );
}

#[test]
fn test_delete_unknown_key_leaves_registry_untouched() {
    let (_dir, mut store) = open_temp();

    let err = store.delete("X", 99).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownKey { key: 99 }));
    assert!(store.is_empty());
    // No persist was attempted.
    assert!(!store.path().exists());
}

#[test]
fn test_delete_unknown_phrase() {
    let (_dir, mut store) = open_temp();
    store.upsert("ΛΟΓΟΣ", &[353, 11, 2]).unwrap();
    let before = std::fs::read_to_string(store.path()).unwrap();

    let err = store.delete("ΑΛΛΟ", 353).unwrap_err();
    assert!(matches!(err, RegistryError::UnknownPhrase { key: 353, .. }));
    assert_eq!(store.get(353).unwrap().phrases.len(), 1);
    assert_eq!(std::fs::read_to_string(store.path()).unwrap(), before);
}

#[test]
fn test_delete_last_phrase_removes_record() {
    let (_dir, mut store) = open_temp();
    store.upsert("ΛΟΓΟΣ", &[353, 11, 2]).unwrap();
    store.upsert("ΑΒΓ", &[6]).unwrap();

    let outcome = store.delete("ΛΟΓΟΣ", 353).unwrap();
    assert_eq!(outcome, DeleteOutcome::RecordRemoved);
    assert!(store.get(353).is_none());

    let snapshot = read_snapshot(store.path()).unwrap();
    assert!(!snapshot.contains(353));
    assert!(snapshot.contains(6));
}

#[test]
fn test_delete_one_of_many_phrases() {
    let (_dir, mut store) = open_temp();
    store.upsert("Α", &[1]).unwrap();
    // Surrounding whitespace is trimmed, so this is the same phrase.
    assert_eq!(store.upsert(" Α ", &[1]).unwrap(), UpsertOutcome::AlreadyPresent);
    store.upsert("Β", &[1]).unwrap();

    assert_eq!(store.delete("Β", 1).unwrap(), DeleteOutcome::PhraseRemoved);
    assert!(store.get(1).unwrap().contains("Α"));
}

#[test]
fn test_delete_then_upsert_restores_original_subdivisions() {
    let (_dir, mut store) = open_temp();
    store.upsert("Α", &[353, 11, 2]).unwrap();
    store.upsert("Β", &[353, 11, 2]).unwrap();

    store.delete("Α", 353).unwrap();
    store.upsert("Α", &[353, 7]).unwrap();
    assert_eq!(store.get(353).unwrap().subdivisions, vec![11, 2]);
}

#[test]
fn test_delete_then_upsert_after_removal_resets_subdivisions() {
    let (_dir, mut store) = open_temp();
    store.upsert("Α", &[353, 11, 2]).unwrap();

    store.delete("Α", 353).unwrap();
    assert!(store.get(353).is_none());
    store.upsert("Α", &[353, 7]).unwrap();
    assert_eq!(store.get(353).unwrap().subdivisions, vec![7]);
}

#[test]
fn test_persistence_failure_keeps_in_memory_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let blocker = dir.path().join("blocker");
    std::fs::write(&blocker, "not a directory").unwrap();
    let mut store = RegistryStore::open(blocker.join("number_file.json"));

    let err = store.upsert("ΛΟΓΟΣ", &[353, 11, 2]).unwrap_err();
    assert!(err.is_persistence_failure());
    // The in-memory state is ahead of the durable one.
    assert!(store.get(353).unwrap().contains("ΛΟΓΟΣ"));
}
