//! Tests for the Lexarithmos error handling system.

use lexarithmos_core::errors::error_code::LexErrorCode;
use lexarithmos_core::errors::*;

#[test]
fn test_registry_error_codes() {
    assert_eq!(RegistryError::InvalidPhrase.error_code(), "INVALID_PHRASE");
    assert_eq!(
        RegistryError::InvalidNumbers { reason: "empty".into() }.error_code(),
        "INVALID_NUMBERS"
    );
    assert_eq!(RegistryError::UnknownKey { key: 99 }.error_code(), "UNKNOWN_KEY");
    assert_eq!(
        RegistryError::UnknownPhrase { phrase: "X".into(), key: 1 }.error_code(),
        "UNKNOWN_PHRASE"
    );
    let persist = RegistryError::PersistenceFailure {
        path: "/tmp/x.json".into(),
        message: "disk full".into(),
    };
    assert_eq!(persist.error_code(), "PERSISTENCE_FAILURE");
    assert!(persist.is_persistence_failure());
    assert!(!RegistryError::InvalidPhrase.is_persistence_failure());
}

#[test]
fn test_index_error_codes() {
    let malformed = IndexError::MalformedArtifact {
        path: "Data/number_file.json".into(),
        message: "not found".into(),
    };
    assert_eq!(malformed.error_code(), "MALFORMED_ARTIFACT");
    let write = IndexError::PersistenceFailure {
        path: "Data/variations_file.json".into(),
        message: "read-only".into(),
    };
    assert_eq!(write.error_code(), "PERSISTENCE_FAILURE");
}

#[test]
fn test_from_conversions_keep_codes() {
    let top: LexarithmosError = RegistryError::UnknownKey { key: 99 }.into();
    assert!(matches!(top, LexarithmosError::Registry(RegistryError::UnknownKey { key: 99 })));
    assert_eq!(top.error_code(), "UNKNOWN_KEY");

    let top: LexarithmosError = TransformError::EmptyMessage.into();
    assert_eq!(top.error_code(), "TRANSFORM_ERROR");

    let top: LexarithmosError = ConfigError::FileNotFound { path: "/tmp".into() }.into();
    assert_eq!(top.error_code(), "CONFIG_ERROR");
}

#[test]
fn test_coded_string_format() {
    let err = RegistryError::UnknownKey { key: 99 };
    assert_eq!(err.coded_string(), "[UNKNOWN_KEY] Key 99 does not exist");

    let err = TransformError::UnknownSymbol {
        symbol: 'Q',
        word: "QΑ".into(),
    };
    assert!(err.coded_string().starts_with("[TRANSFORM_ERROR] Symbol 'Q'"));
}
