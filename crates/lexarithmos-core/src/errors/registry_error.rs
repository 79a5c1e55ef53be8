//! Registry store errors.

use std::num::IntErrorKind;

use super::error_code::{self, LexErrorCode};

/// Errors raised by registry mutations.
///
/// Validation variants are returned before any mutation is attempted.
/// `PersistenceFailure` is returned after the in-memory mutation has been
/// applied, so the durable copy may lag behind the in-memory state.
#[derive(Debug, thiserror::Error)]
pub enum RegistryError {
    #[error("Phrase must be a non-empty string")]
    InvalidPhrase,

    #[error("Invalid key chain: {reason}")]
    InvalidNumbers { reason: String },

    #[error("Key {key} does not exist")]
    UnknownKey { key: u64 },

    #[error("Phrase '{phrase}' does not exist under key {key}")]
    UnknownPhrase { phrase: String, key: u64 },

    #[error("Failed to persist registry to {path}: {message}")]
    PersistenceFailure { path: String, message: String },
}

impl RegistryError {
    /// True when the error was raised after the in-memory state changed.
    pub fn is_persistence_failure(&self) -> bool {
        matches!(self, Self::PersistenceFailure { .. })
    }
}

impl LexErrorCode for RegistryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidPhrase => error_code::INVALID_PHRASE,
            Self::InvalidNumbers { .. } => error_code::INVALID_NUMBERS,
            Self::UnknownKey { .. } => error_code::UNKNOWN_KEY,
            Self::UnknownPhrase { .. } => error_code::UNKNOWN_PHRASE,
            Self::PersistenceFailure { .. } => error_code::PERSISTENCE_FAILURE,
        }
    }
}

/// Parse a textual key chain (e.g. CLI arguments) into integers.
///
/// Fails with `InvalidNumbers` when the chain is empty, a token is not a
/// non-negative integer, or a token does not fit in a `u64`.
pub fn parse_key_chain<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<u64>, RegistryError> {
    if tokens.is_empty() {
        return Err(RegistryError::InvalidNumbers {
            reason: "number list cannot be empty".to_string(),
        });
    }
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref().trim();
            token.parse::<u64>().map_err(|e| {
                let reason = match e.kind() {
                    IntErrorKind::PosOverflow => format!("'{token}' is out of range"),
                    _ => format!("'{token}' is not an integer"),
                };
                RegistryError::InvalidNumbers { reason }
            })
        })
        .collect()
}
