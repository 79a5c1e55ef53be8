//! Index generation errors.

use super::error_code::{self, LexErrorCode};

/// Errors raised while regenerating the permutation or variation index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// The registry artifact is missing or cannot be parsed.
    #[error("Registry artifact {path} is missing or malformed: {message}")]
    MalformedArtifact { path: String, message: String },

    /// The index artifact could not be written.
    #[error("Failed to write index artifact {path}: {message}")]
    PersistenceFailure { path: String, message: String },
}

impl LexErrorCode for IndexError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedArtifact { .. } => error_code::MALFORMED_ARTIFACT,
            Self::PersistenceFailure { .. } => error_code::PERSISTENCE_FAILURE,
        }
    }
}
