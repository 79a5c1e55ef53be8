//! Phrase transformation errors.

use super::error_code::{self, LexErrorCode};

/// Errors raised while turning a phrase into its key chain.
#[derive(Debug, thiserror::Error)]
pub enum TransformError {
    #[error("Phrase contains no letters after cleaning")]
    EmptyMessage,

    #[error("Symbol '{symbol}' in word '{word}' has no numeric value")]
    UnknownSymbol { symbol: char, word: String },
}

impl LexErrorCode for TransformError {
    fn error_code(&self) -> &'static str {
        error_code::TRANSFORM_ERROR
    }
}
