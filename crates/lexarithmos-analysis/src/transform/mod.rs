//! Phrase → key chain transformation (Greek isopsephy).
//!
//! The phrase is cleaned into uppercase words, each word is valued as the sum
//! of its letters, and the key is the sum over all words. The key chain is the
//! key followed by its digit-sum reductions.

pub mod alphabet;
pub mod clean;
pub mod reduction;

use lexarithmos_core::errors::TransformError;
use lexarithmos_core::traits::PhraseTransformer;

pub use alphabet::letter_value;
pub use clean::clean_message;
pub use reduction::{digit_sum, reduction_chain};

/// Transform `phrase` into its key chain, e.g. `"λόγος"` → `[373, 13, 4]`.
pub fn transform(phrase: &str) -> Result<Vec<u64>, TransformError> {
    let words = clean_message(phrase);
    if words.is_empty() {
        return Err(TransformError::EmptyMessage);
    }

    let mut key = 0u64;
    for word in &words {
        key = key.saturating_add(word_value(word)?);
    }
    Ok(reduction_chain(key))
}

/// Sum of the letter values of an already cleaned word.
pub fn word_value(word: &str) -> Result<u64, TransformError> {
    word.chars().try_fold(0u64, |acc, symbol| {
        letter_value(symbol)
            .map(|v| acc.saturating_add(v))
            .ok_or_else(|| TransformError::UnknownSymbol {
                symbol,
                word: word.to_string(),
            })
    })
}

/// [`PhraseTransformer`] backed by [`transform`]. The default for the runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct IsopsephyTransformer;

impl PhraseTransformer for IsopsephyTransformer {
    fn transform(&self, phrase: &str) -> Result<Vec<u64>, TransformError> {
        transform(phrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logos_is_373() {
        assert_eq!(transform("ΛΟΓΟΣ").unwrap(), vec![373, 13, 4]);
        assert_eq!(transform("λόγος").unwrap(), vec![373, 13, 4]);
    }

    #[test]
    fn words_are_summed() {
        // ΑΒ = 3, ΓΔ = 7
        assert_eq!(transform("αβ γδ").unwrap(), vec![10, 1]);
    }

    #[test]
    fn empty_message_is_rejected() {
        assert!(matches!(transform(" ... "), Err(TransformError::EmptyMessage)));
    }

    #[test]
    fn latin_letters_are_unknown_symbols() {
        match transform("ΛΟΓΟΣ logos") {
            Err(TransformError::UnknownSymbol { symbol, word }) => {
                assert_eq!(symbol, 'L');
                assert_eq!(word, "LOGOS");
            }
            other => panic!("expected UnknownSymbol, got {other:?}"),
        }
    }

    #[test]
    fn class_zero_marks_are_unknown_symbols() {
        match transform("ΛΟ\u{034F}ΓΟΣ") {
            Err(TransformError::UnknownSymbol { symbol, .. }) => assert_eq!(symbol, '\u{034F}'),
            other => panic!("expected UnknownSymbol, got {other:?}"),
        }
    }

    #[test]
    fn transformer_trait_delegates() {
        let t: &dyn PhraseTransformer = &IsopsephyTransformer;
        assert_eq!(t.transform("Ω").unwrap(), vec![800, 8]);
    }
}
