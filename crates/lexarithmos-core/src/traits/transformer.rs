//! PhraseTransformer trait: phrase → key chain.
//!
//! The registry never derives keys itself. The analysis crate provides the
//! isopsephy implementation; tests and embedders may supply their own.

use crate::errors::TransformError;

/// Turns a phrase into its key chain: the primary key followed by its
/// repeated digit-sum reductions.
pub trait PhraseTransformer: Send + Sync {
    fn transform(&self, phrase: &str) -> Result<Vec<u64>, TransformError>;
}

impl<F> PhraseTransformer for F
where
    F: Fn(&str) -> Result<Vec<u64>, TransformError> + Send + Sync,
{
    fn transform(&self, phrase: &str) -> Result<Vec<u64>, TransformError> {
        self(phrase)
    }
}
