//! Trait seams between the registry and its collaborators.

pub mod transformer;

pub use transformer::PhraseTransformer;
