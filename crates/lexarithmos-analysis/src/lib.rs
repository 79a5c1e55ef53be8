//! # lexarithmos-analysis
//!
//! Read-only analyses over the registry:
//! - `grouping`: permutation and variation indexes built from a snapshot.
//! - `transform`: the phrase → key chain transformer (Greek isopsephy).

pub mod grouping;
pub mod transform;

pub use grouping::{build_permutation_index, build_variation_index};
pub use transform::{transform, IsopsephyTransformer};
