//! Grouping of registry keys into disjoint, deterministic clusters.
//!
//! Both groupers walk an immutable snapshot in ascending key order and keep a
//! separate "consumed" set, so the smallest key of every cluster owns it.

pub mod permutations;
pub mod variations;

pub use permutations::build_permutation_index;
pub use variations::build_variation_index;
