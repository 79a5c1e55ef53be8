//! Derived index configuration.

use serde::{Deserialize, Serialize};

/// Controls regeneration of the permutation and variation artifacts.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IndexConfig {
    /// Rebuild indexes after every successful mutation. Default: true.
    pub auto_refresh: Option<bool>,
    /// Build the permutation index. Default: true.
    pub permutations: Option<bool>,
    /// Build the variation index. Default: true.
    pub variations: Option<bool>,
}

impl IndexConfig {
    pub fn effective_auto_refresh(&self) -> bool {
        self.auto_refresh.unwrap_or(true)
    }

    pub fn effective_permutations(&self) -> bool {
        self.permutations.unwrap_or(true)
    }

    pub fn effective_variations(&self) -> bool {
        self.variations.unwrap_or(true)
    }
}
