//! Artifact location configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DATA_DIR, DEFAULT_PERMUTATIONS_FILE, DEFAULT_REGISTRY_FILE, DEFAULT_VARIATIONS_FILE,
};

/// Where the registry and index artifacts live.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding all artifacts. Default: `Data`.
    pub data_dir: Option<String>,
    /// Registry artifact file name. Default: `number_file.json`.
    pub registry_file: Option<String>,
    /// Permutation index file name. Default: `permutations_file.json`.
    pub permutations_file: Option<String>,
    /// Variation index file name. Default: `variations_file.json`.
    pub variations_file: Option<String>,
}

impl StorageConfig {
    pub fn effective_data_dir(&self) -> &str {
        self.data_dir.as_deref().unwrap_or(DEFAULT_DATA_DIR)
    }

    pub fn effective_registry_file(&self) -> &str {
        self.registry_file.as_deref().unwrap_or(DEFAULT_REGISTRY_FILE)
    }

    pub fn effective_permutations_file(&self) -> &str {
        self.permutations_file
            .as_deref()
            .unwrap_or(DEFAULT_PERMUTATIONS_FILE)
    }

    pub fn effective_variations_file(&self) -> &str {
        self.variations_file.as_deref().unwrap_or(DEFAULT_VARIATIONS_FILE)
    }

    /// Resolve the data directory against `root` (absolute paths win).
    pub fn data_path(&self, root: &Path) -> PathBuf {
        root.join(self.effective_data_dir())
    }

    pub fn registry_path(&self, root: &Path) -> PathBuf {
        self.data_path(root).join(self.effective_registry_file())
    }

    pub fn permutations_path(&self, root: &Path) -> PathBuf {
        self.data_path(root).join(self.effective_permutations_file())
    }

    pub fn variations_path(&self, root: &Path) -> PathBuf {
        self.data_path(root).join(self.effective_variations_file())
    }
}
