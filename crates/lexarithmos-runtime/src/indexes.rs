//! Index regeneration: registry artifact → permutation and variation artifacts.

use std::path::Path;

use lexarithmos_analysis::{build_permutation_index, build_variation_index};
use lexarithmos_core::errors::{IndexError, LexarithmosResult};
use lexarithmos_core::events::types::IndexesRebuiltEvent;
use lexarithmos_storage::{read_snapshot, write_json_atomic};

use crate::runtime::LexarithmosRuntime;

/// Group counts written by one regeneration. `None` means the index is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IndexSummary {
    pub permutation_groups: Option<usize>,
    pub variation_groups: Option<usize>,
}

impl LexarithmosRuntime {
    /// Regenerate every enabled index from the registry artifact on disk.
    ///
    /// Reads the artifact, not the in-memory registry: a missing or malformed
    /// artifact means an earlier persist never completed and is reported as
    /// `MalformedArtifact`.
    pub fn refresh_indexes(&self) -> LexarithmosResult<IndexSummary> {
        let result = self.rebuild_indexes();
        self.report(result)
    }

    /// Regenerate the indexes when `indexes.auto_refresh` is on.
    pub fn refresh_if_enabled(&self) -> LexarithmosResult<Option<IndexSummary>> {
        if !self.config.indexes.effective_auto_refresh() {
            tracing::debug!("auto refresh disabled, indexes left as they are");
            return Ok(None);
        }
        self.refresh_indexes().map(Some)
    }

    fn rebuild_indexes(&self) -> LexarithmosResult<IndexSummary> {
        let registry_path = self.store.path();
        let snapshot = read_snapshot(registry_path)?;
        let mut summary = IndexSummary::default();

        if self.config.indexes.effective_permutations() {
            let index = build_permutation_index(&snapshot);
            write_index(&self.permutations_path(), &index)?;
            summary.permutation_groups = Some(index.len());
        }

        if self.config.indexes.effective_variations() {
            let index = build_variation_index(&snapshot);
            write_index(&self.variations_path(), &index)?;
            summary.variation_groups = Some(index.len());
        }

        tracing::info!(
            records = snapshot.len(),
            permutation_groups = ?summary.permutation_groups,
            variation_groups = ?summary.variation_groups,
            "indexes rebuilt"
        );
        self.dispatcher.emit_indexes_rebuilt(&IndexesRebuiltEvent {
            permutation_groups: summary.permutation_groups,
            variation_groups: summary.variation_groups,
            registry_path: registry_path.to_path_buf(),
        });
        Ok(summary)
    }
}

fn write_index<T: serde::Serialize>(path: &Path, index: &T) -> Result<(), IndexError> {
    write_json_atomic(path, index).map_err(|e| {
        tracing::error!(path = %path.display(), error = %e, "index write failed");
        IndexError::PersistenceFailure {
            path: path.display().to_string(),
            message: e.to_string(),
        }
    })
}
