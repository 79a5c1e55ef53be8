//! JSON artifact I/O: atomic writes, strict snapshot reads, lenient registry loads.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use lexarithmos_core::constants::ARTIFACT_INDENT;
use lexarithmos_core::errors::IndexError;
use lexarithmos_core::types::{Record, RegistrySnapshot};

/// Serialize `value` as pretty JSON and atomically replace `path` with it.
///
/// The bytes go to a temp file in the target directory, are flushed and
/// synced, then renamed over `path`. Parent directories are created on demand.
/// On failure the temp file is removed and `path` is left untouched.
pub fn write_json_atomic<T: Serialize + ?Sized>(path: &Path, value: &T) -> io::Result<()> {
    let parent = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)?;

    let mut tmp = tempfile::Builder::new()
        .prefix(".lexarithmos-")
        .suffix(".tmp")
        .tempfile_in(parent)?;
    {
        let mut writer = BufWriter::new(tmp.as_file_mut());
        let formatter = PrettyFormatter::with_indent(ARTIFACT_INDENT);
        let mut serializer = serde_json::Serializer::with_formatter(&mut writer, formatter);
        value.serialize(&mut serializer)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Read the registry artifact for index generation.
///
/// Unlike [`load_registry`], a missing or unparseable artifact is an error:
/// it means a previous persist never completed.
pub fn read_snapshot(path: &Path) -> Result<RegistrySnapshot, IndexError> {
    let malformed = |message: String| IndexError::MalformedArtifact {
        path: path.display().to_string(),
        message,
    };

    let content = fs::read_to_string(path).map_err(|e| malformed(e.to_string()))?;
    let snapshot: RegistrySnapshot =
        serde_json::from_str(&content).map_err(|e| malformed(e.to_string()))?;

    if let Some((key, _)) = snapshot.iter().find(|(_, record)| record.is_empty()) {
        return Err(malformed(format!("record {key} has no phrases")));
    }
    Ok(snapshot)
}

/// Load the registry mapping, starting empty when the artifact is missing or corrupt.
///
/// A never-written store and a corrupted one look the same to the caller, so
/// both cases are logged as warnings.
pub(crate) fn load_registry(path: &Path) -> BTreeMap<u64, Record> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(
                path = %path.display(),
                "registry artifact not found, starting with an empty registry"
            );
            return BTreeMap::new();
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "registry artifact unreadable, starting with an empty registry"
            );
            return BTreeMap::new();
        }
    };

    match serde_json::from_str::<BTreeMap<u64, Record>>(&content) {
        Ok(mut records) => {
            let before = records.len();
            records.retain(|_, record| !record.is_empty());
            if records.len() != before {
                tracing::debug!(
                    dropped = before - records.len(),
                    "dropped records without phrases while loading"
                );
            }
            tracing::debug!(path = %path.display(), records = records.len(), "registry loaded");
            records
        }
        Err(e) => {
            tracing::warn!(
                path = %path.display(),
                error = %e,
                "registry artifact malformed, starting with an empty registry"
            );
            BTreeMap::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn atomic_write_replaces_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");

        write_json_atomic(&path, &vec![1, 2, 3]).unwrap();
        write_json_atomic(&path, &vec![4]).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "[\n    4\n]\n");
        let leftovers: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .filter(|name| name != "out.json")
            .collect();
        assert!(leftovers.is_empty(), "temp files left behind: {leftovers:?}");
    }

    #[test]
    fn load_registry_tolerates_missing_and_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("number_file.json");
        assert!(load_registry(&path).is_empty());

        fs::write(&path, "{ not json").unwrap();
        assert!(load_registry(&path).is_empty());

        fs::write(&path, r#"{"12": {"subdivisions": [3], "phrases": []}}"#).unwrap();
        assert!(load_registry(&path).is_empty());
    }

    #[test]
    fn read_snapshot_is_strict() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("number_file.json");
        assert!(matches!(
            read_snapshot(&path),
            Err(IndexError::MalformedArtifact { .. })
        ));

        fs::write(&path, "[]").unwrap();
        assert!(matches!(
            read_snapshot(&path),
            Err(IndexError::MalformedArtifact { .. })
        ));

        fs::write(&path, r#"{"12": {"subdivisions": [3], "phrases": []}}"#).unwrap();
        assert!(matches!(
            read_snapshot(&path),
            Err(IndexError::MalformedArtifact { .. })
        ));

        fs::write(&path, r#"{"12": {"subdivisions": [3], "phrases": ["ΑΒ"]}}"#).unwrap();
        let snapshot = read_snapshot(&path).unwrap();
        assert_eq!(snapshot.len(), 1);
        assert!(snapshot.contains(12));
    }
}
