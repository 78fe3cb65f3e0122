use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{StoreError, StoreResult};
use crate::traits::StateStore;

/// File-backed state store: one JSON document holding every entry.
///
/// Values are hex-encoded so arbitrary bytes (including the composite-index
/// sentinel) survive the JSON encoding; keys are stored verbatim. Every
/// write rewrites the whole file via a temp-file-then-rename sequence, so a
/// crash mid-write never leaves a partial state file.
///
/// Each operation re-reads the file, which keeps a sequence of short-lived
/// processes (the CLI) coherent. Intended for a single writer; concurrent
/// writers race at the whole-file level.
pub struct FileStateStore {
    path: PathBuf,
}

impl FileStateStore {
    /// Open a store backed by the given file path.
    ///
    /// The file is created on first `put`; a missing file reads as empty.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> StoreResult<BTreeMap<String, String>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let bytes = fs::read(&self.path)?;
        serde_json::from_slice(&bytes).map_err(|e| StoreError::Serialization(e.to_string()))
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(entries)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        atomic_write(&self.path, &bytes)
    }
}

impl StateStore for FileStateStore {
    fn get(&self, key: &str) -> StoreResult<Option<Vec<u8>>> {
        let entries = self.load()?;
        match entries.get(key) {
            Some(encoded) => {
                let value = hex::decode(encoded)
                    .map_err(|e| StoreError::Serialization(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn put(&self, key: &str, value: &[u8]) -> StoreResult<()> {
        let mut entries = self.load()?;
        entries.insert(key.to_string(), hex::encode(value));
        self.persist(&entries)
    }

    fn contains(&self, key: &str) -> StoreResult<bool> {
        Ok(self.load()?.contains_key(key))
    }
}

impl std::fmt::Debug for FileStateStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStateStore")
            .field("path", &self.path)
            .finish()
    }
}

/// Write bytes to `target`, going through a sibling temp file and a rename.
fn atomic_write(target: &Path, content: &[u8]) -> StoreResult<()> {
    if let Some(parent) = target.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let temp = target.with_extension("tmp");
    fs::write(&temp, content)?;
    fs::rename(&temp, target)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (FileStateStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = FileStateStore::new(dir.path().join("state.json"));
        (store, dir)
    }

    #[test]
    fn put_and_get_roundtrip() {
        let (store, _dir) = setup();
        store.put("AC123", b"{\"objType\":\"record\"}").unwrap();
        assert_eq!(
            store.get("AC123").unwrap().unwrap(),
            b"{\"objType\":\"record\"}"
        );
    }

    #[test]
    fn missing_file_reads_as_empty() {
        let (store, _dir) = setup();
        assert!(store.get("AC123").unwrap().is_none());
        assert!(!store.contains("AC123").unwrap());
    }

    #[test]
    fn state_survives_across_instances() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");

        FileStateStore::new(&path).put("AC123", b"persisted").unwrap();

        let reopened = FileStateStore::new(&path);
        assert_eq!(reopened.get("AC123").unwrap().unwrap(), b"persisted");
    }

    #[test]
    fn put_overwrites() {
        let (store, _dir) = setup();
        store.put("AC123", b"first").unwrap();
        store.put("AC123", b"second").unwrap();
        assert_eq!(store.get("AC123").unwrap().unwrap(), b"second");
    }

    #[test]
    fn binary_values_roundtrip() {
        let (store, _dir) = setup();
        store.put("\u{0000}index\u{0000}AC123\u{0000}", &[0x00]).unwrap();
        assert_eq!(
            store.get("\u{0000}index\u{0000}AC123\u{0000}").unwrap().unwrap(),
            vec![0x00]
        );
    }

    #[test]
    fn no_temp_file_left_behind() {
        let (store, dir) = setup();
        store.put("AC123", b"clean").unwrap();

        let tmp_count = fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.file_name()
                    .to_str()
                    .map(|s| s.ends_with(".tmp"))
                    .unwrap_or(false)
            })
            .count();
        assert_eq!(tmp_count, 0);
    }

    #[test]
    fn creates_parent_directory() {
        let dir = TempDir::new().unwrap();
        let store = FileStateStore::new(dir.path().join("nested").join("state.json"));
        store.put("AC123", b"x").unwrap();
        assert!(store.contains("AC123").unwrap());
    }

    #[test]
    fn corrupt_state_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("state.json");
        fs::write(&path, b"not json").unwrap();

        let store = FileStateStore::new(&path);
        assert!(matches!(
            store.get("AC123"),
            Err(StoreError::Serialization(_))
        ));
    }
}
