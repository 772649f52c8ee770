//! The character store and its load/reload operations.
//!
//! [`CharacterStore`] holds the current [`CharacterCollection`] behind an
//! [`ArcSwap`]. Readers call [`CharacterStore::snapshot`] and keep the
//! returned [`Arc`] for as long as they need it; a concurrent reload
//! swaps in a new collection without disturbing snapshots already taken.
//!
//! Loading never fails from the caller's point of view. A missing or
//! malformed data file is logged and replaced by an empty collection so
//! the service keeps running.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use arc_swap::ArcSwap;
use serde_json::Value;
use tracing::{error, info};

use crate::collection::CharacterCollection;
use crate::error::LoadError;
use crate::record::CharacterRecord;

/// An immutable view of one loaded version of the collection.
pub type Snapshot = Arc<CharacterCollection>;

/// Read and parse the data file at `path`.
///
/// The file must hold a JSON array of objects.
pub fn try_load(path: &Path) -> Result<CharacterCollection, LoadError> {
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let value: Value = serde_json::from_str(&contents).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    if !value.is_array() {
        return Err(LoadError::NotAnArray {
            path: path.to_path_buf(),
            found: json_kind(&value),
        });
    }

    let records: Vec<CharacterRecord> =
        serde_json::from_value(value).map_err(|source| LoadError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(CharacterCollection::new(records))
}

/// Load the data file at `path`, falling back to an empty collection.
///
/// Failures are logged at `error` level and never returned.
pub fn load(path: &Path) -> CharacterCollection {
    match try_load(path) {
        Ok(collection) => {
            info!(
                count = collection.len(),
                path = %path.display(),
                "Loaded characters"
            );
            collection
        }
        Err(e) => {
            error!(error = %e, "Failed to load character data, serving empty collection");
            CharacterCollection::default()
        }
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Owner of the current character collection.
///
/// The data path is fixed at construction. Each store is independent,
/// so tests can run several side by side.
#[derive(Debug)]
pub struct CharacterStore {
    path: PathBuf,
    current: ArcSwap<CharacterCollection>,
}

impl CharacterStore {
    /// Create a store and perform the initial load from `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let collection = load(&path);
        Self {
            path,
            current: ArcSwap::from_pointee(collection),
        }
    }

    /// Create a store around an already built collection.
    ///
    /// [`reload`](Self::reload) still reads from `path`.
    pub fn from_collection(path: impl Into<PathBuf>, collection: CharacterCollection) -> Self {
        Self {
            path: path.into(),
            current: ArcSwap::from_pointee(collection),
        }
    }

    /// The data file this store reloads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The collection currently installed.
    pub fn snapshot(&self) -> Snapshot {
        self.current.load_full()
    }

    /// Re-read the configured data file and install the result.
    ///
    /// Returns the snapshot that was installed, which is empty if the
    /// file could not be loaded.
    pub fn reload(&self) -> Snapshot {
        self.install(load(&self.path))
    }

    /// Load from `path` instead of the configured file and install the result.
    pub fn reload_from(&self, path: &Path) -> Snapshot {
        self.install(load(path))
    }

    fn install(&self, collection: CharacterCollection) -> Snapshot {
        let snapshot = Arc::new(collection);
        self.current.store(Arc::clone(&snapshot));
        snapshot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCENARIO: &str = r#"[
        {"id":1,"name":"Ari Stormveil","featured":true},
        {"id":2,"name":"Bo Quickshadow","featured":false}
    ]"#;

    fn data_file(contents: &str) -> (tempfile::TempDir, PathBuf) {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let path = dir.path().join("characters.json");
        std::fs::write(&path, contents).unwrap_or_else(|e| panic!("write: {e}"));
        (dir, path)
    }

    #[test]
    fn open_loads_records_in_file_order() {
        let (_dir, path) = data_file(SCENARIO);
        let store = CharacterStore::open(&path);
        let snap = store.snapshot();
        assert_eq!(snap.len(), 2);
        let names: Vec<&str> = snap.iter().map(CharacterRecord::name).collect();
        assert_eq!(names, vec!["Ari Stormveil", "Bo Quickshadow"]);
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn missing_file_is_io_error_and_empty_store() {
        let dir = tempfile::tempdir().unwrap_or_else(|e| panic!("tempdir: {e}"));
        let path = dir.path().join("absent.json");
        assert!(matches!(try_load(&path), Err(LoadError::Io { .. })));
        assert!(CharacterStore::open(&path).snapshot().is_empty());
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let (_dir, path) = data_file("[{\"id\": 1,");
        assert!(matches!(try_load(&path), Err(LoadError::Parse { .. })));
        assert!(load(&path).is_empty());
    }

    #[test]
    fn top_level_object_is_rejected() {
        let (_dir, path) = data_file(r#"{"id": 1, "name": "Solo"}"#);
        assert!(matches!(
            try_load(&path),
            Err(LoadError::NotAnArray { found: "object", .. })
        ));
        assert!(load(&path).is_empty());
    }

    #[test]
    fn non_object_elements_are_rejected() {
        let (_dir, path) = data_file(r#"[{"id": 1}, 2]"#);
        assert!(matches!(try_load(&path), Err(LoadError::Parse { .. })));
    }

    #[test]
    fn reload_is_idempotent_for_unchanged_file() {
        let (_dir, path) = data_file(SCENARIO);
        let store = CharacterStore::open(&path);
        let before = store.snapshot();
        let after = store.reload();
        assert_eq!(*before, *after);
        assert_eq!(*store.snapshot(), *before);
    }

    #[test]
    fn reload_swaps_without_touching_held_snapshots() {
        let (_dir, path) = data_file(SCENARIO);
        let store = CharacterStore::open(&path);
        let held = store.snapshot();

        std::fs::write(&path, r#"[{"id":9,"name":"Nova"}]"#)
            .unwrap_or_else(|e| panic!("write: {e}"));
        let installed = store.reload();

        assert_eq!(installed.len(), 1);
        assert_eq!(store.snapshot().find_by_id(9).map(CharacterRecord::name), Some("Nova"));
        assert_eq!(held.len(), 2);
        assert!(held.find_by_id(9).is_none());
    }

    #[test]
    fn reload_of_broken_file_empties_store() {
        let (_dir, path) = data_file(SCENARIO);
        let store = CharacterStore::open(&path);
        std::fs::write(&path, "not json").unwrap_or_else(|e| panic!("write: {e}"));

        assert!(store.reload().is_empty());
        let snap = store.snapshot();
        assert!(snap.search("").is_empty());
        assert!(snap.featured().is_empty());
        assert!(snap.find_by_id(1).is_none());
    }

    #[test]
    fn reload_from_uses_given_path_only_once() {
        let (_dir, path) = data_file(SCENARIO);
        let (_other_dir, other) = data_file(r#"[{"id":3,"name":"Cass"}]"#);
        let store = CharacterStore::open(&path);

        assert_eq!(store.reload_from(&other).len(), 1);
        assert_eq!(store.path(), path.as_path());
        assert_eq!(store.reload().len(), 2);
    }

    #[test]
    fn stores_are_independent() {
        let (_dir, path) = data_file(SCENARIO);
        let a = CharacterStore::open(&path);
        let b = CharacterStore::from_collection(&path, CharacterCollection::default());
        assert_eq!(a.snapshot().len(), 2);
        assert!(b.snapshot().is_empty());
    }
}
