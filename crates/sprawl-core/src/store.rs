//! Persistence seam for records.
//!
//! The engine never touches files itself; hosts hand it records and keep
//! them wherever they like. `Store` is the narrow key-value seam they
//! implement. Two implementations ship here: an in-memory store for tests
//! and a one-JSON-file-per-key directory store for simple hosts.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::{CoreError, CoreResult};

/// Key-value storage for serialized records.
pub trait Store {
    /// Save a serialized record under a key, overwriting any previous value.
    fn save(&mut self, key: &str, record: &str) -> CoreResult<()>;

    /// Load the serialized record for a key, or `None` if absent.
    fn load(&self, key: &str) -> CoreResult<Option<String>>;
}

/// Serialize a record as JSON and save it under a key.
pub fn save_record<T: Serialize>(store: &mut dyn Store, key: &str, record: &T) -> CoreResult<()> {
    let json = serde_json::to_string_pretty(record)?;
    store.save(key, &json)
}

/// Load and deserialize the record for a key, or `None` if absent.
pub fn load_record<T: DeserializeOwned>(store: &dyn Store, key: &str) -> CoreResult<Option<T>> {
    match store.load(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// An in-memory store backed by a `HashMap`.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    records: HashMap<String, String>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl Store for MemoryStore {
    fn save(&mut self, key: &str, record: &str) -> CoreResult<()> {
        self.records.insert(key.to_string(), record.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> CoreResult<Option<String>> {
        Ok(self.records.get(key).cloned())
    }
}

/// A store that keeps one `<key>.json` file per record under a directory.
#[derive(Debug, Clone)]
pub struct JsonDirStore {
    dir: PathBuf,
}

impl JsonDirStore {
    /// Create a store rooted at the given directory, creating it if needed.
    pub fn new(dir: impl Into<PathBuf>) -> CoreResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Keys map straight to file names, so path separators are rejected.
    fn path_for(&self, key: &str) -> CoreResult<PathBuf> {
        if key.is_empty() || key.contains(['/', '\\']) || key.contains("..") {
            return Err(CoreError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Store for JsonDirStore {
    fn save(&mut self, key: &str, record: &str) -> CoreResult<()> {
        let path = self.path_for(key)?;
        std::fs::write(path, record)?;
        Ok(())
    }

    fn load(&self, key: &str) -> CoreResult<Option<String>> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(json) => Ok(Some(json)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::Character;

    #[test]
    fn memory_store_round_trip() {
        let mut store = MemoryStore::new();
        let c = Character::new("Razor").with_attribute("Agility", 3);
        save_record(&mut store, "razor", &c).unwrap();
        assert_eq!(store.len(), 1);

        let back: Character = load_record(&store, "razor").unwrap().unwrap();
        assert_eq!(back.id, c.id);
        assert_eq!(back.attribute("Agility").unwrap(), 3);
    }

    #[test]
    fn memory_store_missing_key() {
        let store = MemoryStore::new();
        let missing: Option<Character> = load_record(&store, "nobody").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn memory_store_overwrites() {
        let mut store = MemoryStore::new();
        store.save("k", "first").unwrap();
        store.save("k", "second").unwrap();
        assert_eq!(store.load("k").unwrap().unwrap(), "second");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn json_dir_store_round_trip() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = JsonDirStore::new(dir.path()).unwrap();
        let c = Character::new("Ghost");
        save_record(&mut store, "ghost", &c).unwrap();
        assert!(dir.path().join("ghost.json").exists());

        let back: Character = load_record(&store, "ghost").unwrap().unwrap();
        assert_eq!(back.name, "Ghost");
    }

    #[test]
    fn json_dir_store_missing_key() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = JsonDirStore::new(dir.path()).unwrap();
        assert!(store.load("nobody").unwrap().is_none());
    }

    #[test]
    fn json_dir_store_rejects_path_keys() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut store = JsonDirStore::new(dir.path()).unwrap();
        assert!(store.save("../escape", "{}").is_err());
        assert!(store.save("a/b", "{}").is_err());
        assert!(store.save("", "{}").is_err());
    }
}
