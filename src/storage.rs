// src/storage.rs

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use log::{debug, info};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Result;

/// Process-local key-value storage area.
///
/// One JSON document per key. Entries are held in memory; when a data
/// directory is configured every write also lands in `<dir>/<key>.json`
/// through a temp file + rename, and `open` reloads whatever a previous
/// run left there.
#[derive(Debug)]
pub struct Storage {
    dir: Option<PathBuf>,
    entries: HashMap<String, String>,
}

impl Storage {
    /// Purely in-memory area; contents are lost on drop.
    pub fn in_memory() -> Self {
        Self {
            dir: None,
            entries: HashMap::new(),
        }
    }

    /// Opens (creating if needed) a file-backed area and loads its entries.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;

        let mut entries = HashMap::new();
        for entry in fs::read_dir(&dir)? {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(key) = path.file_stem().and_then(|s| s.to_str()) {
                entries.insert(key.to_string(), fs::read_to_string(&path)?);
            }
        }

        info!("Opened storage at {} ({} entries)", dir.display(), entries.len());
        Ok(Self {
            dir: Some(dir),
            entries,
        })
    }

    /// Whether the key holds a value at all. An empty collection still
    /// counts as present, which is what catalog seeding keys off.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        match self.entries.get(key) {
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
            None => Ok(None),
        }
    }

    pub fn put<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)
    }

    /// Stores an already-serialized document. Multi-key commits snapshot
    /// the old document with [`Storage::get_raw`] and restore it through
    /// here when a later write in the same operation fails.
    pub(crate) fn put_raw(&mut self, key: &str, raw: &str) -> Result<()> {
        if let Some(dir) = &self.dir {
            let tmp = dir.join(format!("{}.json.tmp", key));
            let dst = dir.join(format!("{}.json", key));
            fs::write(&tmp, raw)?;
            fs::rename(&tmp, &dst)?;
        }
        self.entries.insert(key.to_string(), raw.to_string());
        debug!("put {}", key);
        Ok(())
    }

    pub(crate) fn get_raw(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    /// Removes the key. Removing an absent key is fine.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if let Some(dir) = &self.dir {
            let dst = dir.join(format!("{}.json", key));
            if dst.exists() {
                fs::remove_file(&dst)?;
            }
        }
        self.entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_put_get_remove() {
        let mut storage = Storage::in_memory();
        assert!(!storage.contains("k"));
        assert_eq!(storage.get::<Vec<u32>>("k").unwrap(), None);

        storage.put("k", &vec![1u32, 2, 3]).unwrap();
        assert!(storage.contains("k"));
        assert_eq!(storage.get::<Vec<u32>>("k").unwrap(), Some(vec![1, 2, 3]));

        storage.remove("k").unwrap();
        assert!(!storage.contains("k"));
        // removing again is a no-op
        storage.remove("k").unwrap();
    }

    #[test]
    fn empty_value_is_still_present() {
        let mut storage = Storage::in_memory();
        storage.put("k", &Vec::<u32>::new()).unwrap();
        assert!(storage.contains("k"));
        assert_eq!(storage.get::<Vec<u32>>("k").unwrap(), Some(vec![]));
    }

    #[test]
    fn file_backed_entries_survive_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut storage = Storage::open(dir.path()).unwrap();
        storage.put("answer", &42u32).unwrap();
        drop(storage);

        let reopened = Storage::open(dir.path()).unwrap();
        assert_eq!(reopened.get::<u32>("answer").unwrap(), Some(42));
    }

    #[test]
    fn removed_key_stays_gone_after_reopen() {
        let dir = tempfile::tempdir().unwrap();

        let mut storage = Storage::open(dir.path()).unwrap();
        storage.put("answer", &42u32).unwrap();
        storage.remove("answer").unwrap();
        drop(storage);

        let reopened = Storage::open(dir.path()).unwrap();
        assert!(!reopened.contains("answer"));
    }
}
