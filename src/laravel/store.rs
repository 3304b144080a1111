//! Persistent key-value storage
//!
//! Values are opaque strings; callers encode lists as JSON arrays. The file
//! backend keeps everything in one JSON object:
//!
//! ```json
//! { "selectedVersion": "11.x", "favorites": "[\"routing\"]" }
//! ```

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Key of the selected documentation version
pub const SELECTED_VERSION_KEY: &str = "selectedVersion";

/// Key of the JSON-encoded favorites array
pub const FAVORITES_KEY: &str = "favorites";

/// Key of the JSON-encoded recent pages array
pub const RECENT_KEY: &str = "recentPages";

/// String key-value storage that survives between runs
pub trait KeyValueStore {
    /// Value stored under `key`, or `None` if it was never set
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;
}

/// Key-value store backed by a single JSON file
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Open the store at `path`; a missing file is an empty store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        let items = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read: {}", path.display()))?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content)
                    .with_context(|| format!("Failed to parse: {}", path.display()))?
            }
        } else {
            log::debug!("No storage file at {}", path.display());
            BTreeMap::new()
        };

        Ok(Self { path, items })
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create: {}", parent.display()))?;
        }

        let content = serde_json::to_string_pretty(&self.items)?;
        fs::write(&self.path, content)
            .with_context(|| format!("Failed to write: {}", self.path.display()))?;
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        log::debug!("Persisting {} to {}", key, self.path.display());
        self.flush()
    }
}

/// In-memory store for tests
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub items: BTreeMap<String, String>,
    pub writes: usize,
}

#[cfg(test)]
impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        self.items.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::open(dir.path().join("storage.json")).unwrap();
        assert_eq!(store.get_item(FAVORITES_KEY).unwrap(), None);
    }

    #[test]
    fn test_set_item_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let mut store = JsonFileStore::open(&path).unwrap();
        store.set_item(SELECTED_VERSION_KEY, "11.x").unwrap();
        store.set_item(FAVORITES_KEY, r#"["routing"]"#).unwrap();

        let reopened = JsonFileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get_item(SELECTED_VERSION_KEY).unwrap().as_deref(),
            Some("11.x")
        );
        assert_eq!(
            reopened.get_item(FAVORITES_KEY).unwrap().as_deref(),
            Some(r#"["routing"]"#)
        );
        assert_eq!(reopened.get_item(RECENT_KEY).unwrap(), None);
    }

    #[test]
    fn test_file_layout() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{ "recentPages": "[\"blade\"]" }}"#).unwrap();

        let store = JsonFileStore::open(file.path()).unwrap();
        assert_eq!(
            store.get_item(RECENT_KEY).unwrap().as_deref(),
            Some(r#"["blade"]"#)
        );
    }

    #[test]
    fn test_empty_file_is_empty() {
        let file = NamedTempFile::new().unwrap();
        let store = JsonFileStore::open(file.path()).unwrap();
        assert_eq!(store.get_item(RECENT_KEY).unwrap(), None);
    }

    #[test]
    fn test_corrupt_file_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "[1, 2").unwrap();
        assert!(JsonFileStore::open(file.path()).is_err());
    }
}
