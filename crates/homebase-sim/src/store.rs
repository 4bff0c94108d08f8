//! File-backed key-value storage.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use homebase_dispatch::{KeyValueStore, PlatformError};

/// Key-value pairs kept in one JSON object on disk.
///
/// The file is re-read on every access so separate runs see each other's
/// writes.
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<BTreeMap<String, String>, PlatformError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = std::fs::read_to_string(&self.path)
            .map_err(|e| PlatformError::Failed(format!("reading {:?}: {}", self.path, e)))?;
        serde_json::from_str(&text)
            .map_err(|e| PlatformError::Failed(format!("parsing {:?}: {}", self.path, e)))
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get_item(&self, key: &str) -> Result<Option<String>, PlatformError> {
        Ok(self.read_all()?.remove(key))
    }

    async fn set_item(&self, key: &str, value: &str) -> Result<(), PlatformError> {
        let _guard = self.write_lock.lock();
        let mut items = self.read_all()?;
        items.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| PlatformError::Failed(format!("creating {:?}: {}", parent, e)))?;
        }
        let json = serde_json::to_string_pretty(&items)
            .map_err(|e| PlatformError::Failed(e.to_string()))?;
        std::fs::write(&self.path, json)
            .map_err(|e| PlatformError::Failed(format!("writing {:?}: {}", self.path, e)))?;
        tracing::debug!("Stored {} in {:?}", key, self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_set_then_get_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("storage.json");

        let store = FileStore::new(&path);
        assert_eq!(store.get_item("@AppData").await.unwrap(), None);
        store.set_item("@AppData", "{\"homeAddress\":\"1 Elm St\"}").await.unwrap();
        store.set_item("other", "x").await.unwrap();

        let reopened = FileStore::new(&path);
        assert_eq!(
            reopened.get_item("@AppData").await.unwrap().as_deref(),
            Some("{\"homeAddress\":\"1 Elm St\"}")
        );
        assert_eq!(reopened.get_item("other").await.unwrap().as_deref(), Some("x"));
    }

    #[tokio::test]
    async fn test_corrupt_file_is_platform_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        std::fs::write(&path, "not json").unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.get_item("@AppData").await,
            Err(PlatformError::Failed(_))
        ));
    }
}
