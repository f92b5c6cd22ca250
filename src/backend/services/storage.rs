//! File-backed key/value storage.
//!
//! Mirrors the browser's local storage: string keys, string values, no
//! expiry. The whole store is a single flat JSON object on disk.

use crate::utils::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::fs;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every item. A missing or unreadable file is an empty store.
    pub async fn items(&self) -> BTreeMap<String, String> {
        if !self.path.exists() {
            return BTreeMap::new();
        }

        let parsed = match fs::read_to_string(&self.path).await {
            Ok(json) => serde_json::from_str(&json).map_err(crate::utils::Error::from),
            Err(e) => Err(e.into()),
        };

        parsed.unwrap_or_else(|e| {
            log::warn!("Treating storage {} as empty: {e}", self.path.display());
            BTreeMap::new()
        })
    }

    pub async fn get_item(&self, key: &str) -> Option<String> {
        self.items().await.remove(key)
    }

    pub async fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self.items().await;
        items.insert(key.to_string(), value.to_string());
        self.write(&items).await
    }

    /// Removes `key`; a missing key is not an error.
    pub async fn remove_item(&self, key: &str) -> Result<()> {
        let mut items = self.items().await;
        if items.remove(key).is_none() {
            return Ok(());
        }
        self.write(&items).await
    }

    async fn write(&self, items: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, json).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage_in(dir: &tempfile::TempDir) -> LocalStorage {
        LocalStorage::new(dir.path().join("data").join("storage.json"))
    }

    #[tokio::test]
    async fn missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        assert!(storage.items().await.is_empty());
        assert_eq!(storage.get_item("isAuthenticated").await, None);
    }

    #[tokio::test]
    async fn set_then_get() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        storage.set_item("isAuthenticated", "true").await.unwrap();
        storage.set_item("theme", "dark").await.unwrap();

        assert_eq!(
            storage.get_item("isAuthenticated").await.as_deref(),
            Some("true")
        );
        assert_eq!(storage.items().await.len(), 2);
    }

    #[tokio::test]
    async fn remove_keeps_other_items() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        storage.set_item("isAuthenticated", "true").await.unwrap();
        storage.set_item("theme", "dark").await.unwrap();

        storage.remove_item("isAuthenticated").await.unwrap();
        assert_eq!(storage.get_item("isAuthenticated").await, None);
        assert_eq!(storage.get_item("theme").await.as_deref(), Some("dark"));
    }

    #[tokio::test]
    async fn removing_missing_key_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        storage.remove_item("isAuthenticated").await.unwrap();
        assert!(!storage.path().exists());
    }

    #[tokio::test]
    async fn malformed_file_reads_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let storage = storage_in(&dir);
        fs::create_dir_all(storage.path().parent().unwrap())
            .await
            .unwrap();
        fs::write(storage.path(), "isAuthenticated=true").await.unwrap();

        assert_eq!(storage.get_item("isAuthenticated").await, None);

        // Writing replaces the corrupted contents.
        storage.set_item("isAuthenticated", "false").await.unwrap();
        assert_eq!(
            storage.get_item("isAuthenticated").await.as_deref(),
            Some("false")
        );
    }
}
