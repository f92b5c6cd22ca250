//! Application configuration.

use crate::backend::utils::paths::app_file;
use crate::utils::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

const CONFIG_FILE: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub storage: StorageConfig,
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub resizable: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub file_name: String,
    pub currency: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Catalog Panel".to_string(),
            width: 1180.0,
            height: 760.0,
            resizable: true,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_name: "storage.json".to_string(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            file_name: "products.json".to_string(),
            currency: "$".to_string(),
        }
    }
}

impl AppConfig {
    /// Gets the path to the config file.
    pub fn get_config_path() -> PathBuf {
        app_file(CONFIG_FILE)
    }

    /// Loads the config, falling back to defaults when missing or malformed.
    /// A missing file is created with the defaults.
    pub async fn load() -> Self {
        let path = Self::get_config_path();
        match Self::load_from(&path).await {
            Ok(Some(config)) => config,
            Ok(None) => {
                let config = Self::default();
                if let Err(e) = config.save_to(&path).await {
                    log::warn!("Failed to write default config: {e}");
                }
                config
            }
            Err(e) => {
                log::warn!("Ignoring config at {}: {e}", path.display());
                Self::default()
            }
        }
    }

    pub async fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let json = fs::read_to_string(path).await?;
        Ok(Some(serde_json::from_str(&json)?))
    }

    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).await?;
        Ok(())
    }

    pub fn storage_path(&self) -> PathBuf {
        app_file(&self.storage.file_name)
    }

    pub fn catalog_path(&self) -> PathBuf {
        app_file(&self.catalog.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_config_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppConfig::load_from(&dir.path().join("config.json"))
            .await
            .unwrap();
        assert!(loaded.is_none());
    }

    #[tokio::test]
    async fn partial_config_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "catalog": { "currency": "€" } }"#)
            .await
            .unwrap();

        let config = AppConfig::load_from(&path).await.unwrap().unwrap();
        assert_eq!(config.catalog.currency, "€");
        assert_eq!(config.catalog.file_name, "products.json");
        assert_eq!(config.window, WindowConfig::default());
    }

    #[tokio::test]
    async fn saved_config_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = AppConfig::default();
        config.window.resizable = false;
        config.save_to(&path).await.unwrap();

        assert_eq!(AppConfig::load_from(&path).await.unwrap(), Some(config));
    }

    #[tokio::test]
    async fn malformed_config_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").await.unwrap();
        assert!(AppConfig::load_from(&path).await.is_err());
    }
}
