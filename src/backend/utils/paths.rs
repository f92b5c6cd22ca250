//! Path utilities.

use std::path::PathBuf;

use anyhow::Result;

/// Name of the application data directory.
const APP_DIR: &str = "CatalogPanel";

/// Environment variable overriding the data directory.
pub const APP_DIR_ENV: &str = "CATALOG_PANEL_DIR";

/// Get the application data directory (`CatalogPanel`).
#[inline]
pub fn get_app_dir() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os(APP_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir));
    }

    let base_dir = match std::env::consts::OS {
        "windows" => std::env::var("APPDATA")
            .ok()
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("Could not determine AppData directory"))?,
        "macos" => std::env::var("HOME")
            .ok()
            .map(|home| PathBuf::from(home).join("Library/Application Support"))
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
        _ => std::env::var("XDG_DATA_HOME")
            .ok()
            .filter(|d| !d.is_empty())
            .map(PathBuf::from)
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .map(|home| PathBuf::from(home).join(".local/share"))
            })
            .ok_or_else(|| anyhow::anyhow!("Could not determine home directory"))?,
    };
    Ok(base_dir.join(APP_DIR))
}

/// Resolve a file inside the data directory, falling back to the working directory.
pub fn app_file(name: &str) -> PathBuf {
    get_app_dir()
        .unwrap_or_else(|e| {
            log::warn!("{e}, using the working directory");
            PathBuf::from(APP_DIR)
        })
        .join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        temp_env::with_var(APP_DIR_ENV, Some(dir.path()), || {
            assert_eq!(get_app_dir().unwrap(), dir.path());
            assert_eq!(app_file("storage.json"), dir.path().join("storage.json"));
        });
    }

    #[test]
    fn empty_override_is_ignored() {
        temp_env::with_var(APP_DIR_ENV, Some(""), || {
            if let Ok(dir) = get_app_dir() {
                assert!(dir.ends_with(APP_DIR));
            }
        });
    }
}
