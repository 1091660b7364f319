//! Global configuration for depmatrix
//!
//! depmatrix reads a single optional user-wide configuration file that stores
//! the default catalog source, so the `--catalog` flag does not have to be
//! repeated on every invocation.
//!
//! # Location
//!
//! - **Unix/macOS**: `~/.depmatrix/config.toml`
//! - **Windows**: `%LOCALAPPDATA%\depmatrix\config.toml`
//! - **Override**: `--config <path>` flag or the `DEPMATRIX_CONFIG` environment
//!   variable
//!
//! # Format
//!
//! ```toml
//! # Default catalog source: a local path or an http(s) URL
//! catalog = "~/catalogs/android.json"
//! ```
//!
//! # Source Priority
//!
//! The catalog source is resolved in this order:
//!
//! 1. `--catalog` flag
//! 2. `DEPMATRIX_CATALOG` environment variable
//! 3. `catalog` key in the global configuration file
//!
//! A missing configuration file is not an error; it simply means no default
//! source is configured.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::core::DepmatrixError;

/// Global configuration structure.
///
/// Deserialized from `~/.depmatrix/config.toml` (or the platform equivalent).
/// All fields are optional so an empty file is a valid configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct GlobalConfig {
    /// Default catalog source used when neither the `--catalog` flag nor the
    /// `DEPMATRIX_CATALOG` environment variable is set. A local file path
    /// (tilde expansion applies) or an http(s) URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog: Option<String>,
}

impl GlobalConfig {
    /// Load the configuration from the default platform-specific location.
    ///
    /// Returns a default (empty) configuration if the file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the default path cannot be determined, or the file
    /// exists but cannot be read or parsed.
    pub async fn load() -> Result<Self> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load the configuration from an optional explicit path.
    ///
    /// If `path` is `None`, falls back to [`Self::default_path`]. A missing
    /// file yields the default configuration either way.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub async fn load_with_optional(path: Option<PathBuf>) -> Result<Self> {
        let path = match path {
            Some(path) => path,
            None => Self::default_path()?,
        };
        if path.exists() {
            Self::load_from(&path).await
        } else {
            Ok(Self::default())
        }
    }

    /// Load the configuration from a specific file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains invalid TOML.
    pub async fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read config from {}", path.display()))?;

        toml::from_str(&content)
            .map_err(|e| DepmatrixError::ConfigParseError {
                path: path.display().to_string(),
                reason: e.to_string(),
            })
            .with_context(|| format!("Failed to parse config from {}", path.display()))
    }

    /// Save the configuration to a specific file path, creating parent
    /// directories as needed.
    ///
    /// # Errors
    ///
    /// Returns an error if directories cannot be created, serialization
    /// fails, or the file cannot be written.
    pub async fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await.with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(path, content)
            .await
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }

    /// Get the default file path for the global configuration.
    ///
    /// - **Windows**: `%LOCALAPPDATA%\depmatrix\config.toml`
    /// - **Unix/macOS**: `~/.depmatrix/config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory (or local data directory on
    /// Windows) cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if cfg!(target_os = "windows") {
            dirs::data_local_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine local data directory"))?
                .join("depmatrix")
        } else {
            dirs::home_dir()
                .ok_or_else(|| anyhow::anyhow!("Unable to determine home directory"))?
                .join(".depmatrix")
        };

        Ok(config_dir.join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_path_is_under_depmatrix_dir() {
        let path = GlobalConfig::default_path().unwrap();
        assert!(path.to_string_lossy().contains("depmatrix"));
        assert!(path.ends_with("config.toml"));
    }

    #[tokio::test]
    async fn test_load_from_reads_catalog_source() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "catalog = \"~/catalogs/android.json\"\n").await.unwrap();

        let config = GlobalConfig::load_from(&path).await.unwrap();
        assert_eq!(config.catalog.as_deref(), Some("~/catalogs/android.json"));
    }

    #[tokio::test]
    async fn test_load_from_empty_file_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "").await.unwrap();

        let config = GlobalConfig::load_from(&path).await.unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[tokio::test]
    async fn test_load_from_invalid_toml_is_config_parse_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "catalog = [unclosed").await.unwrap();

        let err = GlobalConfig::load_from(&path).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepmatrixError>(),
            Some(DepmatrixError::ConfigParseError { .. })
        ));
    }

    #[tokio::test]
    async fn test_load_with_optional_missing_file_is_default() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("does-not-exist.toml");

        let config = GlobalConfig::load_with_optional(Some(path)).await.unwrap();
        assert_eq!(config, GlobalConfig::default());
    }

    #[tokio::test]
    async fn test_save_to_round_trips() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = GlobalConfig {
            catalog: Some("https://example.com/catalog.json".to_string()),
        };
        config.save_to(&path).await.unwrap();

        let loaded = GlobalConfig::load_from(&path).await.unwrap();
        assert_eq!(loaded, config);
    }
}
