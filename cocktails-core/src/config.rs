//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader (directories only)
//!
//! Loads and saves settings as TOML from the proper cross-platform config path
//! using the [`directories`](https://docs.rs/directories) crate.
//!
//! ## Features
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Robust defaulting: a missing file is created, missing fields are filled in
//! - Async load/save for smooth integration with Tokio
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! let favorites = config.favorites_path()?;
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

use tokio::fs as TokioFs;

use crate::error::AppError;

const QUALIFIER: &str = "pl";
const ORGANIZATION: &str = "solvro";
const APPLICATION: &str = "cocktails";

pub const DEFAULT_BASE_URL: &str = "https://cocktails.solvro.pl/api/v1";
pub const FAVORITES_FILE: &str = "liked_cocktails.json";

/// Remote catalog endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Base URL; pages are fetched from `<base_url>/cocktails?page=N`
    pub base_url: String,

    /// Total time allowed for one page request
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,

    #[serde(with = "humantime_serde")]
    pub connect_timeout: Duration,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
        }
    }
}

/// Where favorites are persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Overrides the platform data directory location
    pub favorites_path: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Fallback level when `RUST_LOG` is not set
    pub level: String,

    pub log_dir: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Rows moved by PageUp/PageDown
    pub page_step: usize,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self { page_step: 10 }
    }
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,

    pub storage: StorageConfig,

    pub logging: LoggingConfig,

    pub ui: UiConfig,
}

impl Config {
    /// Loads config from TOML file at the XDG-compliant app config dir, or returns defaults.
    ///
    /// The config is expected at `$XDG_CONFIG_HOME/cocktails/config.toml`
    /// (Linux), or equivalent on Windows/macOS.
    pub async fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        Self::load_from(&path).await
    }

    /// Loads config from an explicit path, writing defaults there if it is missing.
    pub async fn load_from(path: &Path) -> Result<Self, AppError> {
        if path.exists() {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(path)
                .await
                .map_err(|e| AppError::config_io(path, e))?;
            let cfg: Self = toml::from_str(&text)?;

            Ok(cfg)
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save_to(path).await?;

            Ok(default_config)
        }
    }

    pub async fn save_to(&self, path: &Path) -> Result<(), AppError> {
        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| AppError::Other(format!("Config serialize error: {e}")))?;
        TokioFs::write(path, toml_str)
            .await
            .map_err(|e| AppError::config_io(path, e))?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        Ok(Self::project_dirs()?.config_dir().join("config.toml"))
    }

    /// Favorites file: the configured override, or `<data dir>/liked_cocktails.json`.
    pub fn favorites_path(&self) -> Result<PathBuf, AppError> {
        match &self.storage.favorites_path {
            Some(path) => Ok(path.clone()),
            None => Ok(Self::project_dirs()?.data_dir().join(FAVORITES_FILE)),
        }
    }

    /// Log directory: the configured override, or `<data dir>/logs`.
    pub fn log_dir(&self) -> PathBuf {
        if let Some(dir) = &self.logging.log_dir {
            return dir.clone();
        }

        Self::project_dirs()
            .map(|dirs| dirs.data_dir().join("logs"))
            .unwrap_or_else(|_| PathBuf::from("logs"))
    }

    fn project_dirs() -> Result<ProjectDirs, AppError> {
        ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
            .ok_or_else(|| AppError::Other("Could not determine config directory.".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_partial_file_fills_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [catalog]
            base_url = "http://localhost:3333/api/v1"
            request_timeout = "5s"
            "#,
        )
        .unwrap();

        assert_eq!(cfg.catalog.base_url, "http://localhost:3333/api/v1");
        assert_eq!(cfg.catalog.request_timeout, Duration::from_secs(5));
        assert_eq!(cfg.catalog.connect_timeout, Duration::from_secs(10));
        assert_eq!(cfg.ui.page_step, 10);
        assert_eq!(cfg.logging.level, "info");
    }

    #[tokio::test]
    async fn test_missing_file_is_created_with_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let cfg = Config::load_from(&path).await.unwrap();
        assert_eq!(cfg, Config::default());
        assert!(path.exists());

        let reloaded = Config::load_from(&path).await.unwrap();
        assert_eq!(reloaded, cfg);
    }

    #[tokio::test]
    async fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "catalog = [").await.unwrap();

        assert!(matches!(
            Config::load_from(&path).await,
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_favorites_path_override() {
        let mut cfg = Config::default();
        cfg.storage.favorites_path = Some(PathBuf::from("/tmp/likes.json"));
        assert_eq!(
            cfg.favorites_path().unwrap(),
            PathBuf::from("/tmp/likes.json")
        );
    }
}
