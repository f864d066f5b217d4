//! Configuration for the plugin admin view.
//!
//! Deployment values (`version`, the pinned active-plugin list and the usage
//! reporting flag) are read through [`ConfigReader`], which the view-model
//! builder receives at construction time. Values are read when a view is
//! built, never cached across builds.

use crate::error::{PluginAdminError, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Server-level constants.
pub struct ServerConfig;

impl ServerConfig {
    pub const APP_NAME: &'static str = "Plugin Admin";
    pub const DEFAULT_HOST: &'static str = "127.0.0.1";
    pub const PLUGINS_ROUTE: &'static str = "/admin/extend/plugins";
    pub const HEALTH_ROUTE: &'static str = "/health";
    pub const PLUGINS_TEMPLATE: &'static str = "admin/extend/plugins";
    /// Line prefix the binary prints once the listener is bound.
    pub const PORT_ANNOUNCE_PREFIX: &'static str = "ADMIN_PORT=";
}

/// Read access to the deployment values the admin view depends on.
#[async_trait]
pub trait ConfigReader: Send + Sync {
    /// Deployment version string.
    async fn version(&self) -> Result<String>;

    /// Usage reporting flag (numeric, as stored in the site config).
    async fn submit_plugin_usage(&self) -> Result<i64>;

    /// Whether the active plugin list is pinned outside the admin panel.
    async fn active_plugins_pinned(&self) -> Result<bool>;
}

/// Plugin section of the deployment config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginsSection {
    /// Pinned list of active plugins. Any value, even an empty list, pins it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<Vec<String>>,
}

/// Deployment configuration as stored on disk.
///
/// ```json
/// {
///   "version": "3.2.0",
///   "plugins": { "active": ["plugin-markdown"] },
///   "submitPluginUsage": 1
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminConfig {
    /// Empty when the deployment does not set one.
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub plugins: PluginsSection,
    #[serde(default)]
    pub submit_plugin_usage: i64,
}

impl AdminConfig {
    /// Create a config with the given version and nothing pinned.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            ..Default::default()
        }
    }

    /// Load a config from a JSON file.
    pub async fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PluginAdminError::io_with_path(e, path))?;

        serde_json::from_str(&content).map_err(|e| PluginAdminError::Config {
            message: format!("Failed to parse config from {}: {}", path.display(), e),
        })
    }
}

#[async_trait]
impl ConfigReader for AdminConfig {
    async fn version(&self) -> Result<String> {
        Ok(self.version.clone())
    }

    async fn submit_plugin_usage(&self) -> Result<i64> {
        Ok(self.submit_plugin_usage)
    }

    async fn active_plugins_pinned(&self) -> Result<bool> {
        Ok(self.plugins.active.is_some())
    }
}

/// A [`ConfigReader`] backed by a JSON file that is re-read on every access.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    path: PathBuf,
}

impl ConfigFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn current(&self) -> Result<AdminConfig> {
        debug!("Reading config from {}", self.path.display());
        AdminConfig::load(&self.path).await
    }
}

#[async_trait]
impl ConfigReader for ConfigFile {
    async fn version(&self) -> Result<String> {
        self.current().await?.version().await
    }

    async fn submit_plugin_usage(&self) -> Result<i64> {
        self.current().await?.submit_plugin_usage().await
    }

    async fn active_plugins_pinned(&self) -> Result<bool> {
        self.current().await?.active_plugins_pinned().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_admin_config_reader() {
        let config = AdminConfig::new("3.2.0");
        assert_eq!(config.version().await.unwrap(), "3.2.0");
        assert_eq!(config.submit_plugin_usage().await.unwrap(), 0);
        assert!(!config.active_plugins_pinned().await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_pinned_list_still_pins() {
        let config: AdminConfig =
            serde_json::from_str(r#"{"version": "1.0.0", "plugins": {"active": []}}"#).unwrap();
        assert!(config.active_plugins_pinned().await.unwrap());
    }

    #[tokio::test]
    async fn test_absent_keys_use_defaults() {
        let config: AdminConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.version().await.unwrap(), "");
        assert_eq!(config.submit_plugin_usage().await.unwrap(), 0);
        assert!(!config.active_plugins_pinned().await.unwrap());
    }

    #[tokio::test]
    async fn test_config_file_rereads_on_every_access() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, r#"{"version": "1.0.0", "submitPluginUsage": 1}"#).unwrap();

        let reader = ConfigFile::new(&path);
        assert_eq!(reader.version().await.unwrap(), "1.0.0");
        assert_eq!(reader.submit_plugin_usage().await.unwrap(), 1);

        std::fs::write(
            &path,
            r#"{"version": "1.1.0", "plugins": {"active": ["a"]}}"#,
        )
        .unwrap();
        assert_eq!(reader.version().await.unwrap(), "1.1.0");
        assert!(reader.active_plugins_pinned().await.unwrap());
    }

    #[tokio::test]
    async fn test_config_file_missing_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let reader = ConfigFile::new(temp_dir.path().join("absent.json"));
        let err = reader.version().await.unwrap_err();
        assert!(matches!(err, PluginAdminError::Io { .. }));
    }

    #[tokio::test]
    async fn test_config_file_malformed_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AdminConfig::load(&path).await.unwrap_err();
        assert!(matches!(err, PluginAdminError::Config { .. }));
    }
}
