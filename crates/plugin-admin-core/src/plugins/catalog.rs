//! Catalog-backed plugin sources.
//!
//! A catalog is a JSON snapshot holding the compatible listing, the full
//! listing and the trending scores:
//!
//! ```json
//! {
//!   "compatible": [{ "id": "p1", "name": "plugin-a", "installed": true }],
//!   "all": [{ "id": "p1", "name": "plugin-a", "installed": true }],
//!   "trending": [{ "label": "p1", "value": 12 }]
//! }
//! ```
//!
//! Every section is optional. Records are validated when they are handed
//! out, so the builder only ever sees records with a usable `id` and `name`.

use super::source::{PluginLister, TrendingLister};
use crate::error::{PluginAdminError, Result};
use crate::models::{PluginRecord, TrendingEntry};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Parsed contents of a catalog file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compatible: Option<Vec<PluginRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all: Option<Vec<PluginRecord>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trending: Option<Vec<TrendingEntry>>,
}

impl CatalogSnapshot {
    fn plugins(&self, matching: bool) -> Result<Option<Vec<PluginRecord>>> {
        let section = if matching {
            &self.compatible
        } else {
            &self.all
        };

        match section {
            Some(records) => {
                for record in records {
                    record.validate()?;
                }
                Ok(Some(records.clone()))
            }
            None => Ok(None),
        }
    }

    fn trending(&self) -> Result<Vec<TrendingEntry>> {
        let entries = self.trending.clone().unwrap_or_default();
        for entry in &entries {
            entry.validate()?;
        }
        Ok(entries)
    }
}

/// In-memory catalog, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    snapshot: CatalogSnapshot,
}

impl StaticCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_compatible(mut self, records: Vec<PluginRecord>) -> Self {
        self.snapshot.compatible = Some(records);
        self
    }

    pub fn with_all(mut self, records: Vec<PluginRecord>) -> Self {
        self.snapshot.all = Some(records);
        self
    }

    pub fn with_trending(mut self, entries: Vec<TrendingEntry>) -> Self {
        self.snapshot.trending = Some(entries);
        self
    }
}

impl From<CatalogSnapshot> for StaticCatalog {
    fn from(snapshot: CatalogSnapshot) -> Self {
        Self { snapshot }
    }
}

#[async_trait]
impl PluginLister for StaticCatalog {
    async fn list(&self, matching: bool) -> Result<Option<Vec<PluginRecord>>> {
        self.snapshot.plugins(matching)
    }
}

#[async_trait]
impl TrendingLister for StaticCatalog {
    async fn list_trending(&self) -> Result<Vec<TrendingEntry>> {
        self.snapshot.trending()
    }
}

/// Catalog read from a JSON file on every call.
///
/// Each listing call reads and parses the file on its own, and one build
/// issues three of them concurrently. A file rewritten in place while a
/// build is in flight can therefore yield listings from different versions
/// of the catalog; replace the file by rename to keep each read whole.
#[derive(Debug, Clone)]
pub struct CatalogFile {
    path: PathBuf,
}

impl CatalogFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the catalog file.
    pub async fn load(&self) -> Result<CatalogSnapshot> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| PluginAdminError::io_with_path(e, &self.path))?;

        let snapshot: CatalogSnapshot =
            serde_json::from_str(&content).map_err(|e| PluginAdminError::Json {
                message: format!(
                    "Failed to parse plugin catalog from {}: {}",
                    self.path.display(),
                    e
                ),
                source: Some(e),
            })?;

        debug!("Loaded plugin catalog from {}", self.path.display());
        Ok(snapshot)
    }
}

#[async_trait]
impl PluginLister for CatalogFile {
    async fn list(&self, matching: bool) -> Result<Option<Vec<PluginRecord>>> {
        self.load()
            .await
            .and_then(|s| s.plugins(matching))
            .map_err(|e| PluginAdminError::PluginSource {
                matching,
                message: format!("Failed to list plugins from {}", self.path.display()),
                source: Some(Box::new(e)),
            })
    }
}

#[async_trait]
impl TrendingLister for CatalogFile {
    async fn list_trending(&self) -> Result<Vec<TrendingEntry>> {
        self.load().await.and_then(|s| s.trending()).map_err(|e| {
            PluginAdminError::TrendingSource {
                message: format!("Failed to list trending plugins from {}", self.path.display()),
                source: Some(Box::new(e)),
            }
        })
    }
}
