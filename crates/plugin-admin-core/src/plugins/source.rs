//! Data source traits consumed by the view-model builder.

use crate::error::Result;
use crate::models::{PluginRecord, TrendingEntry};
use async_trait::async_trait;
use std::sync::Arc;

/// Lists plugins known to the deployment.
#[async_trait]
pub trait PluginLister: Send + Sync {
    /// List plugins.
    ///
    /// `matching = true` restricts the listing to plugins compatible with the
    /// running host version; `false` returns everything. `Ok(None)` means the
    /// source had nothing to report.
    async fn list(&self, matching: bool) -> Result<Option<Vec<PluginRecord>>>;
}

/// Lists popularity scores keyed by plugin id.
#[async_trait]
pub trait TrendingLister: Send + Sync {
    async fn list_trending(&self) -> Result<Vec<TrendingEntry>>;
}

pub type DynPluginLister = Arc<dyn PluginLister>;
pub type DynTrendingLister = Arc<dyn TrendingLister>;
