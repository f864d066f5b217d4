//! Admin plugins page view-model.
//!
//! [`PluginViewModelBuilder`] fetches the compatible listing, the full
//! listing and the trending scores concurrently, then classifies them into
//! a [`PluginViewModel`].
//!
//! Failure policy:
//! - Plugin listing failures are logged and degrade to an empty list, so a
//!   broken source shows up as "no plugins of that kind".
//! - Trending failures abort the build unless the builder was configured
//!   with [`TrendingFailurePolicy::Degrade`].
//! - Config read failures always abort the build.

use super::source::{DynPluginLister, DynTrendingLister};
use crate::config::ConfigReader;
use crate::error::Result;
use crate::models::{PluginRecord, PluginViewModel, TrendingEntry};
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// What to do when the trending source fails.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TrendingFailurePolicy {
    /// Fail the whole build.
    #[default]
    Propagate,
    /// Log the failure and render without trending plugins.
    Degrade,
}

/// Deployment values stamped onto a view.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ViewSettings {
    pub version: String,
    pub submit_plugin_usage: i64,
    pub can_change_state: bool,
}

/// Builds the admin plugins view from its data sources.
#[derive(Clone)]
pub struct PluginViewModelBuilder {
    plugins: DynPluginLister,
    trending: DynTrendingLister,
    config: Arc<dyn ConfigReader>,
    trending_policy: TrendingFailurePolicy,
}

impl PluginViewModelBuilder {
    pub fn new(
        plugins: DynPluginLister,
        trending: DynTrendingLister,
        config: Arc<dyn ConfigReader>,
    ) -> Self {
        Self {
            plugins,
            trending,
            config,
            trending_policy: TrendingFailurePolicy::default(),
        }
    }

    /// Set how a trending source failure is handled.
    ///
    /// Default: [`TrendingFailurePolicy::Propagate`]
    pub fn trending_policy(mut self, policy: TrendingFailurePolicy) -> Self {
        self.trending_policy = policy;
        self
    }

    /// List plugins, degrading any failure to an empty list.
    pub async fn fetch_plugin_list(&self, matching: bool) -> Vec<PluginRecord> {
        match self.plugins.list(matching).await {
            Ok(records) => records.unwrap_or_default(),
            Err(e) => {
                error!(
                    "Failed to list plugins (matching={}): {}",
                    matching,
                    e.chain()
                );
                Vec::new()
            }
        }
    }

    /// List trending scores, applying the configured failure policy.
    pub async fn fetch_trending(&self) -> Result<Vec<TrendingEntry>> {
        match self.trending.list_trending().await {
            Ok(entries) => Ok(entries),
            Err(e) if self.trending_policy == TrendingFailurePolicy::Degrade => {
                warn!("Failed to list trending plugins: {}", e.chain());
                Ok(Vec::new())
            }
            Err(e) => Err(e),
        }
    }

    /// Read the deployment values for this build.
    async fn settings(&self) -> Result<ViewSettings> {
        Ok(ViewSettings {
            version: self.config.version().await?,
            submit_plugin_usage: self.config.submit_plugin_usage().await?,
            can_change_state: !self.config.active_plugins_pinned().await?,
        })
    }

    /// Fetch all sources and build the view.
    pub async fn build(&self) -> Result<PluginViewModel> {
        let (compatible, all, trending) = futures::join!(
            self.fetch_plugin_list(true),
            self.fetch_plugin_list(false),
            self.fetch_trending(),
        );
        let trending = trending?;
        let settings = self.settings().await?;

        let view = classify(compatible, all, &trending, settings);
        debug!(
            "Built plugin view: {} installed, {} active, {} trending, {} incompatible",
            view.installed_count,
            view.active_count,
            view.trending.len(),
            view.incompatible.len()
        );
        Ok(view)
    }
}

/// Classify fetched listings into a view.
///
/// Trending scores are written into the owned `all` records before any list
/// is derived from them, so a plugin that is both trending and incompatible
/// carries the same `downloads` value in both lists.
pub fn classify(
    compatible: Vec<PluginRecord>,
    mut all: Vec<PluginRecord>,
    trending: &[TrendingEntry],
    settings: ViewSettings,
) -> PluginViewModel {
    // Later entries overwrite earlier ones.
    let scores: HashMap<&str, u64> = trending
        .iter()
        .map(|entry| (entry.label.as_str(), entry.value))
        .collect();

    for plugin in all.iter_mut() {
        if let Some(&score) = scores.get(plugin.id.as_str()) {
            plugin.downloads = score;
        }
    }

    let mut trending_plugins: Vec<PluginRecord> = all
        .iter()
        .filter(|p| scores.contains_key(p.id.as_str()))
        .cloned()
        .collect();
    // Stable: equal scores keep the order of `all`.
    trending_plugins.sort_by(|a, b| b.downloads.cmp(&a.downloads));

    let compatible_names: HashSet<&str> = compatible.iter().map(|p| p.name.as_str()).collect();
    let incompatible: Vec<PluginRecord> = all
        .iter()
        .filter(|p| !compatible_names.contains(p.name.as_str()))
        .cloned()
        .collect();

    let active_count = all.iter().filter(|p| p.is_active()).count();
    let upgrade_count = compatible.iter().filter(|p| p.needs_upgrade()).count();
    let (installed, download): (Vec<_>, Vec<_>) =
        compatible.into_iter().partition(|p| p.installed);
    let installed_count = installed.len();

    PluginViewModel {
        installed,
        installed_count,
        active_count,
        inactive_count: installed_count.saturating_sub(active_count),
        can_change_state: settings.can_change_state,
        upgrade_count,
        download,
        incompatible,
        trending: trending_plugins,
        submit_plugin_usage: settings.submit_plugin_usage,
        version: settings.version,
    }
}
