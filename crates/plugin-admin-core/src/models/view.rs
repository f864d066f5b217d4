//! View-model handed to the admin plugins page.

use super::PluginRecord;
use serde::Serialize;

/// Everything the `admin/extend/plugins` view renders.
///
/// Built fresh for each request and not modified after it is rendered.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginViewModel {
    pub installed: Vec<PluginRecord>,
    pub installed_count: usize,
    pub active_count: usize,
    pub inactive_count: usize,
    /// False when the deployment pins the active plugin list.
    pub can_change_state: bool,
    pub upgrade_count: usize,
    pub download: Vec<PluginRecord>,
    pub incompatible: Vec<PluginRecord>,
    pub trending: Vec<PluginRecord>,
    pub submit_plugin_usage: i64,
    pub version: String,
}
