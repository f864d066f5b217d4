//! Plugin catalog records.

use crate::error::{PluginAdminError, Result};
use serde::{Deserialize, Serialize};

/// A plugin as reported by a plugin lister.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PluginRecord {
    /// Unique key, matched against trending labels.
    pub id: String,
    /// Package name, matched between the compatible and full listings.
    pub name: String,
    #[serde(default)]
    pub installed: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub outdated: bool,
    /// Trending score, filled in while building the admin view.
    #[serde(default)]
    pub downloads: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Installed version.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Newest version available upstream.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
}

impl PluginRecord {
    /// Create a record with the given id and package name and every flag off.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            ..Default::default()
        }
    }

    /// Whether the record is installed and enabled.
    pub fn is_active(&self) -> bool {
        self.installed && self.active
    }

    /// Whether the record is installed and has a newer version available.
    pub fn needs_upgrade(&self) -> bool {
        self.installed && self.outdated
    }

    /// Check the fields the aggregation keys on.
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(PluginAdminError::Validation {
                field: "id".to_string(),
                message: format!("plugin '{}' has an empty id", self.name),
            });
        }
        if self.name.trim().is_empty() {
            return Err(PluginAdminError::Validation {
                field: "name".to_string(),
                message: format!("plugin '{}' has an empty name", self.id),
            });
        }
        Ok(())
    }
}

/// One popularity score keyed by plugin id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingEntry {
    /// Plugin id.
    pub label: String,
    /// Popularity score.
    pub value: u64,
}

impl TrendingEntry {
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(PluginAdminError::Validation {
                field: "label".to_string(),
                message: "trending entry has an empty label".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flags_default_to_false() {
        let record: PluginRecord =
            serde_json::from_str(r#"{"id": "p1", "name": "plugin-a"}"#).unwrap();
        assert!(!record.installed);
        assert!(!record.active);
        assert!(!record.outdated);
        assert_eq!(record.downloads, 0);
        assert_eq!(record.description, None);
    }

    #[test]
    fn test_flag_helpers() {
        let mut record = PluginRecord::new("p1", "plugin-a");
        record.active = true;
        assert!(!record.is_active());

        record.installed = true;
        assert!(record.is_active());
        assert!(!record.needs_upgrade());

        record.outdated = true;
        assert!(record.needs_upgrade());
    }

    #[test]
    fn test_validate_rejects_blank_keys() {
        assert!(PluginRecord::new("p1", "plugin-a").validate().is_ok());
        assert!(PluginRecord::new("", "plugin-a").validate().is_err());
        assert!(PluginRecord::new("p1", "  ").validate().is_err());
        assert!(TrendingEntry::new("", 3).validate().is_err());
    }

    #[test]
    fn test_optional_fields_skipped_when_absent() {
        let json = serde_json::to_value(PluginRecord::new("p1", "plugin-a")).unwrap();
        assert!(json.get("description").is_none());
        assert_eq!(json["downloads"], 0);
    }
}
