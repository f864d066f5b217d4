//! Plugin Admin - aggregation of plugin catalog data for the admin panel.
//!
//! This crate combines the compatible plugin listing, the full listing and
//! the trending scores into the view-model rendered by the admin plugins
//! page. It has no HTTP layer of its own; see the `plugin-admin-server`
//! crate for that.
//!
//! # Example
//!
//! ```rust,ignore
//! use plugin_admin::{CatalogFile, ConfigFile, PluginViewModelBuilder};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> plugin_admin::Result<()> {
//!     let catalog = Arc::new(CatalogFile::new("catalog.json"));
//!     let builder = PluginViewModelBuilder::new(
//!         catalog.clone(),
//!         catalog,
//!         Arc::new(ConfigFile::new("config.json")),
//!     );
//!
//!     let view = builder.build().await?;
//!     println!("{} plugins installed", view.installed_count);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod models;
pub mod plugins;

pub use config::{AdminConfig, ConfigFile, ConfigReader, ServerConfig};
pub use error::{PluginAdminError, Result};
pub use models::{PluginRecord, PluginViewModel, TrendingEntry};
pub use plugins::{
    CatalogFile, CatalogSnapshot, PluginLister, PluginViewModelBuilder, StaticCatalog,
    TrendingFailurePolicy, TrendingLister,
};
