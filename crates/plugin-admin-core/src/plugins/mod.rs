//! Plugin sources and the admin plugins view.
//!
//! Sources are consumed through the [`PluginLister`] and [`TrendingLister`]
//! traits. The catalog adapters read a JSON snapshot, either from memory or
//! from a file re-read on every call.

mod catalog;
mod source;
mod view_model;

pub use catalog::{CatalogFile, CatalogSnapshot, StaticCatalog};
pub use source::{DynPluginLister, DynTrendingLister, PluginLister, TrendingLister};
pub use view_model::{classify, PluginViewModelBuilder, TrendingFailurePolicy, ViewSettings};
