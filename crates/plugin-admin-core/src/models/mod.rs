//! Data models for the plugin admin view.
//!
//! Field names serialize in camelCase so the rendered view keeps the keys
//! the admin templates already expect.

mod plugin;
mod view;

pub use plugin::*;
pub use view::*;
