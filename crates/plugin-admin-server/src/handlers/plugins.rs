//! Admin plugins page handler.

use super::ApiError;
use crate::server::AppState;
use axum::{extract::State, response::Response};
use plugin_admin::ServerConfig;
use std::sync::Arc;
use tracing::debug;

pub async fn get_plugins(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let view = state.view_builder.build().await?;
    debug!(
        "Rendering {} ({} installed, {} trending)",
        ServerConfig::PLUGINS_TEMPLATE,
        view.installed_count,
        view.trending.len()
    );
    Ok(state.renderer.render(ServerConfig::PLUGINS_TEMPLATE, &view))
}
