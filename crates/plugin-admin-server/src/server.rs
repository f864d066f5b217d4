//! HTTP server implementation using Axum.

use crate::handlers::{get_plugins, handle_health};
use crate::render::ViewRenderer;
use axum::{routing::get, Router};
use plugin_admin::{PluginViewModelBuilder, ServerConfig};
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Application state shared across handlers.
pub struct AppState {
    /// Builds the admin plugins view for each request
    pub view_builder: PluginViewModelBuilder,
    /// Renders views into responses
    pub renderer: Arc<dyn ViewRenderer>,
}

/// Build the router with all routes attached.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(ServerConfig::HEALTH_ROUTE, get(handle_health))
        .route(ServerConfig::PLUGINS_ROUTE, get(get_plugins))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(state)
}

/// Start the HTTP server.
///
/// Returns the actual address the server is bound to (useful when port=0).
pub async fn start_server(
    view_builder: PluginViewModelBuilder,
    renderer: Arc<dyn ViewRenderer>,
    host: &str,
    port: u16,
) -> anyhow::Result<SocketAddr> {
    let state = Arc::new(AppState {
        view_builder,
        renderer,
    });
    let app = router(state);

    // Parse the address
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    // Bind to the address
    let listener = tokio::net::TcpListener::bind(addr).await?;
    let actual_addr = listener.local_addr()?;

    info!("Server listening on {}", actual_addr);

    // Spawn the server in the background
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
        }
    });

    Ok(actual_addr)
}
