//! HTTP request handlers.

mod plugins;

pub use plugins::get_plugins;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plugin_admin::PluginAdminError;
use serde_json::json;
use tracing::error;

/// Health check endpoint.
pub async fn handle_health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

/// A failed request, answered with a JSON error body.
#[derive(Debug)]
pub struct ApiError(pub PluginAdminError);

impl From<PluginAdminError> for ApiError {
    fn from(err: PluginAdminError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!("Request failed: {}", self.0.chain());
        let status =
            StatusCode::from_u16(self.0.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (
            status,
            Json(json!({
                "success": false,
                "error": self.0.to_string()
            })),
        )
            .into_response()
    }
}
