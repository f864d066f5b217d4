//! View rendering.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use plugin_admin::PluginViewModel;
use serde::Serialize;

/// Turns a named view and its model into an HTTP response.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, template: &str, view: &PluginViewModel) -> Response;
}

/// Body produced by [`JsonViewRenderer`].
#[derive(Debug, Serialize)]
struct RenderedView<'a> {
    template: &'a str,
    data: &'a PluginViewModel,
}

/// Renders views as JSON for a client-side template layer.
pub struct JsonViewRenderer;

impl ViewRenderer for JsonViewRenderer {
    fn render(&self, template: &str, view: &PluginViewModel) -> Response {
        (
            StatusCode::OK,
            Json(RenderedView {
                template,
                data: view,
            }),
        )
            .into_response()
    }
}
