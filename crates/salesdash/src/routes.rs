//! The dashboard's single route.

use crate::error::ServerResult;
use crate::page::Dashboard;
use askama::Template;
use axum::{extract::State, response::Html, routing::get, Router};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

/// Builds the router serving the dashboard at `/`.
pub fn create_router(dashboard: Arc<Dashboard>) -> Router {
    Router::new()
        .route("/", get(dashboard_handler))
        .layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()))
        .with_state(dashboard)
}

/// Renders the dashboard page.
pub async fn dashboard_handler(
    State(dashboard): State<Arc<Dashboard>>,
) -> ServerResult<Html<String>> {
    let page = dashboard.build_page().await;
    Ok(Html(page.render()?))
}
