//! Router configuration for the Web API.

use axum::{
    http::StatusCode,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::services::ServeFile;
use tower_http::trace::TraceLayer;

use crate::config::WebConfig;

use super::handlers::{
    create_reply, create_thread, delete_reply, delete_thread, get_thread, list_threads,
    report_reply, report_thread, AppState,
};
use super::middleware::{create_cors_layer, security_headers};

/// Create the main router: API routes, static view pages and middleware.
pub fn create_router(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    let api_routes = Router::new()
        .route(
            "/threads/:board",
            get(list_threads)
                .post(create_thread)
                .put(report_thread)
                .delete(delete_thread),
        )
        .route(
            "/replies/:board",
            get(get_thread)
                .post(create_reply)
                .put(report_reply)
                .delete(delete_reply),
        );

    Router::new()
        .nest("/api", api_routes)
        .merge(create_views_router(&config.views_path))
        .merge(create_health_router())
        .fallback(not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(&config.cors_origins))
                .layer(middleware::from_fn(security_headers)),
        )
        .with_state(app_state)
}

/// Create the router serving the static board and thread view pages.
fn create_views_router(views_path: &str) -> Router<Arc<AppState>> {
    let index = ServeFile::new(format!("{views_path}/index.html"));
    let board = ServeFile::new(format!("{views_path}/board.html"));
    let thread = ServeFile::new(format!("{views_path}/thread.html"));

    // POST redirects target "/b/{board}/" with a trailing slash, so both
    // spellings of the board view are routed.
    Router::new()
        .route_service("/", index)
        .route_service("/b/:board", board.clone())
        .route_service("/b/:board/", board)
        .route_service("/b/:board/:thread_id", thread)
}

/// Create a health check router.
pub fn create_health_router() -> Router<Arc<AppState>> {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Plain text 404 for unmatched routes.
async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
