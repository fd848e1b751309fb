//! Router assembly, shared between `main` and the integration tests.

use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::routes;
use crate::state::AppState;

/// Headroom on top of the upload limit for multipart framing.
const BODY_LIMIT_SLACK: usize = 1024 * 1024;

pub fn app(state: Arc<AppState>) -> Router {
    // Permissive CORS for development; production serves same-origin
    // clients only.
    let cors = if state.config.environment.is_production() {
        CorsLayer::new()
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let body_limit = state.config.max_upload_bytes + BODY_LIMIT_SLACK;
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(routes::root))
        // Landing page
        .nest_service("/app", ServeDir::new(static_dir))
        // Health
        .route("/health", get(routes::health::basic))
        .route("/health/detailed", get(routes::health::detailed))
        // API index
        .route("/api/v1", get(routes::api::index))
        // PDF ingestion
        .route("/api/v1/pdf/upload", post(routes::pdf::upload))
        .route("/api/v1/pdf/batch", post(routes::pdf::batch))
        .route("/api/v1/pdf/ocr", post(routes::pdf::ocr))
        .route("/api/v1/pdf/health", get(routes::pdf::health))
        // Future AI features (501 placeholders)
        .route("/api/v1/generate/outline", post(routes::api::generate_outline))
        .route("/api/v1/generate/content", post(routes::api::generate_content))
        .route("/api/v1/generate/deck", post(routes::api::generate_deck))
        .fallback(routes::not_found)
        // Middleware
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
