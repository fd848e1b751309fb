//! HTTP route handlers.

pub mod api;
pub mod health;
pub mod pdf;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Handler: GET /
///
/// Service banner with the endpoint map.
pub async fn root() -> Json<Value> {
    Json(json!({
        "message": "DeckCraft AI Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "status": "active",
        "endpoints": {
            "health": "/health",
            "api": "/api/v1",
            "pdf": "/api/v1/pdf",
            "app": "/app"
        },
        "features": ["PDF Ingestion", "Text Extraction", "OCR Processing", "Metadata Tagging"]
    }))
}

/// Fallback handler for unknown routes.
pub async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": true,
            "message": "Route not found",
            "available_endpoints": [
                "GET /",
                "GET /app",
                "GET /health",
                "GET /health/detailed",
                "GET /api/v1",
                "POST /api/v1/pdf/upload",
                "POST /api/v1/pdf/batch",
                "POST /api/v1/pdf/ocr",
                "GET /api/v1/pdf/health"
            ]
        })),
    )
}
