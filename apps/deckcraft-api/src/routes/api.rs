//! API index and placeholder endpoints for future AI features.

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

/// Handler: GET /api/v1
pub async fn index() -> Json<Value> {
    Json(json!({
        "name": "DeckCraft AI API",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "AI-powered pitch deck analysis and content generation platform",
        "endpoints": {
            "pdf": {
                "upload": "POST /api/v1/pdf/upload",
                "batch": "POST /api/v1/pdf/batch",
                "ocr": "POST /api/v1/pdf/ocr",
                "health": "GET /api/v1/pdf/health"
            },
            "health": {
                "basic": "GET /health",
                "detailed": "GET /health/detailed"
            },
            "generate": {
                "outline": "POST /api/v1/generate/outline",
                "content": "POST /api/v1/generate/content",
                "deck": "POST /api/v1/generate/deck"
            }
        },
        "features": [
            "PDF text extraction via pdf-extract",
            "Image-based PDF detection",
            "Batch processing support",
            "Metadata tagging"
        ],
        "limits": {
            "max_file_size": "100MB",
            "max_batch_size": 10,
            "supported_formats": ["PDF", "Images"]
        }
    }))
}

fn coming_soon(feature: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_IMPLEMENTED,
        Json(json!({
            "error": false,
            "message": format!("{} coming soon!", feature),
            "status": "not_implemented"
        })),
    )
}

/// Handler: POST /api/v1/generate/outline
pub async fn generate_outline() -> (StatusCode, Json<Value>) {
    coming_soon("Outline generation")
}

/// Handler: POST /api/v1/generate/content
pub async fn generate_content() -> (StatusCode, Json<Value>) {
    coming_soon("Content generation")
}

/// Handler: POST /api/v1/generate/deck
pub async fn generate_deck() -> (StatusCode, Json<Value>) {
    coming_soon("Full deck generation")
}
