//! Error types for the DeckCraft API

use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use deckcraft_pdf::PdfError;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    #[error(transparent)]
    Pdf(#[from] PdfError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::InvalidRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            // Length-limit failures carry 413; everything else is 400.
            ApiError::Multipart(e) => (
                e.status(),
                format!("Malformed multipart body: {}", e.body_text()),
            ),
            ApiError::Pdf(e) => match e {
                PdfError::TooLarge { size, limit } => (
                    StatusCode::PAYLOAD_TOO_LARGE,
                    format!("File too large: {} bytes (limit {})", size, limit),
                ),
                PdfError::Empty | PdfError::NotAPdf | PdfError::Parse(_) => {
                    (StatusCode::BAD_REQUEST, e.to_string())
                }
                PdfError::Ocr(msg) => {
                    tracing::error!("OCR error: {}", msg);
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "OCR processing failed".to_string(),
                    )
                }
            },
            ApiError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": true,
            "message": message,
            "status": status.as_u16(),
        }));

        (status, body).into_response()
    }
}
