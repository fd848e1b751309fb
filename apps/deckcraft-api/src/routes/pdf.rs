//! PDF ingestion endpoints: single upload, batch upload, image OCR,
//! and the PDF subsystem health check.

use std::sync::Arc;
use std::time::Instant;

use anyhow::anyhow;
use axum::{
    extract::{Multipart, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::task::JoinSet;
use tracing::{info, warn};

use deckcraft_pdf::{DocumentTags, ProcessedPdf};

use crate::error::ApiError;
use crate::state::AppState;

/// Query parameters accepted by the single-upload endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct UploadQuery {
    pub industry: Option<String>,
    pub geography: Option<String>,
}

impl UploadQuery {
    fn into_tags(self) -> DocumentTags {
        DocumentTags {
            industry: self.industry.filter(|s| !s.is_empty()),
            geography: self.geography.filter(|s| !s.is_empty()),
        }
    }
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub message: String,
    pub data: ProcessedPdf,
    pub processing: ProcessingSummary,
}

#[derive(Serialize)]
pub struct ProcessingSummary {
    pub time_ms: u64,
    pub text_length: usize,
    pub has_ocr: bool,
}

/// Handler: POST /api/v1/pdf/upload
///
/// Multipart upload with file field `pdf`; `industry` and `geography`
/// query parameters become document tags.
pub async fn upload(
    State(state): State<Arc<AppState>>,
    Query(query): Query<UploadQuery>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    let mut upload = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::Multipart)?
    {
        if field.file_name().is_none() {
            continue;
        }
        let name = field.name().unwrap_or_default().to_string();
        if name != "pdf" {
            return Err(ApiError::InvalidRequest(format!(
                "Expected field name \"pdf\", but received \"{}\"",
                name
            )));
        }
        let filename = field.file_name().unwrap_or("upload.pdf").to_string();
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.contains("pdf") {
            return Err(ApiError::InvalidRequest(format!(
                "Only PDF files are allowed, received \"{}\"",
                content_type
            )));
        }
        let bytes = field
            .bytes()
            .await
            .map_err(ApiError::Multipart)?;
        upload = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = upload.ok_or_else(|| {
        ApiError::InvalidRequest(
            "No PDF file provided. Please upload a file with field name \"pdf\"".to_string(),
        )
    })?;

    info!(filename, size = bytes.len(), "Processing PDF upload");

    let tags = query.into_tags();
    let processor = state.processor.clone();
    let result = tokio::task::spawn_blocking(move || processor.process(&bytes, &filename, &tags))
        .await
        .map_err(|e| ApiError::Internal(anyhow!(e)))??;

    Ok(Json(UploadResponse {
        success: true,
        message: "PDF processed successfully".to_string(),
        processing: ProcessingSummary {
            time_ms: result.metadata.processing_time_ms,
            text_length: result.text.len(),
            has_ocr: result.needs_ocr(),
        },
        data: result,
    }))
}

#[derive(Serialize)]
pub struct BatchResponse {
    pub success: bool,
    pub message: String,
    pub data: BatchData,
}

#[derive(Serialize)]
pub struct BatchData {
    pub successful: Vec<ProcessedPdf>,
    pub failed: Vec<BatchFailure>,
    pub summary: BatchSummary,
}

#[derive(Serialize)]
pub struct BatchFailure {
    pub filename: String,
    pub error: String,
}

#[derive(Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub successful: usize,
    pub failed: usize,
    pub total_processing_time_ms: u64,
    pub average_processing_time_ms: u64,
}

/// Handler: POST /api/v1/pdf/batch
///
/// Multipart upload with file fields `pdfs` (up to the batch limit).
/// Text fields become tags shared by every file. Files are processed
/// concurrently; a failing file is reported, not fatal.
pub async fn batch(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<BatchResponse>, ApiError> {
    let mut files: Vec<(String, axum::body::Bytes)> = Vec::new();
    let mut tags = DocumentTags::default();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::Multipart)?
    {
        if field.file_name().is_some() {
            if field.name() != Some("pdfs") {
                continue;
            }
            let filename = field.file_name().unwrap_or("upload.pdf").to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            if !content_type.contains("pdf") {
                return Err(ApiError::InvalidRequest(format!(
                    "File \"{}\" is not a PDF (received \"{}\")",
                    filename, content_type
                )));
            }
            let bytes = field
                .bytes()
                .await
                .map_err(ApiError::Multipart)?;
            files.push((filename, bytes));
        } else {
            let name = field.name().unwrap_or_default().to_string();
            let value = field
                .text()
                .await
                .map_err(ApiError::Multipart)?;
            match name.as_str() {
                "industry" => tags.industry = Some(value),
                "geography" => tags.geography = Some(value),
                other => warn!(field = other, "Ignoring unknown batch field"),
            }
        }
    }

    if files.is_empty() {
        return Err(ApiError::InvalidRequest(
            "No PDF files provided. Please upload files with field name \"pdfs\"".to_string(),
        ));
    }
    if files.len() > state.config.max_batch_files {
        return Err(ApiError::InvalidRequest(format!(
            "Too many files. Maximum {} files per batch, received {}",
            state.config.max_batch_files,
            files.len()
        )));
    }

    let total = files.len();
    info!(total, "Processing PDF batch");

    // Fan out over independent files; results are re-ordered to match
    // the upload order.
    let mut set = JoinSet::new();
    for (idx, (filename, bytes)) in files.into_iter().enumerate() {
        let processor = state.processor.clone();
        let tags = tags.clone();
        set.spawn_blocking(move || {
            let outcome = processor.process(&bytes, &filename, &tags);
            (idx, filename, outcome)
        });
    }

    let mut outcomes = Vec::with_capacity(total);
    while let Some(joined) = set.join_next().await {
        let (idx, filename, outcome) = joined.map_err(|e| ApiError::Internal(anyhow!(e)))?;
        outcomes.push((idx, filename, outcome));
    }
    outcomes.sort_by_key(|(idx, _, _)| *idx);

    let mut successful = Vec::new();
    let mut failed = Vec::new();
    for (_, filename, outcome) in outcomes {
        match outcome {
            Ok(doc) => successful.push(doc),
            Err(e) => failed.push(BatchFailure {
                filename,
                error: e.to_string(),
            }),
        }
    }

    let total_time: u64 = successful
        .iter()
        .map(|d| d.metadata.processing_time_ms)
        .sum();
    let average_time = if successful.is_empty() {
        0
    } else {
        total_time / successful.len() as u64
    };

    Ok(Json(BatchResponse {
        success: true,
        message: format!("Processed {} of {} files", successful.len(), total),
        data: BatchData {
            summary: BatchSummary {
                total,
                successful: successful.len(),
                failed: failed.len(),
                total_processing_time_ms: total_time,
                average_processing_time_ms: average_time,
            },
            successful,
            failed,
        },
    }))
}

#[derive(Serialize)]
pub struct OcrResponse {
    pub success: bool,
    pub message: String,
    pub data: OcrData,
}

#[derive(Serialize)]
pub struct OcrData {
    pub filename: String,
    pub text: String,
    pub text_length: usize,
    pub processing_time_ms: u64,
}

/// Handler: POST /api/v1/pdf/ocr
///
/// Multipart upload with file field `image`. Routed through the OCR
/// stub, so the returned text is the OCR-required marker.
pub async fn ocr(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<OcrResponse>, ApiError> {
    let mut image = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(ApiError::Multipart)?
    {
        if field.file_name().is_none() || field.name() != Some("image") {
            continue;
        }
        let content_type = field.content_type().unwrap_or_default().to_string();
        if !content_type.starts_with("image/") {
            return Err(ApiError::InvalidRequest(format!(
                "Only image files are allowed, received \"{}\"",
                content_type
            )));
        }
        let filename = field.file_name().unwrap_or("image").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(ApiError::Multipart)?;
        image = Some((filename, bytes));
        break;
    }

    let (filename, bytes) = image.ok_or_else(|| {
        ApiError::InvalidRequest(
            "No image file provided. Please upload a file with field name \"image\"".to_string(),
        )
    })?;

    let started = Instant::now();
    let text = state.processor.ocr().recognize(&bytes)?;
    let elapsed = started.elapsed().as_millis() as u64;

    Ok(Json(OcrResponse {
        success: true,
        message: "Image OCR completed".to_string(),
        data: OcrData {
            filename,
            text_length: text.len(),
            text,
            processing_time_ms: elapsed,
        },
    }))
}

/// Handler: GET /api/v1/pdf/health
pub async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "services": {
            "pdf-extract": "ready",
            "ocr": if state.processor.ocr().is_ready() { "stub" } else { "unavailable" }
        },
        "capabilities": [
            "PDF text extraction",
            "Image-based PDF detection",
            "Batch processing",
            "Metadata tagging"
        ],
        "limits": {
            "max_file_size_bytes": state.processor.max_bytes(),
            "max_batch_size": state.config.max_batch_files,
            "supported_formats": ["PDF", "Images for OCR"]
        },
        "tech_stack": {
            "pdf_engine": "pdf-extract",
            "page_counter": "lopdf",
            "ocr_engine": "stub",
            "web_framework": "axum"
        }
    }))
}
