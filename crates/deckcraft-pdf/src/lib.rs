//! PDF ingestion engine for DeckCraft AI
//!
//! This crate provides the single-file ingestion path used by the API
//! server: text extraction, page counting, image-based-PDF detection,
//! and the OCR facade (currently a stub that only flags documents as
//! needing OCR).

pub mod error;
pub mod extract;
pub mod ocr;
pub mod processor;

pub use error::PdfError;
pub use extract::{count_pages, extract_text};
pub use ocr::OcrEngine;
pub use processor::{DocumentTags, PdfMetadata, PdfProcessor, ProcessedPdf};

/// Default upload size limit: 100 MiB, mirrored by the API layer.
pub const MAX_PDF_BYTES: usize = 100 * 1024 * 1024;

/// Extracted text shorter than this (after trimming) marks the
/// document as image-based.
pub const MIN_TEXT_CHARS: usize = 100;
