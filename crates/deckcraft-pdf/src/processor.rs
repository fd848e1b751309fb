//! Single-file ingestion path.
//!
//! `PdfProcessor::process` is the one code path for PDF ingestion; the
//! API's batch endpoint is a parallel map over it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use uuid::Uuid;

use crate::extract::{count_pages, extract_text, looks_like_pdf};
use crate::ocr::{OcrEngine, OCR_ERROR};
use crate::{PdfError, MAX_PDF_BYTES, MIN_TEXT_CHARS};

/// Caller-supplied tags attached to a processed document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentTags {
    #[serde(default)]
    pub industry: Option<String>,
    #[serde(default)]
    pub geography: Option<String>,
}

/// Metadata recorded for every processed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PdfMetadata {
    pub industry: Option<String>,
    pub geography: Option<String>,
    pub page_count: usize,
    pub file_size: usize,
    pub extracted_at: DateTime<Utc>,
    pub processing_time_ms: u64,
}

/// Result of ingesting one PDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessedPdf {
    pub id: Uuid,
    pub filename: String,
    pub text: String,
    /// Reserved: image extraction is not implemented.
    pub images: Vec<String>,
    /// Empty unless the low-text heuristic flagged the document.
    pub ocr_text: String,
    pub metadata: PdfMetadata,
}

impl ProcessedPdf {
    /// True when the document was flagged as image-based.
    pub fn needs_ocr(&self) -> bool {
        !self.ocr_text.is_empty()
    }
}

/// PDF ingestion engine.
#[derive(Debug, Clone)]
pub struct PdfProcessor {
    max_bytes: usize,
    ocr: OcrEngine,
}

impl Default for PdfProcessor {
    fn default() -> Self {
        Self::new(MAX_PDF_BYTES)
    }
}

impl PdfProcessor {
    pub fn new(max_bytes: usize) -> Self {
        Self {
            max_bytes,
            ocr: OcrEngine::new(),
        }
    }

    pub fn max_bytes(&self) -> usize {
        self.max_bytes
    }

    pub fn ocr(&self) -> &OcrEngine {
        &self.ocr
    }

    /// Ingest one PDF held in memory.
    ///
    /// Extracts text and page count, flags image-based documents, and
    /// records processing metadata. CPU-bound; the server runs it on a
    /// blocking thread.
    pub fn process(
        &self,
        bytes: &[u8],
        filename: &str,
        tags: &DocumentTags,
    ) -> Result<ProcessedPdf, PdfError> {
        let started = Instant::now();
        let extracted_at = Utc::now();

        if bytes.is_empty() {
            return Err(PdfError::Empty);
        }
        if bytes.len() > self.max_bytes {
            return Err(PdfError::TooLarge {
                size: bytes.len(),
                limit: self.max_bytes,
            });
        }
        if !looks_like_pdf(bytes) {
            return Err(PdfError::NotAPdf);
        }

        let text = extract_text(bytes)?;
        let page_count = count_pages(bytes).unwrap_or_else(|e| {
            tracing::warn!(filename, error = %e, "page count failed, defaulting to 0");
            0
        });

        // Very little extracted text means the PDF is likely image-based.
        // OCR is not performed; the document is only flagged.
        let ocr_text = if text.chars().count() < MIN_TEXT_CHARS {
            tracing::info!(
                filename,
                chars = text.chars().count(),
                "PDF appears to be image-based, flagging for OCR"
            );
            match self.ocr.recognize(bytes) {
                Ok(marker) => marker,
                Err(e) => {
                    tracing::error!(filename, error = %e, "OCR flagging failed");
                    OCR_ERROR.to_string()
                }
            }
        } else {
            String::new()
        };

        Ok(ProcessedPdf {
            id: Uuid::new_v4(),
            filename: filename.to_string(),
            text,
            images: Vec::new(),
            ocr_text,
            metadata: PdfMetadata {
                industry: tags.industry.clone(),
                geography: tags.geography.clone(),
                page_count,
                file_size: bytes.len(),
                extracted_at,
                processing_time_ms: started.elapsed().as_millis() as u64,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lopdf::dictionary;
    use lopdf::{Document, Object, Stream};

    /// Build a minimal single-page PDF with the given page content.
    fn minimal_pdf(content: &str) -> Vec<u8> {
        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();
        let font_id = doc.add_object(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        });
        let resources_id = doc.add_object(dictionary! {
            "Font" => dictionary! { "F1" => font_id },
        });
        let ops = format!("BT /F1 12 Tf 72 720 Td ({}) Tj ET", content);
        let content_id = doc.add_object(Stream::new(dictionary! {}, ops.into_bytes()));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
        });
        doc.objects.insert(
            pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => vec![page_id.into()],
                "Count" => 1,
            }),
        );
        let catalog_id = doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        });
        doc.trailer.set("Root", catalog_id);
        let mut out = Vec::new();
        doc.save_to(&mut out).expect("serialize test PDF");
        out
    }

    #[test]
    fn empty_upload_rejected() {
        let p = PdfProcessor::default();
        assert!(matches!(
            p.process(&[], "a.pdf", &DocumentTags::default()),
            Err(PdfError::Empty)
        ));
    }

    #[test]
    fn oversized_upload_rejected() {
        let p = PdfProcessor::new(8);
        let err = p
            .process(b"%PDF-1.5 too big", "a.pdf", &DocumentTags::default())
            .unwrap_err();
        assert!(matches!(err, PdfError::TooLarge { .. }));
    }

    #[test]
    fn non_pdf_rejected_before_parsing() {
        let p = PdfProcessor::default();
        assert!(matches!(
            p.process(b"hello world", "a.txt", &DocumentTags::default()),
            Err(PdfError::NotAPdf)
        ));
    }

    #[test]
    fn low_text_pdf_flagged_for_ocr() {
        let p = PdfProcessor::default();
        let bytes = minimal_pdf("scan");
        let result = p
            .process(&bytes, "scan.pdf", &DocumentTags::default())
            .expect("minimal PDF should process");
        assert!(result.needs_ocr());
        assert!(result.ocr_text.starts_with("[OCR Required]"));
        assert_eq!(result.metadata.page_count, 1);
        assert_eq!(result.metadata.file_size, bytes.len());
        assert!(result.images.is_empty());
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Bytes without the PDF magic never reach the parser.
            #[test]
            fn non_pdf_bytes_rejected(bytes in proptest::collection::vec(any::<u8>(), 1..512)) {
                prop_assume!(!bytes.starts_with(b"%PDF-"));
                let p = PdfProcessor::default();
                let err = p.process(&bytes, "fuzz.bin", &DocumentTags::default()).unwrap_err();
                prop_assert!(matches!(err, PdfError::NotAPdf));
            }

            /// Malformed input never panics, whatever follows the magic.
            #[test]
            fn malformed_pdf_is_an_error_not_a_panic(tail in proptest::collection::vec(any::<u8>(), 0..256)) {
                let mut bytes = b"%PDF-1.5\n".to_vec();
                bytes.extend_from_slice(&tail);
                let p = PdfProcessor::default();
                let _ = p.process(&bytes, "fuzz.pdf", &DocumentTags::default());
            }
        }
    }

    #[test]
    fn text_rich_pdf_not_flagged() {
        let line = "This deck describes quarterly revenue growth across regions. ";
        let bytes = minimal_pdf(&line.repeat(4));
        let p = PdfProcessor::default();
        let result = p
            .process(
                &bytes,
                "deck.pdf",
                &DocumentTags {
                    industry: Some("fintech".into()),
                    geography: Some("EU".into()),
                },
            )
            .expect("minimal PDF should process");
        assert!(!result.needs_ocr());
        assert!(result.text.contains("quarterly revenue"));
        assert_eq!(result.metadata.industry.as_deref(), Some("fintech"));
        assert_eq!(result.metadata.geography.as_deref(), Some("EU"));
    }
}
