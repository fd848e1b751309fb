//! Text extraction and page counting over in-memory PDFs.
//!
//! Extraction delegates to `pdf-extract`; it handles digital-native PDFs
//! with selectable text. Scanned (image-only) documents come back empty
//! or near-empty, which the processor turns into the OCR-required flag.

use crate::PdfError;

/// Extract the full text of a PDF, trimmed.
///
/// Returns an empty string for image-only documents rather than an
/// error; parse failures on malformed files are errors.
pub fn extract_text(bytes: &[u8]) -> Result<String, PdfError> {
    let text = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| PdfError::Parse(e.to_string()))?;
    Ok(text.trim().to_string())
}

/// Count pages via `lopdf`.
pub fn count_pages(bytes: &[u8]) -> Result<usize, PdfError> {
    let doc = lopdf::Document::load_mem(bytes).map_err(|e| PdfError::Parse(e.to_string()))?;
    Ok(doc.get_pages().len())
}

/// Cheap magic-number check used before handing bytes to the parsers.
pub fn looks_like_pdf(bytes: &[u8]) -> bool {
    bytes.starts_with(b"%PDF-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_number_detected() {
        assert!(looks_like_pdf(b"%PDF-1.7\n..."));
        assert!(!looks_like_pdf(b"PK\x03\x04"));
        assert!(!looks_like_pdf(b""));
    }

    #[test]
    fn garbage_bytes_are_a_parse_error() {
        let err = extract_text(b"definitely not a pdf").unwrap_err();
        assert!(matches!(err, PdfError::Parse(_)));
    }

    #[test]
    fn garbage_bytes_fail_page_count() {
        assert!(count_pages(b"\x00\x01\x02").is_err());
    }
}
