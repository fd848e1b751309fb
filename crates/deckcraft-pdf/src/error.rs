use thiserror::Error;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Failed to parse PDF: {0}")]
    Parse(String),

    #[error("Empty upload")]
    Empty,

    #[error("File too large: {size} bytes (limit {limit})")]
    TooLarge { size: usize, limit: usize },

    #[error("Not a PDF file")]
    NotAPdf,

    #[error("OCR failed: {0}")]
    Ocr(String),
}
