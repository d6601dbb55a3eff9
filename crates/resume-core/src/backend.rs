use std::path::Path;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("failed to open PDF: {0}")]
    OpenError(String),
    #[error("failed to extract text: {0}")]
    ExtractionError(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Trait for PDF text extraction backends.
///
/// Implementors provide the low-level text extraction step; tokenization,
/// entity recognition and field extraction live in
/// `resume_parsing::ResumeExtractor`.
pub trait PdfBackend: Send + Sync {
    /// Extract the full text content of a PDF file, page by page, with
    /// every page followed by a newline.
    fn extract_text(&self, path: &Path) -> Result<String, BackendError>;
}
