use std::path::Path;

use mupdf::{Document, TextPageFlags};

use resume_core::{BackendError, PdfBackend};

/// MuPDF-based implementation of [`PdfBackend`].
///
/// This crate is the sole AGPL island: it isolates the mupdf dependency
/// (which is AGPL-3.0) so that the extraction heuristics do not
/// transitively depend on it.
///
/// Unlike reference-list extraction, nothing is cropped from the page:
/// resumes put the name, phone number and address in the header block.
#[derive(Debug, Default)]
pub struct MupdfBackend;

impl MupdfBackend {
    pub fn new() -> Self {
        Self
    }
}

impl PdfBackend for MupdfBackend {
    fn extract_text(&self, path: &Path) -> Result<String, BackendError> {
        // Surface missing/unreadable files as plain IO errors before MuPDF
        // turns them into an opaque "cannot open document".
        std::fs::File::open(path)?;

        let path_str = path
            .to_str()
            .ok_or_else(|| BackendError::OpenError("invalid path encoding".into()))?;

        let document =
            Document::open(path_str).map_err(|e| BackendError::OpenError(e.to_string()))?;

        let mut text = String::new();
        let mut page_count = 0usize;

        for page_result in document
            .pages()
            .map_err(|e| BackendError::ExtractionError(e.to_string()))?
        {
            let page = page_result.map_err(|e| BackendError::ExtractionError(e.to_string()))?;
            let text_page = page
                .to_text_page(TextPageFlags::empty())
                .map_err(|e| BackendError::ExtractionError(e.to_string()))?;

            let mut lines = Vec::new();
            for block in text_page.blocks() {
                for line in block.lines() {
                    let line_text: String = line
                        .chars()
                        .map(|c| c.char().unwrap_or('\u{FFFD}'))
                        .collect();
                    lines.push(line_text);
                }
            }

            text.push_str(&lines.join("\n"));
            text.push('\n');
            page_count += 1;
        }

        tracing::debug!(
            path = %path.display(),
            pages = page_count,
            chars = text.len(),
            "extracted PDF text"
        );
        Ok(text)
    }
}
