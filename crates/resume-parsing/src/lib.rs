use std::path::Path;

use thiserror::Error;

pub mod address;
pub mod extractor;
pub mod name;
pub mod phone;
pub mod roles;
pub mod tokenizer;

pub use extractor::ResumeExtractor;
pub use roles::{ROLE_PATTERNS, RoleFamily, RoleMatch, RoleMatcher, RolePattern, TokenConstraint};
pub use tokenizer::{Token, tokenize};
// Re-export domain types from core (canonical definitions live there)
pub use resume_core::{
    BackendError, EntityLabel, EntityOracle, EntitySpan, OracleError, PdfBackend, ResumeFields,
};

#[derive(Error, Debug)]
pub enum ExtractError {
    #[error(transparent)]
    Backend(#[from] BackendError),
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Extract name, phone, address and role from a PDF resume using the given
/// text backend and entity oracle.
pub async fn extract_resume(
    pdf_path: &Path,
    backend: &dyn PdfBackend,
    oracle: &dyn EntityOracle,
) -> Result<ResumeFields, ExtractError> {
    ResumeExtractor::new()
        .extract(pdf_path, backend, oracle)
        .await
}
