use std::path::Path;

use resume_core::{EntityOracle, EntitySpan, PdfBackend, ResumeFields};

use crate::ExtractError;
use crate::address::extract_address;
use crate::name::extract_name;
use crate::phone::extract_phone;
use crate::roles::RoleMatcher;
use crate::tokenizer::tokenize;

/// Resume field extraction pipeline.
///
/// 1. Extract text from the PDF via a [`PdfBackend`]
/// 2. Label spans with an [`EntityOracle`]
/// 3. Tokenize the text
/// 4. Run the name, phone, address and role extractors independently
#[derive(Debug, Clone, Default)]
pub struct ResumeExtractor {
    roles: RoleMatcher,
}

impl ResumeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom role pattern table instead of the built-in one.
    pub fn with_role_matcher(roles: RoleMatcher) -> Self {
        Self { roles }
    }

    /// Full pipeline for one PDF.
    pub async fn extract(
        &self,
        path: &Path,
        backend: &dyn PdfBackend,
        oracle: &dyn EntityOracle,
    ) -> Result<ResumeFields, ExtractError> {
        let text = self.extract_text(path, backend)?;
        self.extract_from_text(&text, oracle).await
    }

    /// Step 1 on its own; blocking.
    pub fn extract_text(
        &self,
        path: &Path,
        backend: &dyn PdfBackend,
    ) -> Result<String, ExtractError> {
        let text = backend.extract_text(path)?;
        tracing::debug!(path = %path.display(), chars = text.len(), "document text ready");
        Ok(text)
    }

    /// Steps 2–4 over already-extracted text.
    pub async fn extract_from_text(
        &self,
        text: &str,
        oracle: &dyn EntityOracle,
    ) -> Result<ResumeFields, ExtractError> {
        let mut spans = oracle.recognize(text).await?;
        spans.sort_by_key(|s| s.start);
        tracing::debug!(oracle = oracle.name(), spans = spans.len(), "entities labeled");
        Ok(self.extract_fields(text, &spans))
    }

    /// Steps 3–4: pure field extraction over text and oracle spans.
    pub fn extract_fields(&self, text: &str, spans: &[EntitySpan]) -> ResumeFields {
        let tokens = tokenize(text);

        let fields = ResumeFields {
            name: extract_name(spans),
            phone: extract_phone(text, &tokens),
            address: extract_address(spans),
            role: self.roles.find_role(text, &tokens),
        };

        tracing::debug!(
            tokens = tokens.len(),
            name = fields.name.is_some(),
            phone = fields.phone.is_some(),
            address = fields.address.is_some(),
            role = fields.role.is_some(),
            "fields extracted"
        );
        fields
    }
}
