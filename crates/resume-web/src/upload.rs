use axum::extract::Multipart;

/// Why an upload was rejected before extraction.
#[derive(Debug, PartialEq, Eq)]
pub enum UploadError {
    NoFile,
    NotPdf,
    Malformed(String),
}

impl UploadError {
    /// Client-facing message.
    pub fn message(&self) -> &str {
        match self {
            UploadError::NoFile => "No file uploaded",
            UploadError::NotPdf => "Only PDF files are allowed",
            UploadError::Malformed(_) => "File upload error",
        }
    }
}

/// An uploaded PDF with its data and metadata.
pub struct UploadedFile {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Pull the `file` field out of a multipart form; other fields are drained.
pub async fn parse_multipart(mut multipart: Multipart) -> Result<UploadedFile, UploadError> {
    let mut file: Option<UploadedFile> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| UploadError::Malformed(e.to_string()))?
    {
        let name = field.name().unwrap_or("").to_string();
        if name != "file" {
            let _ = field.bytes().await;
            continue;
        }

        let filename = field.file_name().unwrap_or("upload.pdf").to_string();
        let content_type = field.content_type().map(str::to_string);
        let data = field
            .bytes()
            .await
            .map_err(|e| UploadError::Malformed(e.to_string()))?
            .to_vec();

        if !is_pdf(content_type.as_deref(), &data) {
            return Err(UploadError::NotPdf);
        }
        file = Some(UploadedFile { filename, data });
    }

    file.ok_or(UploadError::NoFile)
}

/// Accept `application/pdf` uploads, or anything carrying the `%PDF-` magic
/// bytes whatever the browser claimed.
fn is_pdf(content_type: Option<&str>, data: &[u8]) -> bool {
    let declared = content_type
        .and_then(|ct| ct.split(';').next())
        .map(str::trim)
        .is_some_and(|ct| ct.eq_ignore_ascii_case("application/pdf"));
    declared || data.starts_with(b"%PDF-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_content_type_accepted() {
        assert!(is_pdf(Some("application/pdf"), b"anything"));
        assert!(is_pdf(Some("application/pdf; charset=binary"), b""));
    }

    #[test]
    fn test_generic_type_uses_magic() {
        assert!(is_pdf(None, b"%PDF-1.7\n"));
        assert!(is_pdf(Some("application/octet-stream"), b"%PDF-1.4"));
        assert!(!is_pdf(None, b"PK\x03\x04"));
    }

    #[test]
    fn test_other_types_rejected() {
        assert!(!is_pdf(Some("text/plain"), b"hello"));
        assert!(!is_pdf(Some("image/png"), b"\x89PNG"));
    }

    #[test]
    fn test_magic_overrides_wrong_type() {
        assert!(is_pdf(Some("text/plain"), b"%PDF-1.4"));
    }

    #[test]
    fn test_messages() {
        assert_eq!(UploadError::NoFile.message(), "No file uploaded");
        assert_eq!(UploadError::NotPdf.message(), "Only PDF files are allowed");
        assert_eq!(
            UploadError::Malformed("boundary".into()).message(),
            "File upload error"
        );
    }
}
