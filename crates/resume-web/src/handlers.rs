use std::io::Write;
use std::sync::Arc;

use axum::Json;
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::state::AppState;
use crate::upload::{UploadError, parse_multipart};

const PROCESSING_FAILED: &str = "Failed to process PDF";

fn error_response(status: StatusCode, message: &str) -> Response {
    (status, Json(serde_json::json!({ "error": message }))).into_response()
}

/// `POST /extract`: run the extraction pipeline on an uploaded PDF.
pub async fn extract(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Response {
    let upload = match multipart {
        Ok(multipart) => parse_multipart(multipart).await,
        Err(e) => {
            tracing::debug!(error = %e, "request is not multipart");
            Err(UploadError::NoFile)
        }
    };
    let upload = match upload {
        Ok(upload) => upload,
        Err(e) => {
            if let UploadError::Malformed(ref detail) = e {
                tracing::warn!(error = %detail, "malformed upload");
            }
            return error_response(StatusCode::BAD_REQUEST, e.message());
        }
    };

    tracing::info!(filename = %upload.filename, bytes = upload.data.len(), "received upload");

    // The upload lives in a temp file only for the duration of text
    // extraction; dropping the handle deletes it.
    let blocking_state = Arc::clone(&state);
    let text = tokio::task::spawn_blocking(move || -> anyhow::Result<String> {
        let mut tmp = tempfile::Builder::new()
            .prefix("resume-")
            .suffix(".pdf")
            .tempfile()?;
        tmp.write_all(&upload.data)?;
        tmp.flush()?;
        let text = blocking_state
            .extractor
            .extract_text(tmp.path(), blocking_state.backend.as_ref())?;
        Ok(text)
    })
    .await;

    let text = match text {
        Ok(Ok(text)) => text,
        Ok(Err(e)) => {
            tracing::warn!(error = %e, "text extraction failed");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_FAILED);
        }
        Err(e) => {
            tracing::error!(error = %e, "extraction task panicked");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_FAILED);
        }
    };

    match state
        .extractor
        .extract_from_text(&text, state.oracle.as_ref())
        .await
    {
        Ok(fields) => Json(fields).into_response(),
        Err(e) => {
            tracing::warn!(error = %e, "entity recognition failed");
            error_response(StatusCode::INTERNAL_SERVER_ERROR, PROCESSING_FAILED)
        }
    }
}
