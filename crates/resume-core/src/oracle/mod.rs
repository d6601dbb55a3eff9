//! Entity oracle trait and implementations.
//!
//! The oracle is the pretrained entity-recognition model. The field
//! extractors never look inside it; they only consume the ordered list of
//! labeled spans it returns.

pub mod fixed;
pub mod http;
pub mod rules;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::EntitySpan;
use crate::config_file::{OracleBackendKind, OracleSettings};

pub use fixed::FixedOracle;
pub use http::HttpOracle;
pub use rules::RuleOracle;

#[derive(Error, Debug)]
pub enum OracleError {
    #[error("entity oracle request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("entity oracle returned HTTP {0}")]
    Status(u16),
    #[error("entity oracle returned a malformed response: {0}")]
    Malformed(String),
}

pub type OracleFuture<'a> =
    Pin<Box<dyn Future<Output = Result<Vec<EntitySpan>, OracleError>> + Send + 'a>>;

/// A named-entity recognizer that labels spans of a document.
pub trait EntityOracle: Send + Sync {
    /// Identifier used in logs (e.g. "http:en_core_web_lg", "rules").
    fn name(&self) -> &str;

    /// Label spans in `text`, returned in document order.
    fn recognize<'a>(&'a self, text: &'a str) -> OracleFuture<'a>;
}

/// Build the oracle selected by `settings`.
pub fn build_oracle(settings: &OracleSettings) -> Result<Box<dyn EntityOracle>, OracleError> {
    let oracle: Box<dyn EntityOracle> = match settings.backend {
        OracleBackendKind::Http => Box::new(HttpOracle::new(
            settings.url.clone(),
            settings.model.clone(),
            settings.timeout,
        )?),
        OracleBackendKind::Rules => Box::new(RuleOracle::new()),
    };
    tracing::debug!(oracle = oracle.name(), "entity oracle ready");
    Ok(oracle)
}

/// Sort spans by start offset and drop any span overlapping an earlier one.
pub(crate) fn normalize_spans(mut spans: Vec<EntitySpan>) -> Vec<EntitySpan> {
    spans.sort_by_key(|s| (s.start, std::cmp::Reverse(s.end)));
    let mut out: Vec<EntitySpan> = Vec::with_capacity(spans.len());
    for span in spans {
        if out.last().is_some_and(|prev| span.start < prev.end) {
            continue;
        }
        out.push(span);
    }
    out
}
