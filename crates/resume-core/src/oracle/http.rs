use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{EntityOracle, OracleError, OracleFuture, normalize_spans};
use crate::{EntityLabel, EntitySpan};

/// Oracle backed by a pretrained model served over HTTP.
///
/// Request body: `{"model": "<name>", "text": "<document>"}`.
/// The response is a spaCy `Doc.to_json()`-shaped object; only `ents` is
/// read, with character offsets:
///
/// ```json
/// {"ents": [{"start": 0, "end": 8, "label": "PERSON"}]}
/// ```
pub struct HttpOracle {
    client: reqwest::Client,
    url: String,
    model: String,
    name: String,
}

#[derive(Serialize)]
struct NerRequest<'a> {
    model: &'a str,
    text: &'a str,
}

#[derive(Deserialize)]
struct NerResponse {
    #[serde(default)]
    ents: Vec<RawEntity>,
}

#[derive(Deserialize)]
struct RawEntity {
    start: usize,
    end: usize,
    label: String,
    #[serde(default)]
    text: Option<String>,
}

impl HttpOracle {
    pub fn new(url: String, model: String, timeout: Duration) -> Result<Self, OracleError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        let name = format!("http:{model}");
        Ok(Self {
            client,
            url,
            model,
            name,
        })
    }
}

impl EntityOracle for HttpOracle {
    fn name(&self) -> &str {
        &self.name
    }

    fn recognize<'a>(&'a self, text: &'a str) -> OracleFuture<'a> {
        Box::pin(async move {
            let resp = self
                .client
                .post(&self.url)
                .json(&NerRequest {
                    model: &self.model,
                    text,
                })
                .send()
                .await?;

            let status = resp.status();
            if !status.is_success() {
                return Err(OracleError::Status(status.as_u16()));
            }

            let body = resp.bytes().await?;
            let parsed: NerResponse = serde_json::from_slice(&body)
                .map_err(|e| OracleError::Malformed(e.to_string()))?;

            let spans = spans_from_char_offsets(text, parsed.ents);
            tracing::debug!(oracle = %self.name, spans = spans.len(), "entity recognition complete");
            Ok(spans)
        })
    }
}

/// Convert character-offset entities into byte-offset spans over `text`.
/// Entities whose offsets fall outside the text are dropped.
fn spans_from_char_offsets(text: &str, ents: Vec<RawEntity>) -> Vec<EntitySpan> {
    let boundaries: Vec<usize> = text
        .char_indices()
        .map(|(i, _)| i)
        .chain(std::iter::once(text.len()))
        .collect();

    let mut spans = Vec::with_capacity(ents.len());
    for ent in ents {
        let (Some(&start), Some(&end)) = (boundaries.get(ent.start), boundaries.get(ent.end))
        else {
            tracing::warn!(
                label = %ent.label,
                start = ent.start,
                end = ent.end,
                "dropping entity with out-of-range offsets"
            );
            continue;
        };
        if start >= end {
            tracing::warn!(label = %ent.label, start, end, "dropping empty entity");
            continue;
        }
        let span_text = ent.text.unwrap_or_else(|| text[start..end].to_string());
        spans.push(EntitySpan::new(
            EntityLabel::from_label(&ent.label),
            span_text,
            start,
            end,
        ));
    }
    normalize_spans(spans)
}
