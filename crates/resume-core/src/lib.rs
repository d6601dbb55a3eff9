use std::fmt;

use serde::{Deserialize, Serialize};

pub mod backend;
pub mod config_file;
pub mod oracle;

pub use backend::{BackendError, PdfBackend};
pub use config_file::{ConfigError, OracleBackendKind, OracleSettings};
pub use oracle::{EntityOracle, OracleError, OracleFuture, build_oracle};

/// Entity label assigned by an [`EntityOracle`].
///
/// Only the labels the field extractors care about get their own variant;
/// everything else (ORG, DATE, CARDINAL, ...) is kept verbatim in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EntityLabel {
    Person,
    /// Geopolitical entity: countries, cities, states.
    Gpe,
    /// Non-GPE locations: regions, mountain ranges, bodies of water.
    Loc,
    /// Facilities: buildings, airports, streets.
    Fac,
    Other(String),
}

impl EntityLabel {
    pub fn from_label(label: &str) -> Self {
        match label {
            "PERSON" => EntityLabel::Person,
            "GPE" => EntityLabel::Gpe,
            "LOC" => EntityLabel::Loc,
            "FAC" => EntityLabel::Fac,
            other => EntityLabel::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EntityLabel::Person => "PERSON",
            EntityLabel::Gpe => "GPE",
            EntityLabel::Loc => "LOC",
            EntityLabel::Fac => "FAC",
            EntityLabel::Other(s) => s,
        }
    }

    /// Whether spans with this label can be part of a mailing address.
    pub fn is_place(&self) -> bool {
        matches!(self, EntityLabel::Gpe | EntityLabel::Loc | EntityLabel::Fac)
    }
}

impl fmt::Display for EntityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A labeled region of the document text.
///
/// `start` and `end` are byte offsets into the text the oracle was run on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntitySpan {
    pub label: EntityLabel,
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl EntitySpan {
    pub fn new(label: EntityLabel, text: impl Into<String>, start: usize, end: usize) -> Self {
        Self {
            label,
            text: text.into(),
            start,
            end,
        }
    }
}

/// Fields extracted from a single resume.
///
/// Serializes to exactly four keys, in this order, with `null` for
/// anything that could not be found.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeFields {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub role: Option<String>,
}
