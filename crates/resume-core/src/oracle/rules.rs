//! Pattern and gazetteer based entity recognizer.
//!
//! Far less accurate than a trained model, but needs nothing at runtime.
//! Tuned for the header block of a resume: a name on its own line,
//! a street address, and a `City, ST` pair.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use super::{EntityOracle, OracleFuture, normalize_spans};
use crate::{EntityLabel, EntitySpan};

#[derive(Debug, Default)]
pub struct RuleOracle;

impl RuleOracle {
    pub fn new() -> Self {
        Self
    }

    /// Synchronous recognition; [`EntityOracle::recognize`] wraps this.
    pub fn recognize_sync(&self, text: &str) -> Vec<EntitySpan> {
        let mut spans = Vec::new();
        find_facilities(text, &mut spans);
        find_city_state_pairs(text, &mut spans);
        find_known_places(text, &mut spans);
        find_person_lines(text, &mut spans);
        normalize_spans(spans)
    }
}

impl EntityOracle for RuleOracle {
    fn name(&self) -> &str {
        "rules"
    }

    fn recognize<'a>(&'a self, text: &'a str) -> OracleFuture<'a> {
        let spans = self.recognize_sync(text);
        Box::pin(async move { Ok(spans) })
    }
}

static US_STATE_CODES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "FL", "GA", "HI", "ID", "IL", "IN", "IA",
        "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH", "NJ",
        "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT", "VT",
        "VA", "WA", "WV", "WI", "WY", "DC",
    ]
    .into_iter()
    .collect()
});

const GPE_NAMES: &[&str] = &[
    // Countries
    "United States",
    "USA",
    "Canada",
    "Mexico",
    "United Kingdom",
    "UK",
    "Ireland",
    "Germany",
    "France",
    "Spain",
    "Italy",
    "Netherlands",
    "India",
    "China",
    "Japan",
    "Singapore",
    "Australia",
    "Brazil",
    // US states
    "Alabama",
    "Alaska",
    "Arizona",
    "California",
    "Colorado",
    "Florida",
    "Georgia",
    "Illinois",
    "Massachusetts",
    "Michigan",
    "Minnesota",
    "New Jersey",
    "New York",
    "North Carolina",
    "Ohio",
    "Oregon",
    "Pennsylvania",
    "Texas",
    "Virginia",
    "Washington",
    // Cities
    "Atlanta",
    "Austin",
    "Boston",
    "Chicago",
    "Dallas",
    "Denver",
    "Houston",
    "London",
    "Los Angeles",
    "Miami",
    "New York City",
    "Paris",
    "Philadelphia",
    "Portland",
    "San Diego",
    "San Francisco",
    "San Jose",
    "Seattle",
    "Toronto",
    "Vancouver",
    "Berlin",
    "Bangalore",
    "Tokyo",
];

const LOC_NAMES: &[&str] = &[
    "Silicon Valley",
    "Bay Area",
    "Midwest",
    "New England",
    "Pacific Northwest",
    "East Coast",
    "West Coast",
];

/// Capitalized words that start resume lines but are never part of a name.
static NON_NAME_WORDS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "Resume", "Curriculum", "Vitae", "Experience", "Education", "Skills", "Summary",
        "Objective", "Projects", "Publications", "References", "Contact", "Profile", "Work",
        "Professional", "Technical", "Senior", "Junior", "Lead", "Principal", "Software",
        "Engineer", "Developer", "Manager", "Director", "Analyst", "Consultant", "Professor",
        "Researcher", "Scientist", "Designer", "Architect", "Lecturer", "University", "College",
        "Institute", "Inc", "Corporation", "Phone", "Email", "Address", "Street", "Avenue",
        "Road", "Page", "Document", "File", "Assignment",
    ]
    .into_iter()
    .collect()
});

static GPE_RE: Lazy<Regex> = Lazy::new(|| gazetteer_regex(GPE_NAMES));
static LOC_RE: Lazy<Regex> = Lazy::new(|| gazetteer_regex(LOC_NAMES));

fn gazetteer_regex(names: &[&str]) -> Regex {
    // Longest first so "New York City" beats "New York".
    let mut sorted: Vec<&str> = names.to_vec();
    sorted.sort_by_key(|n| std::cmp::Reverse(n.len()));
    let alternation = sorted
        .iter()
        .map(|n| regex::escape(n))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&format!(r"\b(?:{alternation})\b")).unwrap()
}

fn find_facilities(text: &str, out: &mut Vec<EntitySpan>) {
    static STREET_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"\b\d{1,6}[ \t]+(?:[A-Z][a-z]+[ \t]+){1,3}(?:Street|St|Avenue|Ave|Road|Rd|Boulevard|Blvd|Lane|Ln|Drive|Dr|Court|Ct|Way|Place|Pl|Terrace|Parkway|Pkwy)\b\.?",
        )
        .unwrap()
    });
    for m in STREET_RE.find_iter(text) {
        out.push(EntitySpan::new(EntityLabel::Fac, m.as_str(), m.start(), m.end()));
    }
}

fn find_city_state_pairs(text: &str, out: &mut Vec<EntitySpan>) {
    static CITY_STATE_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"\b([A-Z][a-z]+(?:[ \t][A-Z][a-z]+){0,2}),[ \t]*([A-Z]{2})\b").unwrap()
    });
    for caps in CITY_STATE_RE.captures_iter(text) {
        let (Some(city), Some(state)) = (caps.get(1), caps.get(2)) else {
            continue;
        };
        if !US_STATE_CODES.contains(state.as_str()) {
            continue;
        }
        out.push(EntitySpan::new(
            EntityLabel::Gpe,
            city.as_str(),
            city.start(),
            city.end(),
        ));
        out.push(EntitySpan::new(
            EntityLabel::Gpe,
            state.as_str(),
            state.start(),
            state.end(),
        ));
    }
}

fn find_known_places(text: &str, out: &mut Vec<EntitySpan>) {
    for m in GPE_RE.find_iter(text) {
        out.push(EntitySpan::new(EntityLabel::Gpe, m.as_str(), m.start(), m.end()));
    }
    for m in LOC_RE.find_iter(text) {
        out.push(EntitySpan::new(EntityLabel::Loc, m.as_str(), m.start(), m.end()));
    }
}

fn find_person_lines(text: &str, out: &mut Vec<EntitySpan>) {
    static NAME_LINE_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(r"(?m)^[ \t]*([A-Z][a-z'\-]+(?:[ \t]+(?:[A-Z]\.|[A-Z][a-z'\-]+)){1,3})[ \t]*$")
            .unwrap()
    });
    for caps in NAME_LINE_RE.captures_iter(text) {
        let Some(m) = caps.get(1) else { continue };
        let candidate = m.as_str();
        if candidate
            .split_whitespace()
            .any(|w| NON_NAME_WORDS.contains(w.trim_end_matches('.')))
        {
            continue;
        }
        if GPE_RE.is_match(candidate) || LOC_RE.is_match(candidate) {
            continue;
        }
        out.push(EntitySpan::new(EntityLabel::Person, candidate, m.start(), m.end()));
    }
}
