use resume_core::{EntityLabel, EntitySpan};

/// Words that mark a PERSON span as a mislabeled document title
/// ("Assignment Smith", "File Reviewer", ...).
const DENYLIST: &[&str] = &["file", "assignment", "document"];

/// Text of the first PERSON span none of whose words is denylisted.
pub fn extract_name(spans: &[EntitySpan]) -> Option<String> {
    spans
        .iter()
        .filter(|s| s.label == EntityLabel::Person)
        .find(|s| {
            !s.text
                .split_whitespace()
                .any(|word| DENYLIST.contains(&word.to_lowercase().as_str()))
        })
        .map(|s| s.text.clone())
}
