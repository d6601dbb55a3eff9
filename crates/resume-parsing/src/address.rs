use resume_core::EntitySpan;

/// Parts accepted before a gap ends accumulation.
const MAX_DETACHED_PARTS: usize = 3;

/// Join place spans (GPE, LOC, FAC) into an address.
///
/// The first place span is always taken. Later ones are appended while
/// they directly follow an accepted place span, or while fewer than
/// three parts have been collected. Any other entity breaks the run.
pub fn extract_address(spans: &[EntitySpan]) -> Option<String> {
    let mut parts: Vec<&str> = Vec::new();
    let mut prev_accepted = false;

    for span in spans {
        if !span.label.is_place() {
            prev_accepted = false;
            continue;
        }
        prev_accepted = prev_accepted || parts.len() < MAX_DETACHED_PARTS;
        if prev_accepted {
            parts.push(&span.text);
        }
    }

    (!parts.is_empty()).then(|| parts.join(" "))
}
