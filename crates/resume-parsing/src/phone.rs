use once_cell::sync::Lazy;
use regex::Regex;

use crate::tokenizer::Token;

/// Phone number from a `Phone:` label, else from the first long numeric
/// token. Formatted as `(NNN) NNN-NNNN`.
pub fn extract_phone(text: &str, tokens: &[Token<'_>]) -> Option<String> {
    labeled_phone(text).or_else(|| numeric_token_phone(tokens))
}

/// `Phone: +1 (415) 555-1234` and its separator variants.
pub fn labeled_phone(text: &str) -> Option<String> {
    static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
        Regex::new(
            r"Phone\s*:\s*\+?\s*1?\s*\(?\s*(\d{3})\s*\)?\s*[-.]?\s*(\d{3})\s*[-.]?\s*(\d{4})",
        )
        .unwrap()
    });
    let caps = PHONE_RE.captures(text)?;
    Some(format!("({}) {}-{}", &caps[1], &caps[2], &caps[3]))
}

/// First numeric-like token of at least ten characters holding at least
/// ten digits; the first ten digits are used.
pub fn numeric_token_phone(tokens: &[Token<'_>]) -> Option<String> {
    tokens
        .iter()
        .filter(|t| t.like_num() && t.text.chars().count() >= 10)
        .find_map(|t| {
            let digits: String = t.text.chars().filter(|c| c.is_ascii_digit()).collect();
            (digits.len() >= 10).then(|| {
                format!("({}) {}-{}", &digits[..3], &digits[3..6], &digits[6..10])
            })
        })
}
