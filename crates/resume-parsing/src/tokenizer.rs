//! Rule-based English tokenizer.
//!
//! Splits on whitespace, then peels leading and trailing punctuation off
//! each chunk and breaks hyphen/slash/comma infixes between letters.
//! Digit groups such as `555-1234` or `415.555.1234` stay whole, which is
//! what the numeric-token phone fallback relies on.

/// A token borrowed from the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    /// Byte offset of the token in the document.
    pub start: usize,
}

impl<'a> Token<'a> {
    pub fn end(&self) -> usize {
        self.start + self.text.len()
    }

    pub fn lower(&self) -> String {
        self.text.to_lowercase()
    }

    /// Whether the token looks like a number (`10`, `1,000`, `3/4`,
    /// `ten`, `4th`, `415.555.1234`).
    pub fn like_num(&self) -> bool {
        like_num(self.text)
    }
}

const PREFIXES: &[char] = &[
    '(', '[', '{', '<', '"', '\'', '“', '‘', '«', '$', '£', '€', '#', '*', '•', '·',
];
const SUFFIXES: &[char] = &[
    ')', ']', '}', '>', '"', '\'', '”', '’', '»', ',', ';', ':', '!', '?', '…', '%',
];
const INFIXES: &[char] = &['-', '–', '—', '/', ','];

/// Tokenize `text` into borrowed tokens in document order.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut chunk_start: Option<usize> = None;

    for (i, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some(start) = chunk_start.take() {
                split_chunk(text, start, i, &mut tokens);
            }
        } else if chunk_start.is_none() {
            chunk_start = Some(i);
        }
    }
    if let Some(start) = chunk_start {
        split_chunk(text, start, text.len(), &mut tokens);
    }
    tokens
}

fn split_chunk<'a>(text: &'a str, mut start: usize, mut end: usize, out: &mut Vec<Token<'a>>) {
    // Prefixes, emitted immediately.
    while let Some(c) = text[start..end].chars().next() {
        if !PREFIXES.contains(&c) {
            break;
        }
        out.push(Token {
            text: &text[start..start + c.len_utf8()],
            start,
        });
        start += c.len_utf8();
    }

    // Suffixes, collected back to front.
    let mut suffixes = Vec::new();
    while start < end {
        let Some(c) = text[start..end].chars().next_back() else {
            break;
        };
        let body = &text[start..end - c.len_utf8()];
        let is_suffix = SUFFIXES.contains(&c) || (c == '.' && !body.is_empty() && !body.contains('.'));
        if !is_suffix {
            break;
        }
        suffixes.push(Token {
            text: &text[end - c.len_utf8()..end],
            start: end - c.len_utf8(),
        });
        end -= c.len_utf8();
    }

    if start < end {
        split_infixes(text, start, end, out);
    }
    out.extend(suffixes.into_iter().rev());
}

/// Break `word` at infix punctuation that sits between two letters.
fn split_infixes<'a>(text: &'a str, start: usize, end: usize, out: &mut Vec<Token<'a>>) {
    let word = &text[start..end];
    let chars: Vec<(usize, char)> = word.char_indices().collect();
    let mut piece_start = 0;

    for (idx, &(offset, c)) in chars.iter().enumerate() {
        if !INFIXES.contains(&c) || idx == 0 || idx + 1 == chars.len() {
            continue;
        }
        let prev = chars[idx - 1].1;
        let next = chars[idx + 1].1;
        if prev.is_alphabetic() && next.is_alphabetic() {
            if piece_start < offset {
                out.push(Token {
                    text: &word[piece_start..offset],
                    start: start + piece_start,
                });
            }
            out.push(Token {
                text: &word[offset..offset + c.len_utf8()],
                start: start + offset,
            });
            piece_start = offset + c.len_utf8();
        }
    }
    if piece_start < word.len() {
        out.push(Token {
            text: &word[piece_start..],
            start: start + piece_start,
        });
    }
}

const NUM_WORDS: &[&str] = &[
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
    "hundred", "thousand", "million", "billion", "trillion", "quadrillion", "gajillion",
    "bazillion",
];

const ORDINAL_WORDS: &[&str] = &[
    "first", "second", "third", "fourth", "fifth", "sixth", "seventh", "eighth", "ninth",
    "tenth", "eleventh", "twelfth", "thirteenth", "fourteenth", "fifteenth", "sixteenth",
    "seventeenth", "eighteenth", "nineteenth", "twentieth", "thirtieth", "fortieth",
    "fiftieth", "sixtieth", "seventieth", "eightieth", "ninetieth", "hundredth", "thousandth",
    "millionth", "billionth", "trillionth",
];

fn all_digits(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_digit())
}

/// English "looks like a number" test.
pub fn like_num(text: &str) -> bool {
    let text = text
        .strip_prefix(['+', '-', '±', '~'])
        .unwrap_or(text);
    let text: String = text.chars().filter(|c| *c != ',' && *c != '.').collect();

    if all_digits(&text) {
        return true;
    }
    if let Some((num, denom)) = text.split_once('/')
        && !denom.contains('/')
        && all_digits(num)
        && all_digits(denom)
    {
        return true;
    }

    let lower = text.to_lowercase();
    if NUM_WORDS.contains(&lower.as_str()) || ORDINAL_WORDS.contains(&lower.as_str()) {
        return true;
    }
    ["st", "nd", "rd", "th"]
        .iter()
        .any(|suffix| lower.strip_suffix(*suffix).is_some_and(all_digits))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(input: &str) -> Vec<&str> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_whitespace_split() {
        assert_eq!(texts("Senior  Software\nEngineer"), vec!["Senior", "Software", "Engineer"]);
    }

    #[test]
    fn test_punctuation_peeled() {
        assert_eq!(
            texts("Phone: (415) 555-1234."),
            vec!["Phone", ":", "(", "415", ")", "555-1234", "."]
        );
    }

    #[test]
    fn test_dotted_number_kept_whole() {
        assert_eq!(texts("call 415.555.1234"), vec!["call", "415.555.1234"]);
    }

    #[test]
    fn test_abbreviation_with_inner_dots_kept() {
        assert_eq!(texts("U.S. citizen"), vec!["U.S.", "citizen"]);
    }

    #[test]
    fn test_letter_infixes_split() {
        assert_eq!(
            texts("full-stack engineer/architect"),
            vec!["full", "-", "stack", "engineer", "/", "architect"]
        );
    }

    #[test]
    fn test_offsets_point_into_text() {
        let text = "  “Lead” data-analyst, NYC";
        for token in tokenize(text) {
            assert_eq!(&text[token.start..token.end()], token.text);
        }
    }

    #[test]
    fn test_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }

    #[test]
    fn test_like_num_digits_and_separators() {
        assert!(like_num("10"));
        assert!(like_num("1,000"));
        assert!(like_num("3.14"));
        assert!(like_num("+14155551234"));
        assert!(like_num("415.555.1234"));
        assert!(!like_num("555-1234"));
        assert!(!like_num("(415)"));
    }

    #[test]
    fn test_like_num_fractions_words_ordinals() {
        assert!(like_num("3/4"));
        assert!(!like_num("1/2/3"));
        assert!(like_num("Ten"));
        assert!(like_num("twentieth"));
        assert!(like_num("4th"));
        assert!(like_num("21st"));
        assert!(!like_num("th"));
        assert!(!like_num("engineer"));
    }
}
