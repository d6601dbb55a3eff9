//! Job-title patterns and the token matcher that applies them.
//!
//! The pattern table is plain data: an ordered list of token-constraint
//! sequences. Registration order matters, it breaks ties between matches
//! starting on the same token.

use crate::tokenizer::Token;

/// Constraint on a single token's lowercase form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenConstraint {
    Exact(&'static str),
    OneOf(&'static [&'static str]),
}

impl TokenConstraint {
    pub fn matches(&self, lower: &str) -> bool {
        match self {
            TokenConstraint::Exact(word) => *word == lower,
            TokenConstraint::OneOf(words) => words.contains(&lower),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleFamily {
    Academic,
    Management,
    Engineering,
    Analyst,
    Consultant,
    Research,
    Technical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RolePattern {
    pub family: RoleFamily,
    pub steps: &'static [TokenConstraint],
}

const ENGINEERING_SENIORITY: &[&str] = &[
    "senior",
    "junior",
    "lead",
    "assistant",
    "associate",
    "principal",
];
const ENGINEERING_DOMAIN: &[&str] = &[
    "software", "systems", "full", "stack", "backend", "frontend", "data",
];
const ENGINEERING_NOUN: &[&str] = &["engineer", "developer", "architect"];

use RoleFamily::*;
use TokenConstraint::{Exact, OneOf};

/// Built-in role patterns, in registration order.
///
/// Set members are compared against one token, so a multi-word member
/// such as "machine learning" can never match.
pub const ROLE_PATTERNS: &[RolePattern] = &[
    // Academic
    RolePattern {
        family: Academic,
        steps: &[
            OneOf(&["assistant", "associate", "full", "visiting", "adjunct", "research"]),
            Exact("professor"),
        ],
    },
    RolePattern {
        family: Academic,
        steps: &[Exact("professor")],
    },
    RolePattern {
        family: Academic,
        steps: &[Exact("lecturer")],
    },
    // Management
    RolePattern {
        family: Management,
        steps: &[
            OneOf(&["senior", "executive", "managing", "technical", "project", "product"]),
            Exact("director"),
        ],
    },
    RolePattern {
        family: Management,
        steps: &[Exact("director")],
    },
    RolePattern {
        family: Management,
        steps: &[
            OneOf(&["senior", "junior", "project", "product", "engineering", "technical"]),
            Exact("manager"),
        ],
    },
    RolePattern {
        family: Management,
        steps: &[Exact("manager")],
    },
    // Engineering
    RolePattern {
        family: Engineering,
        steps: &[
            OneOf(ENGINEERING_SENIORITY),
            OneOf(ENGINEERING_DOMAIN),
            OneOf(ENGINEERING_NOUN),
        ],
    },
    RolePattern {
        family: Engineering,
        steps: &[OneOf(ENGINEERING_DOMAIN), OneOf(ENGINEERING_NOUN)],
    },
    // Analyst
    RolePattern {
        family: Analyst,
        steps: &[
            OneOf(&["senior", "junior", "lead", "business", "data", "financial", "research"]),
            Exact("analyst"),
        ],
    },
    RolePattern {
        family: Analyst,
        steps: &[Exact("analyst")],
    },
    // Consultant
    RolePattern {
        family: Consultant,
        steps: &[
            OneOf(&["senior", "junior", "management", "technical", "it", "business"]),
            Exact("consultant"),
        ],
    },
    RolePattern {
        family: Consultant,
        steps: &[Exact("consultant")],
    },
    // Research
    RolePattern {
        family: Research,
        steps: &[
            OneOf(&["senior", "lead", "principal", "postdoctoral"]),
            Exact("researcher"),
        ],
    },
    RolePattern {
        family: Research,
        steps: &[Exact("researcher")],
    },
    // Other technical
    RolePattern {
        family: Technical,
        steps: &[OneOf(&["data", "machine learning", "ai"]), Exact("scientist")],
    },
    RolePattern {
        family: Technical,
        steps: &[Exact("architect")],
    },
    RolePattern {
        family: Technical,
        steps: &[Exact("designer")],
    },
];

/// A pattern hit over a token slice: tokens `start..end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMatch {
    pub pattern: usize,
    pub start: usize,
    pub end: usize,
}

/// Applies an ordered pattern table to a token stream.
#[derive(Debug, Clone)]
pub struct RoleMatcher {
    patterns: Vec<RolePattern>,
}

impl Default for RoleMatcher {
    fn default() -> Self {
        Self::new(ROLE_PATTERNS.to_vec())
    }
}

impl RoleMatcher {
    pub fn new(patterns: Vec<RolePattern>) -> Self {
        Self { patterns }
    }

    pub fn patterns(&self) -> &[RolePattern] {
        &self.patterns
    }

    /// Every match in the document, ordered by start token, then by
    /// pattern registration order.
    pub fn find_all(&self, tokens: &[Token<'_>]) -> Vec<RoleMatch> {
        let lowered: Vec<String> = tokens.iter().map(Token::lower).collect();
        let mut matches = Vec::new();
        for start in 0..lowered.len() {
            for (index, pattern) in self.patterns.iter().enumerate() {
                if let Some(end) = match_at(pattern, &lowered, start) {
                    matches.push(RoleMatch {
                        pattern: index,
                        start,
                        end,
                    });
                }
            }
        }
        matches
    }

    /// The earliest-starting match; ties go to the first registered pattern.
    pub fn find_first(&self, tokens: &[Token<'_>]) -> Option<RoleMatch> {
        let lowered: Vec<String> = tokens.iter().map(Token::lower).collect();
        (0..lowered.len()).find_map(|start| {
            self.patterns
                .iter()
                .enumerate()
                .find_map(|(index, pattern)| {
                    match_at(pattern, &lowered, start).map(|end| RoleMatch {
                        pattern: index,
                        start,
                        end,
                    })
                })
        })
    }

    /// Matched role text, sliced from the document so the original casing
    /// and spacing survive.
    pub fn find_role(&self, text: &str, tokens: &[Token<'_>]) -> Option<String> {
        let hit = self.find_first(tokens)?;
        let first = tokens[hit.start];
        let last = tokens[hit.end - 1];
        Some(text[first.start..last.end()].to_string())
    }
}

fn match_at(pattern: &RolePattern, lowered: &[String], start: usize) -> Option<usize> {
    let end = start + pattern.steps.len();
    if pattern.steps.is_empty() || end > lowered.len() {
        return None;
    }
    pattern
        .steps
        .iter()
        .zip(&lowered[start..end])
        .all(|(step, word)| step.matches(word))
        .then_some(end)
}
