//! Keyword derivation and categorisation for questions learned at runtime.

use std::sync::LazyLock;

use regex::Regex;

/// Maximum number of keywords kept for a learned question.
pub const MAX_LEARNED_KEYWORDS: usize = 8;

/// Tokens must be strictly longer than this to become keywords.
const MIN_KEYWORD_CHARS: usize = 3;

/// Category given when no category word set matches.
pub const DEFAULT_CATEGORY: &str = "general";

const STOP_WORDS: &[&str] = &[
    "what", "how", "when", "where", "why", "who", "can", "will", "should", "would", "could",
    "the", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
];

/// Category word sets, checked in priority order; first hit wins.
const CATEGORY_RULES: &[(&str, &[&str])] = &[
    ("pain-management", &["pain", "hurt", "ache", "chronic"]),
    ("vision", &["vision", "blind", "sight", "see", "eyes"]),
    ("hearing", &["hearing", "deaf", "ear", "sound"]),
    ("mobility", &["mobility", "wheelchair", "walk", "movement"]),
    ("mental-health", &["mental", "depression", "anxiety", "mood"]),
    ("medication", &["medication", "medicine", "prescription", "pills"]),
    ("therapy", &["exercise", "fitness", "therapy", "rehabilitation"]),
];

static ALPHABETIC: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]+$").expect("Invalid alphabetic token regex"));

/// Pick keywords out of a free-text question.
///
/// Lower-cases and splits on whitespace, then keeps tokens longer than three
/// characters that are purely ASCII-alphabetic and not stop words. Tokens
/// with trailing punctuation ("mobility?") are dropped, not stripped.
pub fn derive_keywords(question: &str) -> Vec<String> {
    question
        .to_lowercase()
        .split_whitespace()
        .filter(|word| word.len() > MIN_KEYWORD_CHARS)
        .filter(|word| !STOP_WORDS.contains(word))
        .filter(|word| ALPHABETIC.is_match(word))
        .take(MAX_LEARNED_KEYWORDS)
        .map(str::to_string)
        .collect()
}

/// Category of a learned question, by exact keyword membership.
pub fn assign_category(keywords: &[String]) -> &'static str {
    CATEGORY_RULES
        .iter()
        .find(|(_, words)| keywords.iter().any(|k| words.contains(&k.as_str())))
        .map(|(category, _)| *category)
        .unwrap_or(DEFAULT_CATEGORY)
}
