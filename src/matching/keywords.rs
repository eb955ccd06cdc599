//! Keyword overlap scoring.
//!
//! Two formulas live here and they are deliberately not unified: the chat
//! assistant rewards phrase matches by word count, the doctor-answer lookup
//! rewards long keywords. Each caller uses exactly one of them.

/// Normalization factor for [`phrase_weighted_ratio`].
pub const PHRASE_WEIGHT_FACTOR: f64 = 2.0;

/// Normalization factor for [`length_weighted_ratio`].
pub const LENGTH_WEIGHT_FACTOR: f64 = 1.5;

/// Keywords longer than this many characters count double in the
/// length-weighted formula.
pub const LONG_KEYWORD_CHARS: usize = 5;

/// Lower-case `text` and split it on whitespace.
pub fn lowercase_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

/// Raw phrase-weighted score.
///
/// A keyword found as a contiguous substring of the lower-cased input earns
/// two points per word it contains. Otherwise each of its words that appears
/// as a whole input token earns one point.
pub fn phrase_weighted_score<S: AsRef<str>>(input: &str, keywords: &[S]) -> f64 {
    let lower_input = input.to_lowercase();
    let input_tokens: Vec<&str> = lower_input.split_whitespace().collect();

    let mut score = 0usize;
    for keyword in keywords {
        let keyword = keyword.as_ref().to_lowercase();
        let keyword_words: Vec<&str> = keyword.split_whitespace().collect();

        if lower_input.contains(&keyword) {
            score += keyword_words.len() * 2;
        } else {
            score += keyword_words
                .iter()
                .filter(|word| input_tokens.contains(word))
                .count();
        }
    }

    score as f64
}

/// Phrase-weighted score normalized by `keywords.len() × 2`.
pub fn phrase_weighted_ratio<S: AsRef<str>>(input: &str, keywords: &[S]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    phrase_weighted_score(input, keywords) / (keywords.len() as f64 * PHRASE_WEIGHT_FACTOR)
}

/// Raw length-weighted score.
///
/// `normalized_input` must already be trimmed and lower-cased. Every keyword
/// that is a substring of it earns 2 points when longer than
/// [`LONG_KEYWORD_CHARS`] characters, else 1.
pub fn length_weighted_score<S: AsRef<str>>(normalized_input: &str, keywords: &[S]) -> f64 {
    let mut score = 0.0;
    for keyword in keywords {
        let keyword: &str = keyword.as_ref();
        if normalized_input.contains(&keyword.to_lowercase()) {
            score += if keyword.chars().count() > LONG_KEYWORD_CHARS { 2.0 } else { 1.0 };
        }
    }
    score
}

/// Length-weighted score normalized by `keywords.len() × 1.5`.
pub fn length_weighted_ratio<S: AsRef<str>>(normalized_input: &str, keywords: &[S]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    length_weighted_score(normalized_input, keywords) / (keywords.len() as f64 * LENGTH_WEIGHT_FACTOR)
}
