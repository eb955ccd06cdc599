use serde::{Deserialize, Serialize};

use super::keywords::lowercase_tokens;

const POSITIVE_WORDS: &[&str] = &[
    "good", "great", "excellent", "wonderful", "amazing", "fantastic", "happy", "pleased",
    "satisfied",
];

const NEGATIVE_WORDS: &[&str] = &[
    "bad", "terrible", "awful", "horrible", "sad", "angry", "frustrated", "worried", "scared",
    "pain", "hurt",
];

/// Coarse polarity of a user message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

/// Count whole-token hits against the fixed word lists; the strictly larger
/// side wins, ties are neutral.
pub fn sentiment(text: &str) -> Sentiment {
    let mut positive = 0usize;
    let mut negative = 0usize;

    for token in lowercase_tokens(text) {
        if POSITIVE_WORDS.contains(&token.as_str()) {
            positive += 1;
        }
        if NEGATIVE_WORDS.contains(&token.as_str()) {
            negative += 1;
        }
    }

    match positive.cmp(&negative) {
        std::cmp::Ordering::Greater => Sentiment::Positive,
        std::cmp::Ordering::Less => Sentiment::Negative,
        std::cmp::Ordering::Equal => Sentiment::Neutral,
    }
}
