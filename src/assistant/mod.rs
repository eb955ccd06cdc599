//! Rule-based conversational assistant.
//!
//! Scores the user's message against fixed conversation patterns with the
//! phrase-weighted keyword formula, answers with one of the winning
//! pattern's canned replies and tunes the reply to the message sentiment.
//! Works entirely offline. Randomness is injected so callers (and tests)
//! control it.

pub mod patterns;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::matching::{phrase_weighted_ratio, sentiment, Sentiment};

pub use patterns::{ConversationPatternRecord, PatternCategory, CONVERSATION_PATTERNS};

/// Pattern score a message must exceed to get a topical reply.
pub const PATTERN_THRESHOLD: f64 = 0.1;

/// Upper bound on reported confidence for topical replies.
pub const MAX_CONFIDENCE: f64 = 0.9;

/// Confidence reported with a fallback reply.
pub const FALLBACK_CONFIDENCE: f64 = 0.3;

pub const EMPTY_INPUT_PROMPT: &str = "I'm here to help! Please feel free to ask me any health-related questions or tell me what's on your mind.";

pub const NEGATIVE_SUFFIX: &str = " I understand this can be challenging. Remember that seeking help and support is always a good step.";

pub const POSITIVE_SUFFIX: &str = " I'm glad to hear you're taking a positive approach to your health!";

pub const FALLBACK_RESPONSES: &[&str] = &[
    "I understand you have a question about health or disability topics. While I can provide general information, I'd recommend discussing specific concerns with a healthcare professional who can give you personalized advice.",
    "That's an interesting question. For the most accurate and personalized information, I'd suggest consulting with a healthcare provider who can better understand your specific situation.",
    "I want to help, but I may not have specific information about that topic. Healthcare professionals would be the best source for detailed medical advice and guidance.",
    "Thank you for your question. While I can offer general health information, it's always best to consult with qualified healthcare providers for specific medical concerns or advice.",
];

const CONVERSATION_STARTERS: &[&str] = &[
    "How can I manage chronic pain better?",
    "What are some good exercises for people with limited mobility?",
    "How do I advocate for myself in healthcare settings?",
    "What assistive technologies are available for daily living?",
    "How can I maintain my mental health while dealing with a disability?",
    "What should I know about medication management?",
    "How do I find accessible housing?",
    "What are my rights under the ADA?",
    "How can I stay active with my condition?",
    "What resources are available for caregivers?",
];

/// Reply plus how sure the assistant is about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiResponse {
    pub response: String,
    pub confidence: f64,
    /// Matched topic; `None` for the empty-input prompt and fallbacks.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub category: Option<PatternCategory>,
}

pub struct Assistant {
    patterns: &'static [ConversationPatternRecord],
}

impl Default for Assistant {
    fn default() -> Self {
        Self::new(CONVERSATION_PATTERNS)
    }
}

impl Assistant {
    pub fn new(patterns: &'static [ConversationPatternRecord]) -> Self {
        Self { patterns }
    }

    /// Highest-scoring pattern and its score. Ties keep the earlier pattern;
    /// nothing scoring above zero yields `None`.
    pub fn best_pattern(&self, input: &str) -> (Option<&'static ConversationPatternRecord>, f64) {
        let mut best = None;
        let mut best_score = 0.0;

        for pattern in self.patterns {
            let score = phrase_weighted_ratio(input, pattern.keywords);
            if score > best_score {
                best_score = score;
                best = Some(pattern);
            }
        }

        (best, best_score)
    }

    /// Answer a free-text message.
    pub fn respond<R: Rng + ?Sized>(&self, input: &str, rng: &mut R) -> AiResponse {
        if input.trim().is_empty() {
            return AiResponse {
                response: EMPTY_INPUT_PROMPT.to_string(),
                confidence: 1.0,
                category: None,
            };
        }

        let (best, score) = self.best_pattern(input);

        if let Some(pattern) = best.filter(|_| score > PATTERN_THRESHOLD) {
            let mut response = pattern
                .responses
                .choose(rng)
                .copied()
                .unwrap_or(FALLBACK_RESPONSES[0])
                .to_string();

            match sentiment(input) {
                Sentiment::Negative if pattern.category != PatternCategory::Emergency => {
                    response.push_str(NEGATIVE_SUFFIX);
                }
                Sentiment::Positive => response.push_str(POSITIVE_SUFFIX),
                _ => {}
            }

            tracing::debug!(category = pattern.category.as_str(), score, "Matched conversation pattern");

            return AiResponse {
                response,
                confidence: (score * 2.0).min(MAX_CONFIDENCE),
                category: Some(pattern.category),
            };
        }

        tracing::debug!(score, "No conversation pattern matched, using fallback");

        AiResponse {
            response: FALLBACK_RESPONSES
                .choose(rng)
                .copied()
                .unwrap_or(FALLBACK_RESPONSES[0])
                .to_string(),
            confidence: FALLBACK_CONFIDENCE,
            category: None,
        }
    }
}

/// Answer with the default patterns and the thread-local RNG.
pub fn get_ai_response(input: &str) -> AiResponse {
    Assistant::default().respond(input, &mut rand::thread_rng())
}

pub fn conversation_starters() -> Vec<String> {
    CONVERSATION_STARTERS.iter().map(|s| s.to_string()).collect()
}

/// One-line summary of what the last three messages were about.
pub fn analyze_conversation_context<S: AsRef<str>>(history: &[S]) -> &'static str {
    if history.is_empty() {
        return "This appears to be the start of our conversation.";
    }

    let recent = history[history.len().saturating_sub(3)..]
        .iter()
        .map(|message| message.as_ref())
        .collect::<Vec<&str>>()
        .join(" ")
        .to_lowercase();

    if recent.contains("pain") || recent.contains("hurt") {
        "We've been discussing pain management."
    } else if recent.contains("wheelchair") || recent.contains("mobility") {
        "Our conversation has focused on mobility topics."
    } else if recent.contains("medication") || recent.contains("medicine") {
        "We've been talking about medication-related topics."
    } else {
        "We've been having a general health discussion."
    }
}
