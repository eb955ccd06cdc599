//! Text-matching primitives shared by the doctor-answer lookup, the chat
//! assistant and the symptom matcher. Everything here is pure and total.

pub mod keywords;
pub mod sentiment;
pub mod similarity;

pub use keywords::{
    length_weighted_ratio, length_weighted_score, lowercase_tokens, phrase_weighted_ratio,
    phrase_weighted_score,
};
pub use sentiment::{sentiment, Sentiment};
pub use similarity::{edit_distance, similarity};
