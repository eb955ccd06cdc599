//! Symptom → condition matcher.
//!
//! Each condition group is triggered by user symptoms that contain, or are
//! contained in, one of its terms. Base likelihoods are scaled by the share
//! of user symptoms the group recognised and clamped to [20, 90].

pub mod knowledge;

use serde::{Deserialize, Serialize};

pub use knowledge::{Condition, ConditionGroupRecord, CONDITION_GROUPS};

pub const MIN_PROBABILITY: u8 = 20;
pub const MAX_PROBABILITY: u8 = 90;

/// Maximum number of conditions returned by [`analyze_symptoms`].
pub const MAX_RESULTS: usize = 3;

pub const UNRECOGNIZED_CONDITION: &str = "Unrecognized Symptoms";

pub const UNRECOGNIZED_ADVICE: &str = "Your symptoms don't clearly match common conditions in our database. Consider consulting a healthcare provider for proper evaluation, especially if symptoms are severe or persistent.";

/// A ranked condition as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConditionMatch {
    pub condition: String,
    /// Whole-number percentage rendered as text.
    pub probability: String,
    pub advice: String,
}

/// Condition with its adjusted likelihood, before rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredCondition {
    pub name: &'static str,
    pub probability: u8,
    pub advice: &'static str,
}

impl ScoredCondition {
    fn into_match(self) -> ConditionMatch {
        ConditionMatch {
            condition: self.name.to_string(),
            probability: self.probability.to_string(),
            advice: self.advice.to_string(),
        }
    }
}

/// Group terms recognised in any of the (lower-cased) user symptoms.
fn matching_terms<'g>(group: &'g ConditionGroupRecord, symptoms: &[String]) -> Vec<&'g str> {
    group
        .symptom_keywords
        .iter()
        .copied()
        .filter(|term| {
            symptoms
                .iter()
                .any(|s| s.contains(term) || term.contains(s.as_str()))
        })
        .collect()
}

/// `round(base × ratio)` clamped to [`MIN_PROBABILITY`, `MAX_PROBABILITY`].
fn adjusted_probability(base: u8, match_ratio: f64) -> u8 {
    let scaled = (f64::from(base) * match_ratio).round();
    scaled.clamp(f64::from(MIN_PROBABILITY), f64::from(MAX_PROBABILITY)) as u8
}

/// Every condition any group suggests, deduplicated by name and sorted by
/// descending probability.
///
/// A name seen again overwrites the earlier entry's values but keeps its
/// position, so among equal probabilities the first-seen name stays first.
/// Blank symptoms are ignored.
pub fn rank_conditions<S: AsRef<str>>(symptoms: &[S]) -> Vec<ScoredCondition> {
    let normalized: Vec<String> = symptoms
        .iter()
        .map(|s| s.as_ref().trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect();

    if normalized.is_empty() {
        return Vec::new();
    }

    let mut ranked: Vec<ScoredCondition> = Vec::new();

    for group in CONDITION_GROUPS {
        let matched = matching_terms(group, &normalized);
        if matched.is_empty() {
            continue;
        }

        let match_ratio = matched.len() as f64 / normalized.len() as f64;
        tracing::debug!(matched = matched.len(), match_ratio, "Symptom group matched");

        for condition in group.conditions {
            let scored = ScoredCondition {
                name: condition.name,
                probability: adjusted_probability(condition.base_probability, match_ratio),
                advice: condition.advice,
            };
            match ranked.iter_mut().find(|c| c.name == scored.name) {
                Some(existing) => *existing = scored,
                None => ranked.push(scored),
            }
        }
    }

    ranked.sort_by(|a, b| b.probability.cmp(&a.probability));
    ranked
}

/// Up to three likely conditions for the given symptoms, or a single
/// "Unrecognized Symptoms" entry when nothing matches.
///
/// Symptoms are trimmed and blank entries are dropped before matching. A
/// blank entry therefore neither matches every group nor counts toward the
/// number of symptoms a group's match ratio is divided by, so
/// `["headache", ""]` scores the same as `["headache"]`.
pub fn analyze_symptoms<S: AsRef<str>>(symptoms: &[S]) -> Vec<ConditionMatch> {
    let ranked = rank_conditions(symptoms);

    if ranked.is_empty() {
        return vec![ConditionMatch {
            condition: UNRECOGNIZED_CONDITION.to_string(),
            probability: MIN_PROBABILITY.to_string(),
            advice: UNRECOGNIZED_ADVICE.to_string(),
        }];
    }

    ranked
        .into_iter()
        .take(MAX_RESULTS)
        .map(ScoredCondition::into_match)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn probability(m: &ConditionMatch) -> u8 {
        m.probability.parse().unwrap()
    }

    #[test]
    fn headache_and_fever_suggest_common_cold() {
        let results = analyze_symptoms(&["headache", "fever"]);
        assert!(results.len() <= MAX_RESULTS);
        assert_eq!(results[0].condition, "Common Cold");
        for result in &results {
            let p = probability(result);
            assert!((MIN_PROBABILITY..=MAX_PROBABILITY).contains(&p));
        }
        let probabilities: Vec<u8> = results.iter().map(probability).collect();
        assert!(probabilities.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn ratio_above_one_is_clamped() {
        // headache + head + fever recognised from two symptoms: ratio 1.5
        let results = analyze_symptoms(&["headache", "fever"]);
        let names: Vec<&str> = results.iter().map(|r| r.condition.as_str()).collect();
        assert_eq!(names, vec!["Common Cold", "Flu", "Migraine"]);
        assert_eq!(results[0].probability, "90");
        assert_eq!(results[1].probability, "90");
        assert_eq!(results[2].probability, "60");
    }

    #[test]
    fn unknown_symptom_is_unrecognized() {
        let results = analyze_symptoms(&["zzz-nonexistent"]);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].condition, UNRECOGNIZED_CONDITION);
        assert_eq!(results[0].probability, "20");
        assert_eq!(results[0].advice, UNRECOGNIZED_ADVICE);
    }

    #[test]
    fn empty_or_blank_symptoms_are_unrecognized() {
        let none: [&str; 0] = [];
        assert_eq!(analyze_symptoms(&none)[0].condition, UNRECOGNIZED_CONDITION);
        assert_eq!(analyze_symptoms(&["", "   "])[0].condition, UNRECOGNIZED_CONDITION);
    }

    #[test]
    fn blank_entries_do_not_dilute_the_ratio() {
        assert_eq!(
            analyze_symptoms(&["headache", "", "  "]),
            analyze_symptoms(&["headache"])
        );
    }

    #[test]
    fn matching_is_bidirectional_and_case_insensitive() {
        // "Throat" is contained in "sore throat"; "severe sore throat" contains it
        let short = analyze_symptoms(&["Throat"]);
        let long = analyze_symptoms(&["SEVERE SORE THROAT"]);
        assert_eq!(short[0].condition, "Strep Throat");
        assert_eq!(long[0].condition, "Strep Throat");
    }

    #[test]
    fn duplicate_names_take_the_later_value() {
        // Common Cold: 70 from the head group, then 30 from the chest group
        let ranked = rank_conditions(&["headache", "cough"]);
        let cold = ranked.iter().find(|c| c.name == "Common Cold").unwrap();
        assert_eq!(cold.probability, 30);
        assert_eq!(ranked.iter().filter(|c| c.name == "Common Cold").count(), 1);

        let names: Vec<&str> = ranked.iter().map(|c| c.name).collect();
        assert_eq!(names, vec!["Flu", "Migraine", "Bronchitis", "Common Cold", "Asthma"]);
    }

    #[test]
    fn half_points_round_up() {
        // Bronchitis 65 × 0.5 = 32.5, Asthma 45 × 0.5 = 22.5
        let ranked = rank_conditions(&["headache", "cough"]);
        let bronchitis = ranked.iter().find(|c| c.name == "Bronchitis").unwrap();
        let asthma = ranked.iter().find(|c| c.name == "Asthma").unwrap();
        assert_eq!(bronchitis.probability, 33);
        assert_eq!(asthma.probability, 23);
    }

    #[test]
    fn low_ratio_is_floored_at_twenty() {
        // one recognised symptom out of four
        let ranked = rank_conditions(&["rash", "zzz", "yyy", "xxx"]);
        let eczema = ranked.iter().find(|c| c.name == "Eczema").unwrap();
        assert_eq!(eczema.probability, MIN_PROBABILITY);
    }

    #[test]
    fn at_most_three_results() {
        let results = analyze_symptoms(&["headache", "cough", "nausea", "rash", "throat"]);
        assert_eq!(results.len(), MAX_RESULTS);
    }

    #[test]
    fn match_serializes_with_flat_fields() {
        let results = analyze_symptoms(&["zzz"]);
        let json = serde_json::to_value(&results[0]).unwrap();
        assert_eq!(json["condition"], "Unrecognized Symptoms");
        assert_eq!(json["probability"], "20");
    }
}
