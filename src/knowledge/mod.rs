//! Offline doctor-answer lookup.
//!
//! `KnowledgeStore` owns the question → answer records, ranks them against
//! free-text questions and learns new records at runtime. It is loaded once
//! from a [`KnowledgeSlot`] and writes the whole store back to that slot
//! after every append. There is no process-wide instance: the composition
//! root owns the store and lends it to callers.

pub mod learn;
pub mod seed;
pub mod slot;

use serde::{Deserialize, Serialize};

use crate::matching::{length_weighted_ratio, similarity};

pub use seed::{keyword_suggestions, sample_questions, seed_records};
pub use slot::{FileSlot, KnowledgeSlot, MemorySlot};

/// Keyword ratio below which canonical-question similarity is also tried.
pub const KEYWORD_CONFIDENT: f64 = 0.4;

/// Similarity a question must exceed to be considered at all.
pub const SIMILARITY_FLOOR: f64 = 0.4;

/// Overall score a match must exceed to be returned.
pub const ACCEPT_THRESHOLD: f64 = 0.3;

/// Questions more similar than this to an existing one are not learned.
pub const DUPLICATE_SIMILARITY: f64 = 0.85;

/// Returned by [`KnowledgeStore::find_best_answer`] when nothing matches.
pub const FALLBACK_ANSWER: &str = "I understand you have a health-related question, but I don't have specific information about that topic in my current knowledge base. Here are some suggestions:\n\n• Try rephrasing your question using different keywords\n• Check the sample questions for similar topics\n• For urgent concerns, contact your healthcare provider immediately\n• For non-urgent questions, consider scheduling an appointment with your doctor\n• You can also contact disability-specific organizations for specialized guidance\n\nRemember, I'm here to provide general information, but your healthcare provider can give you personalized advice based on your specific situation.";

/// A stored question with its canonical answer.
///
/// Serialized field names are part of the persisted format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorAnswerRecord {
    pub question: String,
    pub answer: String,
    pub keywords: Vec<String>,
    /// Informational only; never used in ranking.
    pub category: String,
}

/// Which pass produced the best score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchSource {
    Keywords,
    QuestionSimilarity,
}

/// Result of scoring every record against one question.
#[derive(Debug, Clone)]
pub struct Ranking<'a> {
    pub best: Option<&'a DoctorAnswerRecord>,
    pub score: f64,
    pub source: Option<MatchSource>,
}

impl<'a> Ranking<'a> {
    /// The best record, if its score clears [`ACCEPT_THRESHOLD`].
    pub fn accepted(&self) -> Option<&'a DoctorAnswerRecord> {
        self.best.filter(|_| self.score > ACCEPT_THRESHOLD)
    }
}

/// Outcome of [`KnowledgeStore::save_new_question`].
#[derive(Debug, Clone, PartialEq)]
pub enum Learned {
    Appended { category: String, keywords: Vec<String> },
    Duplicate { existing_question: String },
    /// The question was empty after trimming; nothing was stored.
    Blank,
}

pub struct KnowledgeStore {
    records: Vec<DoctorAnswerRecord>,
    slot: Box<dyn KnowledgeSlot>,
}

impl KnowledgeStore {
    /// Load the store from `slot`.
    ///
    /// An empty slot is seeded and saved. An unreadable or corrupt slot falls
    /// back to the seed in memory without overwriting what is stored.
    pub fn load(slot: Box<dyn KnowledgeSlot>) -> Self {
        let records = match slot.read() {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<DoctorAnswerRecord>>(&raw) {
                Ok(records) => {
                    tracing::debug!(count = records.len(), slot = %slot.describe(), "Loaded doctor answers");
                    return Self { records, slot };
                }
                Err(e) => {
                    tracing::warn!(slot = %slot.describe(), "Stored doctor answers unreadable, using seed: {e}");
                    seed_records()
                }
            },
            Ok(None) => {
                let store = Self { records: seed_records(), slot };
                tracing::info!(count = store.records.len(), "Seeding doctor answers");
                store.persist();
                return store;
            }
            Err(e) => {
                tracing::warn!(slot = %slot.describe(), "Failed to read doctor answers, using seed: {e}");
                seed_records()
            }
        };

        Self { records, slot }
    }

    /// Seeded store over a fresh in-memory slot.
    pub fn in_memory() -> Self {
        Self::load(Box::new(MemorySlot::new()))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// All records in insertion order.
    pub fn all(&self) -> &[DoctorAnswerRecord] {
        &self.records
    }

    pub fn by_category(&self, category: &str) -> Vec<&DoctorAnswerRecord> {
        self.records.iter().filter(|r| r.category == category).collect()
    }

    /// Score every record against `question`.
    ///
    /// Keyword ratios come first. When none reaches [`KEYWORD_CONFIDENT`],
    /// each canonical question is compared by edit-distance similarity and
    /// may take over if it beats both the running best and
    /// [`SIMILARITY_FLOOR`]. Ties keep the earlier record.
    pub fn rank(&self, question: &str) -> Ranking<'_> {
        let normalized = question.trim().to_lowercase();

        let mut ranking = Ranking { best: None, score: 0.0, source: None };

        for record in &self.records {
            let ratio = length_weighted_ratio(&normalized, &record.keywords);
            if ratio > ranking.score {
                ranking = Ranking {
                    best: Some(record),
                    score: ratio,
                    source: Some(MatchSource::Keywords),
                };
            }
        }

        if ranking.score < KEYWORD_CONFIDENT {
            for record in &self.records {
                let sim = similarity(&normalized, &record.question.to_lowercase());
                if sim > ranking.score && sim > SIMILARITY_FLOOR {
                    ranking = Ranking {
                        best: Some(record),
                        score: sim,
                        source: Some(MatchSource::QuestionSimilarity),
                    };
                }
            }
        }

        ranking
    }

    /// Best accepted record for `question`, if any.
    pub fn find_best(&self, question: &str) -> Option<&DoctorAnswerRecord> {
        self.rank(question).accepted()
    }

    /// Answer text for `question`, or [`FALLBACK_ANSWER`].
    pub fn find_best_answer(&self, question: &str) -> &str {
        match self.find_best(question) {
            Some(record) => record.answer.as_str(),
            None => FALLBACK_ANSWER,
        }
    }

    /// Learn a new question/answer pair.
    ///
    /// Keywords and category are derived from the question. A question with
    /// no usable keyword is stored with an empty list, so it can only ever
    /// be found by question similarity. Blank questions are refused. The
    /// insert is skipped when any stored question is more than
    /// [`DUPLICATE_SIMILARITY`] similar. A failed save is logged; the record
    /// stays available in memory.
    pub fn save_new_question(&mut self, question: &str, answer: &str) -> Learned {
        let trimmed = question.trim();
        if trimmed.is_empty() {
            tracing::debug!("Refusing to learn a blank question");
            return Learned::Blank;
        }

        let lowered = question.to_lowercase();
        if let Some(existing) = self
            .records
            .iter()
            .find(|r| similarity(&r.question.to_lowercase(), &lowered) > DUPLICATE_SIMILARITY)
        {
            tracing::debug!(existing = %existing.question, "Skipping duplicate question");
            return Learned::Duplicate {
                existing_question: existing.question.clone(),
            };
        }

        let keywords = learn::derive_keywords(trimmed);
        let category = learn::assign_category(&keywords).to_string();

        tracing::info!(category = %category, keywords = keywords.len(), "Learned new doctor answer");

        self.records.push(DoctorAnswerRecord {
            question: trimmed.to_string(),
            answer: answer.to_string(),
            keywords: keywords.clone(),
            category: category.clone(),
        });
        self.persist();

        Learned::Appended { category, keywords }
    }

    fn persist(&self) {
        let json = match serde_json::to_string(&self.records) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!("Failed to serialize doctor answers: {e}");
                return;
            }
        };

        if let Err(e) = self.slot.write(&json) {
            tracing::error!(slot = %self.slot.describe(), "Failed to save doctor answers: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::KnowledgeError;

    /// Slot whose writes always fail.
    struct ReadOnlySlot;

    impl KnowledgeSlot for ReadOnlySlot {
        fn describe(&self) -> String {
            "read-only".into()
        }

        fn read(&self) -> Result<Option<String>, KnowledgeError> {
            Ok(Some(serde_json::to_string(&seed_records()).unwrap()))
        }

        fn write(&self, _contents: &str) -> Result<(), KnowledgeError> {
            Err(KnowledgeError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only",
            )))
        }
    }

    fn mobility_exercise_answer() -> String {
        seed_records()
            .into_iter()
            .find(|r| r.question == "What exercises can I do with limited mobility?")
            .map(|r| r.answer)
            .unwrap()
    }

    // =================================================================
    // LOOKUP
    // =================================================================

    #[test]
    fn exact_keyword_phrasing_returns_seeded_answer() {
        let store = KnowledgeStore::in_memory();
        let answer = store.find_best_answer("What exercises can I do with limited mobility?");
        assert_eq!(answer, mobility_exercise_answer());
    }

    #[test]
    fn keyword_pass_reports_ratio() {
        let store = KnowledgeStore::in_memory();
        let ranking = store.rank("What exercises can I do with limited mobility?");
        assert_eq!(ranking.source, Some(MatchSource::Keywords));
        assert!((ranking.score - 6.0 / 9.0).abs() < 1e-12);
    }

    #[test]
    fn gibberish_returns_fallback() {
        let store = KnowledgeStore::in_memory();
        let ranking = store.rank("asdkjasjdk");
        assert!(ranking.score <= ACCEPT_THRESHOLD);
        assert_eq!(store.find_best_answer("asdkjasjdk"), FALLBACK_ANSWER);
    }

    #[test]
    fn blank_question_returns_fallback() {
        let store = KnowledgeStore::in_memory();
        assert_eq!(store.find_best_answer("   "), FALLBACK_ANSWER);
    }

    #[test]
    fn misspelled_question_matches_by_similarity() {
        let store = KnowledgeStore::in_memory();
        let ranking = store.rank("How do I find acessible housng?");
        assert_eq!(ranking.source, Some(MatchSource::QuestionSimilarity));
        let best = ranking.accepted().unwrap();
        assert_eq!(best.question, "How do I find accessible housing?");
        assert!(ranking.score > 0.9);
    }

    #[test]
    fn input_is_case_and_whitespace_insensitive() {
        let store = KnowledgeStore::in_memory();
        let answer = store.find_best_answer("   WHAT EXERCISES CAN I DO WITH LIMITED MOBILITY?  ");
        assert_eq!(answer, mobility_exercise_answer());
    }

    #[test]
    fn by_category_filters() {
        let store = KnowledgeStore::in_memory();
        let mobility = store.by_category("mobility");
        assert_eq!(mobility.len(), 3);
        assert!(mobility.iter().all(|r| r.category == "mobility"));
        assert!(store.by_category("no-such-category").is_empty());
    }

    // =================================================================
    // LOAD / PERSIST
    // =================================================================

    #[test]
    fn empty_slot_is_seeded_and_saved() {
        let slot = MemorySlot::new();
        let store = KnowledgeStore::load(Box::new(slot.clone()));
        assert_eq!(store.len(), 23);

        let saved: Vec<DoctorAnswerRecord> =
            serde_json::from_str(&slot.snapshot().unwrap()).unwrap();
        assert_eq!(saved, seed_records());
    }

    #[test]
    fn corrupt_slot_falls_back_without_overwriting() {
        let slot = MemorySlot::with_contents("{not json");
        let store = KnowledgeStore::load(Box::new(slot.clone()));
        assert_eq!(store.len(), 23);
        assert_eq!(slot.snapshot().as_deref(), Some("{not json"));
    }

    #[test]
    fn stored_records_replace_seed() {
        let stored = vec![DoctorAnswerRecord {
            question: "Where is the clinic?".into(),
            answer: "Main street.".into(),
            keywords: vec!["clinic".into()],
            category: "general".into(),
        }];
        let slot = MemorySlot::with_contents(serde_json::to_string(&stored).unwrap());
        let store = KnowledgeStore::load(Box::new(slot));
        assert_eq!(store.all(), stored.as_slice());
        assert_eq!(store.find_best_answer("which clinic is open"), "Main street.");
    }

    #[test]
    fn persisted_json_uses_flat_field_names() {
        let record = &seed_records()[0];
        let value = serde_json::to_value(record).unwrap();
        let object = value.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["answer", "category", "keywords", "question"]);
    }

    #[test]
    fn file_backed_store_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut store = KnowledgeStore::load(Box::new(FileSlot::in_dir(dir.path(), "doctorAnswers")));
            store.save_new_question("Where can I get a wheelchair ramp installed?", "Ask your council.");
        }
        let store = KnowledgeStore::load(Box::new(FileSlot::in_dir(dir.path(), "doctorAnswers")));
        assert_eq!(store.len(), 24);
        assert_eq!(store.all()[23].answer, "Ask your council.");
    }

    #[test]
    fn corrupt_file_falls_back_to_seed() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path(), "doctorAnswers");
        std::fs::write(slot.path(), "[{\"question\": 1}]").unwrap();

        let store = KnowledgeStore::load(Box::new(FileSlot::in_dir(dir.path(), "doctorAnswers")));
        assert_eq!(store.len(), 23);
        assert_eq!(
            std::fs::read_to_string(slot.path()).unwrap(),
            "[{\"question\": 1}]"
        );
    }

    // =================================================================
    // LEARN
    // =================================================================

    #[test]
    fn learned_question_is_appended_and_matchable() {
        let slot = MemorySlot::new();
        let mut store = KnowledgeStore::load(Box::new(slot.clone()));

        let outcome = store.save_new_question(
            "  How do I get a wheelchair ramp installed at home?  ",
            "Contact your local housing authority.",
        );
        assert_eq!(
            outcome,
            Learned::Appended {
                category: "mobility".into(),
                keywords: vec!["wheelchair".into(), "ramp".into(), "installed".into()],
            }
        );
        assert_eq!(store.len(), 24);
        assert_eq!(store.all()[23].question, "How do I get a wheelchair ramp installed at home?");
        assert_eq!(
            store.find_best_answer("wheelchair ramp installed"),
            "Contact your local housing authority."
        );

        let saved: Vec<DoctorAnswerRecord> =
            serde_json::from_str(&slot.snapshot().unwrap()).unwrap();
        assert_eq!(saved.len(), 24);
    }

    #[test]
    fn near_identical_questions_learned_once() {
        let mut store = KnowledgeStore::in_memory();
        let first = store.save_new_question("How do I get a wheelchair ramp installed at home?", "A");
        let second = store.save_new_question("How do I get a wheelchair ramp installed at home", "B");

        assert!(matches!(first, Learned::Appended { .. }));
        assert_eq!(
            second,
            Learned::Duplicate {
                existing_question: "How do I get a wheelchair ramp installed at home?".into(),
            }
        );
        assert_eq!(store.len(), 24);
        assert_eq!(store.all()[23].answer, "A");
    }

    #[test]
    fn seeded_question_is_a_duplicate() {
        let mut store = KnowledgeStore::in_memory();
        let outcome = store.save_new_question("how do i find accessible housing", "Other answer");
        assert!(matches!(outcome, Learned::Duplicate { .. }));
        assert_eq!(store.len(), 23);
    }

    #[test]
    fn keywordless_question_is_stored_without_keywords() {
        let mut store = KnowledgeStore::in_memory();
        let outcome = store.save_new_question("Is it ok?", "Probably.");
        assert_eq!(
            outcome,
            Learned::Appended {
                category: "general".into(),
                keywords: Vec::new(),
            }
        );
        assert!(store.all()[23].keywords.is_empty());
    }

    #[test]
    fn blank_question_is_refused() {
        let slot = MemorySlot::new();
        let mut store = KnowledgeStore::load(Box::new(slot.clone()));
        let before = slot.snapshot();

        assert_eq!(store.save_new_question("", "Poison."), Learned::Blank);
        assert_eq!(store.save_new_question("   ", "Poison."), Learned::Blank);
        assert_eq!(store.len(), 23);
        assert_eq!(slot.snapshot(), before);
        assert_eq!(store.find_best_answer("asdkjasjdk"), FALLBACK_ANSWER);
    }

    #[test]
    fn punctuation_only_question_does_not_capture_lookups() {
        let mut store = KnowledgeStore::in_memory();
        let outcome = store.save_new_question("?", "Hijack.");
        assert!(matches!(outcome, Learned::Appended { ref keywords, .. } if keywords.is_empty()));

        assert_eq!(store.find_best_answer("asdkjasjdk"), FALLBACK_ANSWER);
        assert_eq!(store.find_best_answer("Can I travel by train?"), FALLBACK_ANSWER);
        assert_eq!(
            store.find_best_answer("What exercises can I do with limited mobility?"),
            mobility_exercise_answer()
        );
    }

    #[test]
    fn keywordless_records_never_win_on_keywords() {
        let mut store = KnowledgeStore::in_memory();
        store.save_new_question("Is it ok?", "Probably.");
        store.save_new_question("?", "Hijack.");

        let ranking = store.rank("What exercises can I do with limited mobility?");
        assert_eq!(ranking.source, Some(MatchSource::Keywords));
        assert_eq!(ranking.accepted().map(|r| r.answer.clone()), Some(mobility_exercise_answer()));
        assert_eq!(store.find_best_answer("is it ok?"), "Probably.");
    }

    #[test]
    fn failed_save_keeps_record_in_memory() {
        let mut store = KnowledgeStore::load(Box::new(ReadOnlySlot));
        let outcome = store.save_new_question("Where can I borrow a mobility scooter?", "Try the library.");
        assert!(matches!(outcome, Learned::Appended { .. }));
        assert_eq!(store.len(), 24);
        assert_eq!(store.find_best_answer("borrow a mobility scooter"), "Try the library.");
    }
}
