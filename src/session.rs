//! Line-oriented command surface over the matching engine.
//!
//! Owns the doctor-answer store and the assistant, and turns one input
//! line into one reply. The binary feeds it stdin; tests feed it strings.

use rand::Rng;

use crate::assistant::Assistant;
use crate::knowledge::{self, KnowledgeStore, Learned};
use crate::symptoms;

const HELP: &str = "Commands:\n  ask <question>\n  learn <question> | <answer>\n  chat <message>\n  symptoms <symptom>, <symptom>, ...\n  samples\n  keywords\n  help\n  quit";

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Text(String),
    Quit,
}

pub struct Session {
    store: KnowledgeStore,
    assistant: Assistant,
}

impl Session {
    pub fn new(store: KnowledgeStore, assistant: Assistant) -> Self {
        Self { store, assistant }
    }

    pub fn store(&self) -> &KnowledgeStore {
        &self.store
    }

    /// Run one command line.
    pub fn handle<R: Rng + ?Sized>(&mut self, line: &str, rng: &mut R) -> Reply {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        let text = match command.to_lowercase().as_str() {
            "" => return Reply::Text(String::new()),
            "quit" | "exit" => return Reply::Quit,
            "ask" => self.store.find_best_answer(rest).to_string(),
            "learn" => self.learn(rest),
            "chat" => {
                let reply = self.assistant.respond(rest, rng);
                format!("{} (confidence {:.2})", reply.response, reply.confidence)
            }
            "symptoms" => {
                let list: Vec<&str> = rest.split(',').collect();
                symptoms::analyze_symptoms(&list)
                    .into_iter()
                    .map(|m| format!("{} ({}%): {}", m.condition, m.probability, m.advice))
                    .collect::<Vec<_>>()
                    .join("\n")
            }
            "samples" => knowledge::sample_questions().join("\n"),
            "keywords" => knowledge::keyword_suggestions().join(", "),
            "help" => HELP.to_string(),
            other => format!("Unknown command '{other}'.\n{HELP}"),
        };

        Reply::Text(text)
    }

    fn learn(&mut self, rest: &str) -> String {
        let Some((question, answer)) = rest.split_once('|') else {
            return "Usage: learn <question> | <answer>".to_string();
        };
        let (question, answer) = (question.trim(), answer.trim());
        if question.is_empty() || answer.is_empty() {
            return "Usage: learn <question> | <answer>".to_string();
        }

        match self.store.save_new_question(question, answer) {
            Learned::Appended { category, .. } => format!("Saved under '{category}'."),
            Learned::Duplicate { existing_question } => {
                format!("Already known as: {existing_question}")
            }
            Learned::Blank => "Usage: learn <question> | <answer>".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn session() -> Session {
        Session::new(KnowledgeStore::in_memory(), Assistant::default())
    }

    fn text(reply: Reply) -> String {
        match reply {
            Reply::Text(text) => text,
            Reply::Quit => panic!("unexpected quit"),
        }
    }

    #[test]
    fn ask_returns_answer() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(1);
        let reply = text(s.handle("ask How do I find accessible housing?", &mut rng));
        assert!(reply.starts_with("Finding accessible housing"));
    }

    #[test]
    fn learn_then_ask() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(1);
        let saved = text(s.handle("learn Where can I rent a mobility scooter? | Try the council.", &mut rng));
        assert_eq!(saved, "Saved under 'mobility'.");
        assert_eq!(s.store().len(), 24);

        let again = text(s.handle("learn where can i rent a mobility scooter | Other.", &mut rng));
        assert!(again.starts_with("Already known as:"));
        assert_eq!(s.store().len(), 24);
    }

    #[test]
    fn learn_requires_separator() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(1);
        let reply = text(s.handle("learn no separator here", &mut rng));
        assert!(reply.starts_with("Usage"));
        assert_eq!(s.store().len(), 23);
    }

    #[test]
    fn chat_reports_confidence() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(1);
        let reply = text(s.handle("chat", &mut rng));
        assert!(reply.ends_with("(confidence 1.00)"));
    }

    #[test]
    fn symptoms_are_comma_separated() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(1);
        let reply = text(s.handle("symptoms headache, fever", &mut rng));
        assert!(reply.starts_with("Common Cold (90%)"));
        assert_eq!(reply.lines().count(), 3);
    }

    #[test]
    fn quit_and_unknown() {
        let mut s = session();
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(s.handle("QUIT", &mut rng), Reply::Quit);
        assert!(text(s.handle("dance", &mut rng)).starts_with("Unknown command 'dance'"));
    }
}
