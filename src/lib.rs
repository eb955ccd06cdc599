pub mod config;
pub mod error;
pub mod matching; // Edit distance, keyword scoring, sentiment
pub mod knowledge; // Offline doctor answers + learning
pub mod assistant; // Rule-based chat
pub mod symptoms; // Symptom → condition matcher
pub mod medicine; // Plain-language medication instructions
pub mod session;

use std::io::{BufRead, Write};

use tracing_subscriber::EnvFilter;

use crate::assistant::Assistant;
use crate::knowledge::{FileSlot, KnowledgeSlot, KnowledgeStore, MemorySlot};
use crate::session::{Reply, Session};

/// Pick the persistent slot, or an in-memory one when no data directory exists.
fn default_slot() -> Box<dyn KnowledgeSlot> {
    match FileSlot::from_config() {
        Ok(slot) => Box::new(slot),
        Err(e) => {
            tracing::warn!("{e}; learned answers will not survive restart");
            Box::new(MemorySlot::new())
        }
    }
}

pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let store = KnowledgeStore::load(default_slot());
    let mut session = Session::new(store, Assistant::default());
    let mut rng = rand::thread_rng();

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                tracing::error!("Failed to read input: {e}");
                break;
            }
        };

        match session.handle(&line, &mut rng) {
            Reply::Quit => break,
            Reply::Text(text) if text.is_empty() => {}
            Reply::Text(text) => {
                if writeln!(stdout, "{text}").and_then(|()| stdout.flush()).is_err() {
                    break;
                }
            }
        }
    }

    tracing::info!("{} stopped", config::APP_NAME);
}
