use thiserror::Error;

/// Errors raised by the doctor-answer persistence seam.
///
/// Matching itself is total and never fails; only loading and saving the
/// store can go wrong, and callers log these rather than surfacing them.
#[derive(Error, Debug)]
pub enum KnowledgeError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Stored answers are not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Temporary file could not be persisted: {0}")]
    Persist(#[from] tempfile::PersistError),

    #[error("No data directory available for slot {slot}")]
    NoDataDir { slot: String },
}
