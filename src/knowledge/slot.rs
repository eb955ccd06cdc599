//! Persistence seam for the doctor-answer store.
//!
//! The store is saved as one JSON document under a single named slot.
//! `FileSlot` is the real backend; `MemorySlot` backs tests and ephemeral
//! sessions.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::config;
use crate::error::KnowledgeError;

/// A single named key-value slot holding the serialized store.
pub trait KnowledgeSlot: Send + Sync {
    /// Human-readable location, for logs.
    fn describe(&self) -> String;

    /// Raw slot contents, or `None` if the slot was never written.
    fn read(&self) -> Result<Option<String>, KnowledgeError>;

    /// Replace the slot contents.
    fn write(&self, contents: &str) -> Result<(), KnowledgeError>;
}

/// Slot backed by `<data_dir>/<slot>.json`, replaced atomically on write.
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Slot named `slot` inside `data_dir`.
    pub fn in_dir(data_dir: &Path, slot: &str) -> Self {
        Self::new(config::slot_path(data_dir, slot))
    }

    /// The default store slot under the configured application data directory.
    pub fn from_config() -> Result<Self, KnowledgeError> {
        let dir = config::app_data_dir().ok_or_else(|| KnowledgeError::NoDataDir {
            slot: config::STORE_SLOT.to_string(),
        })?;
        Ok(Self::in_dir(&dir, config::STORE_SLOT))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl KnowledgeSlot for FileSlot {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Option<String>, KnowledgeError> {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> Result<(), KnowledgeError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        std::fs::create_dir_all(&dir)?;

        // Write next to the target so the rename stays on one filesystem.
        let mut staged = tempfile::NamedTempFile::new_in(&dir)?;
        staged.write_all(contents.as_bytes())?;
        staged.as_file().sync_all()?;
        staged.persist(&self.path)?;
        Ok(())
    }
}

/// In-memory slot. Clones share the same contents.
#[derive(Clone, Default)]
pub struct MemorySlot {
    contents: Arc<RwLock<Option<String>>>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-populated with `contents`.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Arc::new(RwLock::new(Some(contents.into()))),
        }
    }

    /// Current contents, for inspection. A poisoned slot reads as `None`;
    /// use [`KnowledgeSlot::read`] to tell the two apart.
    pub fn snapshot(&self) -> Option<String> {
        self.read().ok().flatten()
    }
}

fn poisoned() -> KnowledgeError {
    KnowledgeError::Io(std::io::Error::other("memory slot lock poisoned"))
}

impl KnowledgeSlot for MemorySlot {
    fn describe(&self) -> String {
        "memory".to_string()
    }

    fn read(&self) -> Result<Option<String>, KnowledgeError> {
        let guard = self.contents.read().map_err(|_| poisoned())?;
        Ok(guard.clone())
    }

    fn write(&self, contents: &str) -> Result<(), KnowledgeError> {
        let mut guard = self.contents.write().map_err(|_| poisoned())?;
        *guard = Some(contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_empty_slot() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path(), "doctorAnswers");
        assert!(slot.read().unwrap().is_none());
    }

    #[test]
    fn file_slot_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path(), "doctorAnswers");
        slot.write("[]").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
        assert!(slot.path().ends_with("doctorAnswers.json"));
    }

    #[test]
    fn file_slot_overwrites_and_creates_parent() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::new(dir.path().join("nested").join("answers.json"));
        slot.write("first").unwrap();
        slot.write("second").unwrap();
        assert_eq!(slot.read().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn file_slot_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let slot = FileSlot::in_dir(dir.path(), "doctorAnswers");
        slot.write("[]").unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn unreadable_path_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be
        let slot = FileSlot::new(dir.path());
        assert!(matches!(slot.read(), Err(KnowledgeError::Io(_))));
    }

    #[test]
    fn memory_slot_clones_share_contents() {
        let slot = MemorySlot::new();
        let observer = slot.clone();
        assert!(observer.snapshot().is_none());
        slot.write("[1]").unwrap();
        assert_eq!(observer.snapshot().as_deref(), Some("[1]"));
    }

    fn poison(slot: &MemorySlot) {
        let shared = slot.clone();
        let outcome = std::thread::spawn(move || {
            let _guard = shared.contents.write().unwrap();
            panic!("writer died holding the lock");
        })
        .join();
        assert!(outcome.is_err());
    }

    #[test]
    fn poisoned_memory_slot_read_is_an_error() {
        let slot = MemorySlot::with_contents("[]");
        poison(&slot);
        assert!(matches!(slot.read(), Err(KnowledgeError::Io(_))));
        assert!(matches!(slot.write("[1]"), Err(KnowledgeError::Io(_))));
    }

    #[test]
    fn memory_slot_with_contents() {
        let slot = MemorySlot::with_contents("[]");
        assert_eq!(slot.read().unwrap().as_deref(), Some("[]"));
        assert_eq!(slot.describe(), "memory");
    }
}
