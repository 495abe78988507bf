//! Durable key-value slots for the serialized history list.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::error::HistoryError;

/// A single named slot holding the serialized history.
///
/// `load` returns `Ok(None)` when the slot has never been written or was
/// removed.
pub trait HistoryStorage: Send + Sync {
    /// # Errors
    ///
    /// Returns [`HistoryError::Io`] if the slot exists but cannot be read.
    fn load(&self) -> Result<Option<String>, HistoryError>;

    /// # Errors
    ///
    /// Returns [`HistoryError::Io`] if the slot cannot be written.
    fn save(&self, payload: &str) -> Result<(), HistoryError>;

    /// Removing an absent slot is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError::Io`] if an existing slot cannot be removed.
    fn remove(&self) -> Result<(), HistoryError>;
}

/// In-process slot. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A slot pre-filled with `payload`, as if written by an earlier run.
    #[must_use]
    pub fn with_payload(payload: impl Into<String>) -> Self {
        Self {
            slot: Mutex::new(Some(payload.into())),
        }
    }

    /// Current raw slot contents.
    #[must_use]
    pub fn payload(&self) -> Option<String> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl HistoryStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, HistoryError> {
        Ok(self.payload())
    }

    fn save(&self, payload: &str) -> Result<(), HistoryError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = Some(payload.to_owned());
        Ok(())
    }

    fn remove(&self) -> Result<(), HistoryError> {
        *self.slot.lock().unwrap_or_else(PoisonError::into_inner) = None;
        Ok(())
    }
}

/// JSON file on disk. Writes go to a sibling temp file and are renamed into
/// place so a crash never leaves a half-written slot.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HistoryStorage for FileStorage {
    fn load(&self) -> Result<Option<String>, HistoryError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&self, payload: &str) -> Result<(), HistoryError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let temp = self.temp_path();
        std::fs::write(&temp, payload)?;
        std::fs::rename(&temp, &self.path)?;
        Ok(())
    }

    fn remove(&self) -> Result<(), HistoryError> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
