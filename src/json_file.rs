use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::PersistenceError;
use crate::persistence::SlotStorage;
use crate::types::BookingEntry;

/// Durable [`SlotStorage`] backed by a single JSON file.
///
/// Writes go through a temp file in the same directory and replace the
/// target by rename, so readers only ever see a complete blob.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SlotStorage for JsonFileStorage {
    fn load(&self) -> Result<Option<Vec<BookingEntry>>, PersistenceError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&raw)?))
    }

    fn store(&self, entries: &[BookingEntry]) -> Result<(), PersistenceError> {
        let dir = self.path.parent().filter(|p| !p.as_os_str().is_empty());
        let mut file = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))?;
        serde_json::to_writer(&mut file, entries)?;
        file.flush()?;
        file.persist(&self.path)
            .map_err(|err| PersistenceError::Io(err.error))?;

        debug!(
            path = %self.path.display(),
            count = entries.len(),
            "stored entries"
        );
        Ok(())
    }
}
