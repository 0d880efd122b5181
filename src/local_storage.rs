use std::sync::{Arc, Mutex};

use crate::error::PersistenceError;
use crate::persistence::SlotStorage;
use crate::types::BookingEntry;

/// Non-durable [`SlotStorage`] keeping the serialized blob in memory.
///
/// Clones share the same slot, so a collection written through one handle is
/// visible to every other. The blob is stored in serialized form so the same
/// JSON round-trip applies as with the file backend.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage {
    blob: Arc<Mutex<Option<String>>>,
}

impl SlotStorage for LocalStorage {
    fn load(&self) -> Result<Option<Vec<BookingEntry>>, PersistenceError> {
        let blob = self.blob.lock().unwrap();
        match blob.as_deref() {
            None | Some("") => Ok(None),
            Some(raw) => Ok(Some(serde_json::from_str(raw)?)),
        }
    }

    fn store(&self, entries: &[BookingEntry]) -> Result<(), PersistenceError> {
        let raw = serde_json::to_string(entries)?;
        *self.blob.lock().unwrap() = Some(raw);
        Ok(())
    }
}
