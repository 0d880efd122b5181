use crate::error::PersistenceError;
use crate::types::BookingEntry;

/// A single named slot holding the whole serialized collection as one blob.
///
/// Reads return the last written snapshot or nothing; writes fully replace
/// the previous snapshot. There is one writer and no concurrent readers, so
/// implementations need no locking beyond what sharing a handle requires.
pub trait SlotStorage {
    /// Returns the stored collection, or `None` when nothing usable has been
    /// stored yet (missing slot, or an empty blob).
    fn load(&self) -> Result<Option<Vec<BookingEntry>>, PersistenceError>;

    /// Replaces the previous snapshot with `entries`.
    fn store(&self, entries: &[BookingEntry]) -> Result<(), PersistenceError>;
}
