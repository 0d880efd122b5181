use std::sync::{
    atomic::{AtomicBool, AtomicU64, Ordering},
    Arc, Mutex, Once,
};

use crate::error::PersistenceError;
use crate::persistence::SlotStorage;
use crate::types::{BookingEntry, EntryDraft};

pub struct MockSlotStorageInner {
    pub success: AtomicBool,
    pub calls_to_load: AtomicU64,
    pub calls_to_store: AtomicU64,
    pub stored: Mutex<Option<Vec<BookingEntry>>>,
}

/// Counting mock for [`SlotStorage`]. Clones share the same inner state so a
/// test can keep a handle while the store owns another.
#[derive(Clone)]
pub struct MockSlotStorage(pub Arc<MockSlotStorageInner>);

impl MockSlotStorage {
    pub fn new() -> Self {
        Self(Arc::new(MockSlotStorageInner {
            success: AtomicBool::new(true),
            calls_to_load: AtomicU64::default(),
            calls_to_store: AtomicU64::default(),
            stored: Mutex::default(),
        }))
    }

    pub fn with_entries(entries: Vec<BookingEntry>) -> Self {
        let mock = Self::new();
        *mock.0.stored.lock().unwrap() = Some(entries);
        mock
    }

    fn failure() -> PersistenceError {
        PersistenceError::Io(std::io::Error::other("supposed to fail"))
    }
}

impl SlotStorage for MockSlotStorage {
    fn load(&self) -> Result<Option<Vec<BookingEntry>>, PersistenceError> {
        self.0.calls_to_load.fetch_add(1, Ordering::SeqCst);
        if !self.0.success.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }
        Ok(self.0.stored.lock().unwrap().clone())
    }

    fn store(&self, entries: &[BookingEntry]) -> Result<(), PersistenceError> {
        self.0.calls_to_store.fetch_add(1, Ordering::SeqCst);
        if !self.0.success.load(Ordering::SeqCst) {
            return Err(Self::failure());
        }
        *self.0.stored.lock().unwrap() = Some(entries.to_vec());
        Ok(())
    }
}

/// A draft that passes every `add` check.
pub fn valid_draft() -> EntryDraft {
    EntryDraft {
        name: "A".into(),
        mobile: Some("0123456789".into()),
        date: "01-01-2025".into(),
        time_start: "2:00 AM".into(),
        time_end: "3:00 AM".into(),
        box_number: "2".into(),
    }
}

/// A small sorted collection for storage tests.
pub fn example_entries() -> Vec<BookingEntry> {
    vec![
        BookingEntry {
            id: 1,
            name: "John Doe".into(),
            mobile: None,
            date: "15-10-2024".into(),
            time_slot: "10:00 AM - 11:00 AM".into(),
            box_number: "1".into(),
        },
        BookingEntry {
            id: 2,
            name: "Jane Smith".into(),
            mobile: Some("0123456789".into()),
            date: "16-10-2024".into(),
            time_slot: "11:00 AM - 12:00 PM".into(),
            box_number: "2".into(),
        },
    ]
}

pub fn init_tracing() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .init();
    });
}
