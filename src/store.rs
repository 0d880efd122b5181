use std::cmp::Ordering;

use tracing::{info, warn};

use crate::configuration::Configuration;
use crate::dates;
use crate::error::{LookupError, PersistenceError, StoreError, ValidationError};
use crate::json_file::JsonFileStorage;
use crate::persistence::SlotStorage;
use crate::time_options::start_precedes_end;
use crate::types::{BookingEntry, EditSession, EntryDraft};

/// How entries are ordered by box number.
///
/// Box numbers have always been compared as strings, so `"10"` sorts before
/// `"2"`. That stays the default to keep existing blobs ordered the same
/// way; `Numeric` is the corrected comparison for deployments that can
/// tolerate the reordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BoxNumberOrdering {
    #[default]
    Lexicographic,
    Numeric,
}

impl BoxNumberOrdering {
    fn compare(self, a: &str, b: &str) -> Ordering {
        match self {
            Self::Lexicographic => a.cmp(b),
            Self::Numeric => match (a.parse::<u64>(), b.parse::<u64>()) {
                (Ok(a), Ok(b)) => a.cmp(&b),
                _ => a.cmp(b),
            },
        }
    }
}

/// Owns the ordered collection of booking entries.
///
/// Every mutation validates first, then sorts and persists the new
/// collection before adopting it, so memory and storage never diverge and a
/// failed operation leaves both untouched.
#[derive(Debug)]
pub struct BookingStore<S: SlotStorage> {
    storage: S,
    ordering: BoxNumberOrdering,
    entries: Vec<BookingEntry>,
}

impl BookingStore<JsonFileStorage> {
    /// File-backed store at the configured path.
    pub fn from_configuration<C: Configuration>(
        configuration: &C,
    ) -> Result<Self, PersistenceError> {
        let storage = JsonFileStorage::new(configuration.storage_path());
        Self::initialize(storage, configuration.box_number_ordering())
    }
}

impl<S: SlotStorage> BookingStore<S> {
    /// Loads the last stored collection, falling back to the seed entries
    /// when nothing has been stored yet. The seed set is not written back
    /// until the first mutation persists it.
    pub fn initialize(storage: S, ordering: BoxNumberOrdering) -> Result<Self, PersistenceError> {
        let mut entries = match storage.load()? {
            Some(entries) => entries,
            None => {
                info!("no stored entries, starting from seed data");
                seed_entries()
            }
        };
        sort_entries(&mut entries, ordering);
        Ok(Self {
            storage,
            ordering,
            entries,
        })
    }

    /// Current collection, in sorted order.
    pub fn entries(&self) -> &[BookingEntry] {
        &self.entries
    }

    /// Registers a new booking. All fields except `mobile` are required, and
    /// the start label must precede the end label.
    pub fn add(&mut self, draft: EntryDraft) -> Result<&[BookingEntry], StoreError> {
        validate_required(&draft)?;
        if !start_precedes_end(&draft.time_start, &draft.time_end) {
            return Err(ValidationError::InvalidTimeRange.into());
        }

        let id = self.next_id();
        let time_slot = draft.time_slot();
        let mut updated = self.entries.clone();
        updated.push(BookingEntry {
            id,
            name: draft.name,
            mobile: draft.mobile,
            date: dates::normalize(&draft.date),
            time_slot,
            box_number: draft.box_number,
        });
        self.commit(updated)?;

        info!(id, "entry added");
        Ok(&self.entries)
    }

    /// Starts editing the entry with the given id. The returned session
    /// carries a draft pre-populated with the entry's fields, the time slot
    /// split back into its start and end labels.
    pub fn begin_edit(&self, id: u32) -> Result<EditSession, LookupError> {
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.id == id)
            .ok_or(LookupError::NotFound(id))?;

        let (time_start, time_end) = entry.time_slot_parts();
        Ok(EditSession {
            id,
            draft: EntryDraft {
                name: entry.name.clone(),
                mobile: entry.mobile.clone(),
                date: entry.date.clone(),
                time_start,
                time_end,
                box_number: entry.box_number.clone(),
            },
        })
    }

    /// Replaces the edited entry with the session's draft values.
    ///
    /// Unlike [`add`](Self::add), required fields are not re-checked here;
    /// edits have only ever validated the time range. Harmonizing the two
    /// paths would change observable behavior, so the asymmetry is kept.
    pub fn save_edit(&mut self, session: EditSession) -> Result<&[BookingEntry], StoreError> {
        let EditSession { id, draft } = session;
        if !start_precedes_end(&draft.time_start, &draft.time_end) {
            return Err(ValidationError::InvalidTimeRange.into());
        }

        let mut updated = self.entries.clone();
        match updated.iter_mut().find(|entry| entry.id == id) {
            Some(entry) => {
                entry.time_slot = draft.time_slot();
                entry.name = draft.name;
                entry.mobile = draft.mobile;
                entry.date = dates::normalize(&draft.date);
                entry.box_number = draft.box_number;
            }
            None => warn!(id, "entry vanished before the edit was saved"),
        }
        self.commit(updated)?;

        info!(id, "entry updated");
        Ok(&self.entries)
    }

    /// Removes the entry with the given id. Deleting an unknown id is a
    /// silent no-op.
    pub fn delete(&mut self, id: u32) -> Result<&[BookingEntry], PersistenceError> {
        let mut updated = self.entries.clone();
        updated.retain(|entry| entry.id != id);
        self.commit(updated)?;

        info!(id, "entry deleted");
        Ok(&self.entries)
    }

    /// Sorts and persists the new collection, adopting it only after the
    /// write succeeded.
    fn commit(&mut self, mut updated: Vec<BookingEntry>) -> Result<(), PersistenceError> {
        sort_entries(&mut updated, self.ordering);
        self.storage.store(&updated)?;
        self.entries = updated;
        Ok(())
    }

    /// Ids grow past the current maximum so a deleted entry's id is not
    /// handed out again while higher ids exist.
    fn next_id(&self) -> u32 {
        self.entries.iter().map(|entry| entry.id).max().unwrap_or(0) + 1
    }
}

fn validate_required(draft: &EntryDraft) -> Result<(), ValidationError> {
    let required = [
        ("name", &draft.name),
        ("date", &draft.date),
        ("timeStart", &draft.time_start),
        ("timeEnd", &draft.time_end),
        ("boxNumber", &draft.box_number),
    ];
    for (field, value) in required {
        if value.is_empty() {
            return Err(ValidationError::MissingField(field));
        }
    }
    Ok(())
}

fn sort_entries(entries: &mut [BookingEntry], ordering: BoxNumberOrdering) {
    // stable, so entries within one box keep their insertion order
    entries.sort_by(|a, b| ordering.compare(&a.box_number, &b.box_number));
}

/// The fixed example entries used when storage holds nothing.
pub fn seed_entries() -> Vec<BookingEntry> {
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
            mobile: None,
            date: "16-10-2024".into(),
            time_slot: "11:00 AM - 12:00 PM".into(),
            box_number: "2".into(),
        },
        BookingEntry {
            id: 3,
            name: "Michael Lee".into(),
            mobile: None,
            date: "17-10-2024".into(),
            time_slot: "1:00 PM - 2:00 PM".into(),
            box_number: "1".into(),
        },
    ]
}
