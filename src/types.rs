use serde::{Deserialize, Serialize};

/// Separator between the start and end labels of a composed time slot.
pub const TIME_SLOT_SEPARATOR: &str = " - ";

/// One reservation, exactly as it appears in the stored blob.
///
/// The wire format is a JSON array of these records with camelCase field
/// names. `timeStart`/`timeEnd` are never persisted, only the composed
/// `timeSlot` string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingEntry {
    pub id: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub date: String,
    pub time_slot: String,
    pub box_number: String,
}

impl BookingEntry {
    /// Splits the composed time slot back into its start and end labels.
    /// A slot without a separator yields an empty end label.
    pub fn time_slot_parts(&self) -> (String, String) {
        let mut parts = self.time_slot.splitn(2, TIME_SLOT_SEPARATOR);
        let start = parts.next().unwrap_or_default().to_string();
        let end = parts.next().unwrap_or_default().to_string();
        (start, end)
    }
}

/// User input for a new or edited entry. `mobile` is the only optional field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub name: String,
    pub mobile: Option<String>,
    pub date: String,
    pub time_start: String,
    pub time_end: String,
    pub box_number: String,
}

impl EntryDraft {
    pub fn time_slot(&self) -> String {
        format!("{}{}{}", self.time_start, TIME_SLOT_SEPARATOR, self.time_end)
    }
}

/// An edit in progress, bound to the entry it was started from.
///
/// Returned by [`BookingStore::begin_edit`] and consumed by
/// [`BookingStore::save_edit`]. There is no cancel operation; dropping the
/// session discards the edit.
///
/// [`BookingStore::begin_edit`]: crate::store::BookingStore::begin_edit
/// [`BookingStore::save_edit`]: crate::store::BookingStore::save_edit
#[derive(Debug)]
pub struct EditSession {
    pub(crate) id: u32,
    pub draft: EntryDraft,
}

impl EditSession {
    /// Id of the entry being edited.
    pub fn id(&self) -> u32 {
        self.id
    }
}
