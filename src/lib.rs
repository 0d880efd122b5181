//! Booking-slot manager core.
//!
//! An ordered collection of booking entries (name, contact, date, time
//! range, box number) with validation, box-number sorting, CRUD semantics,
//! and persistence to a single key-value slot. A presentation layer collects
//! input, calls the [`store::BookingStore`] operations, and renders
//! [`store::BookingStore::entries`]; it is not part of this crate.
//!
//! Known quirks kept for compatibility with existing stored data:
//! - box numbers sort as strings by default (`"10"` before `"2"`), see
//!   [`store::BoxNumberOrdering`];
//! - time ranges compare as strings, see
//!   [`time_options::start_precedes_end`];
//! - edits skip the required-field checks that `add` enforces.

pub mod configuration;
pub mod configuration_handler;
pub mod dates;
pub mod error;
pub mod json_file;
pub mod local_storage;
pub mod persistence;
pub mod store;
#[cfg(test)]
mod testutils;
pub mod time_options;
pub mod types;

pub use error::{LookupError, PersistenceError, StoreError, ValidationError};
pub use time_options::generate_time_options;
pub use store::{BookingStore, BoxNumberOrdering};
pub use types::{BookingEntry, EditSession, EntryDraft};
