use chrono::NaiveDate;

/// Canonical stored form, matching the seed data: `DD-MM-YYYY`.
pub const CANONICAL_FORMAT: &str = "%d-%m-%Y";

/// What a native date picker submits: `YYYY-MM-DD`.
const DATE_PICKER_FORMAT: &str = "%Y-%m-%d";

/// Normalizes a date string to the canonical `DD-MM-YYYY` form.
///
/// Date-picker input is converted; already-canonical strings are kept.
/// Anything else passes through unchanged, as entries have never been
/// rejected for an unrecognized date.
pub fn normalize(date: &str) -> String {
    if NaiveDate::parse_from_str(date, CANONICAL_FORMAT).is_ok() {
        return date.to_string();
    }
    match NaiveDate::parse_from_str(date, DATE_PICKER_FORMAT) {
        Ok(parsed) => parsed.format(CANONICAL_FORMAT).to_string(),
        Err(_) => date.to_string(),
    }
}
