use thiserror::Error;

/// Input validation failures. Recovered at the presentation boundary and
/// shown to the user as a blocking notice, never fatal.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left empty. Carries the wire name of the field.
    #[error("required field `{0}` is empty")]
    MissingField(&'static str),

    /// The start label does not precede the end label.
    #[error("start time must be less than end time")]
    InvalidTimeRange,
}

/// Failure to find an entry by id.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LookupError {
    #[error("no entry with id {0}")]
    NotFound(u32),
}

/// Failure to read or write the stored blob.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to access stored entries: {0}")]
    Io(#[from] std::io::Error),

    #[error("stored entries are not valid JSON: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Everything a mutation can fail with: invalid input, or a write that
/// could not be committed.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
