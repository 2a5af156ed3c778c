use thiserror::Error;

/// Input rejections reported back to the caller for user-facing display.
///
/// Rules are checked in declaration order and the first failure wins; none of
/// these abort the session.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be a number greater than 0")]
    InvalidAmount,
    #[error("a category from the fixed set is required")]
    MissingCategory,
    #[error("a valid calendar date (YYYY-MM-DD) is required")]
    MissingDate,
}

/// Failures talking to the persistence backend.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read key `{key}`: {source}")]
    Read {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write key `{key}`: {source}")]
    Write {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize ledger: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Error type returned by the tracker facade, keeping validation rejections
/// distinguishable from persistence failures.
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Store(#[from] StoreError),
}
