use thiserror::Error;

/// Errors raised when converting raw data-service rows into typed
/// records. The codec and aggregation paths are total and never
/// return these.
#[derive(Error, Debug)]
pub enum HabitError {
    #[error("invalid execution date: {value}")]
    InvalidDate { value: String },

    #[error("negative commit count: {count}")]
    InvalidCount { count: i64 },

    #[error("malformed commit payload: {0}")]
    Payload(#[from] serde_json::Error),
}
