use thiserror::Error;

/// Rejections raised by [`crate::counters::CounterStore::add_counter`].
///
/// Checked in declaration order; the first failing rule wins.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("name required")]
    NameRequired,

    #[error("name not unique")]
    NameNotUnique,

    #[error("increment must be positive")]
    IncrementNotPositive,
}

#[derive(Error, Debug)]
pub enum TallyError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{name} cannot go below zero (value {value}, delta {delta})")]
    OutOfRange { name: String, value: i64, delta: i64 },

    /// The counter or the list total would leave the `i64` range.
    #[error("{name} cannot go any higher (value {value}, delta {delta})")]
    Overflow { name: String, value: i64, delta: i64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TallyError>;
