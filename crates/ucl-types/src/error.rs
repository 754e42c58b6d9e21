use thiserror::Error;

/// Errors produced while encoding or decoding records.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The bytes do not decode into the two-field record shape.
    #[error("malformed record: {0}")]
    Malformed(String),

    /// The encoder rejected the record.
    #[error("serialization error: {0}")]
    Serialization(String),
}

/// Result alias for record operations.
pub type RecordResult<T> = Result<T, RecordError>;
