use std::path::PathBuf;

/// Errors from ledger state operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// I/O error from the underlying storage backend.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted state could not be decoded.
    #[error("corrupt state file {path}: {reason}")]
    Corrupt { path: PathBuf, reason: String },

    /// Serialization failure while persisting state.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// A lock guarding the state was poisoned by a panicking writer.
    #[error("state lock poisoned")]
    Poisoned,

    /// The hosting platform refused or could not serve the request.
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
