//! Error types for core records and storage.

use thiserror::Error;

/// Result type for core record operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors that can occur while working with records or a store.
#[derive(Debug, Error)]
pub enum CoreError {
    /// An attribute was requested that the character does not have.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),

    /// A record failed to serialize or deserialize.
    #[error("record serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A store could not read or write its backing medium.
    #[error("store I/O failed: {0}")]
    StoreIo(#[from] std::io::Error),

    /// A store key contained characters that are not allowed.
    #[error("invalid store key: {0:?}")]
    InvalidKey(String),
}
