//! Error types for the mechanics engine.

use thiserror::Error;

/// Result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;

/// Errors that can occur during rules resolution.
///
/// Deliberately small: expected edge cases (empty pools, zero points,
/// empty tables) are ordinary return values, not errors. Only caller
/// contract violations surface here.
#[derive(Debug, Error)]
pub enum MechError {
    /// A named attribute does not exist on the character record.
    #[error("unknown attribute: {0}")]
    UnknownAttribute(String),
}
