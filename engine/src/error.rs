//! Error types for the generator engine
//!
//! Every contract violation is a hard failure surfaced to the caller at the
//! call that triggered it. Nothing here is retried or replaced by a default.

use thiserror::Error;

/// Errors that can occur during generator operations
#[derive(Debug, Error)]
pub enum RngError {
    /// Caller supplied an argument the operation cannot accept
    /// (non-positive counts, empty buffers, zero total weight, ...)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric argument fell outside the range the operation accepts
    #[error("Argument '{name}' out of range ({value}): {detail}")]
    OutOfRange {
        name: &'static str,
        value: String,
        detail: String,
    },

    /// Odds test with a zero denominator
    #[error("Attempted to divide by zero")]
    DivideByZero,

    /// Persisted state failed validation
    #[error("Corrupted generator state: {0}")]
    CorruptedState(String),

    /// Transport failure while reading or writing a state stream
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// This thread's shared generator is already borrowed by an enclosing
    /// `with_shared` call
    #[error("Shared generator is already in use on this thread")]
    SharedBusy,

    /// JSON snapshot encode/decode failure
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RngError {
    pub(crate) fn out_of_range(
        name: &'static str,
        value: impl ToString,
        detail: impl Into<String>,
    ) -> Self {
        RngError::OutOfRange {
            name,
            value: value.to_string(),
            detail: detail.into(),
        }
    }
}

/// Result alias used throughout the crate
pub type RngResult<T> = Result<T, RngError>;
