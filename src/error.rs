//! Error types.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type TspResult<T> = Result<T, TspError>;

/// Errors raised by tour construction, bounding, and the surrounding I/O.
///
/// The algorithms only ever return [`TspError::InvalidInput`]; the other
/// variants come from loading configuration or point files.
#[derive(Debug, Error)]
pub enum TspError {
    /// City count below an algorithm's minimum, or a malformed matrix.
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// What was wrong with the input.
        reason: String,
    },

    /// File I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl TspError {
    /// Shorthand for [`TspError::InvalidInput`].
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns `true` for [`TspError::InvalidInput`].
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

/// Rejects a city count below `min` for the named algorithm.
pub(crate) fn require_cities(algorithm: &str, n: usize, min: usize) -> TspResult<()> {
    if n < min {
        return Err(TspError::invalid_input(format!(
            "{algorithm} needs at least {min} cities, got {n}"
        )));
    }
    Ok(())
}
