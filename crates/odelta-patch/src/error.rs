//! Error types for the patch crate.

/// Errors that can occur while applying a delta.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PatchError {
    /// An array delta addressed an index past the end of the array and the
    /// configured policy does not grow arrays.
    #[error("array index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// The array length entry was not a non-negative integer.
    #[error("invalid array length entry: {0}")]
    InvalidCount(String),

    /// An array delta asked for a length above the configured limit.
    #[error("array length {requested} exceeds limit {max}")]
    ArrayTooLong { requested: String, max: usize },

    /// The removed-fields entry was not an array of strings.
    #[error("invalid removed-fields entry: {0}")]
    InvalidRemovedList(String),
}

/// Convenience alias for patch results.
pub type PatchResult<T> = Result<T, PatchError>;
