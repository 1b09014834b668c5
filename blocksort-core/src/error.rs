//! Error types for block-sorting operations.
//!
//! Every error here is either a caller contract violation (bad index, bad
//! buffer length, a provider that broke the suffix array contract) or a
//! resource limit. None of them is retried internally.

use std::collections::TryReserveError;
use thiserror::Error;

/// The main error type for blocksort operations.
#[derive(Debug, Error)]
pub enum BlockSortError {
    /// Primary index outside `[0, len)`, or not the empty sentinel for an
    /// empty permutation.
    #[error("Invalid primary index {index} for a block of {len} bytes")]
    InvalidIndex {
        /// The rejected primary index.
        index: usize,
        /// Length of the permutation it was supplied with.
        len: usize,
    },

    /// A buffer does not have the length the operation requires.
    #[error("Length mismatch: expected {expected} bytes, got {actual}")]
    LengthMismatch {
        /// Required length.
        expected: usize,
        /// Length actually supplied.
        actual: usize,
    },

    /// Scratch or output buffer could not be sized.
    #[error("Allocation of {requested} elements failed: {source}")]
    Allocation {
        /// Number of elements requested.
        requested: usize,
        /// Underlying reservation failure.
        #[source]
        source: TryReserveError,
    },

    /// A suffix array provider returned something that is not a suffix
    /// array of its input.
    #[error("Invalid suffix array: {message}")]
    InvalidSuffixArray {
        /// Description of the violation.
        message: String,
    },
}

/// Result type alias for blocksort operations.
pub type Result<T> = std::result::Result<T, BlockSortError>;

impl BlockSortError {
    /// Create an invalid index error.
    pub fn invalid_index(index: usize, len: usize) -> Self {
        Self::InvalidIndex { index, len }
    }

    /// Create a length mismatch error.
    pub fn length_mismatch(expected: usize, actual: usize) -> Self {
        Self::LengthMismatch { expected, actual }
    }

    /// Create an allocation error.
    pub fn allocation(requested: usize, source: TryReserveError) -> Self {
        Self::Allocation { requested, source }
    }

    /// Create an invalid suffix array error.
    pub fn invalid_suffix_array(message: impl Into<String>) -> Self {
        Self::InvalidSuffixArray {
            message: message.into(),
        }
    }

    /// Whether the error reports a resource limit rather than a contract
    /// violation. Callers splitting input into blocks may shrink the block
    /// and try again on these.
    pub fn is_resource_error(&self) -> bool {
        matches!(self, Self::Allocation { .. })
    }
}

/// Resize `buf` to exactly `len` elements filled with `value`, reporting
/// reservation failure instead of aborting.
pub fn try_resize<T: Clone>(buf: &mut Vec<T>, len: usize, value: T) -> Result<()> {
    buf.clear();
    buf.try_reserve_exact(len)
        .map_err(|e| BlockSortError::allocation(len, e))?;
    buf.resize(len, value);
    Ok(())
}
