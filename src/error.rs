//! Error types for sortkit.
//!
//! Well-formed calls cannot fail. The only runtime errors are ranges that
//! do not fit inside the sequence, reported before anything is touched.

use thiserror::Error;

/// A range or split point that does not describe positions of the sequence.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortError {
    #[error("Invalid range {begin}..{end} for a sequence of length {len}")]
    InvalidRange {
        begin: usize,
        end: usize,
        len: usize,
    },

    #[error("Split point {middle} is outside the range {begin}..{end}")]
    InvalidSplit {
        begin: usize,
        middle: usize,
        end: usize,
    },
}

/// A strategy name that is neither `recursive` nor `iterative`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown strategy '{0}', expected 'recursive' or 'iterative'")]
pub struct ParseStrategyError(pub String);

/// Check `begin <= end <= len`.
pub(crate) fn check_range(begin: usize, end: usize, len: usize) -> Result<(), SortError> {
    if begin > end || end > len {
        return Err(SortError::InvalidRange { begin, end, len });
    }
    return Ok(());
}
