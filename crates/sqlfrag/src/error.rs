//! Error types for sqlfrag

use thiserror::Error;

/// Result type alias for fragment construction.
pub type FragResult<T> = Result<T, FragError>;

/// Errors raised while constructing fragments.
///
/// All failures are synchronous and raised before any partially built
/// [`Fragment`](crate::Fragment) is returned to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FragError {
    /// Interpolated construction received no literal segments at all.
    #[error("Expected at least one literal segment")]
    NoSegments,

    /// Literal segment count does not match interpolated value count.
    #[error("Expected {segments} literal segments to carry {expected} values, got {values}", expected = .segments - 1)]
    SegmentMismatch { segments: usize, values: usize },

    /// `join` called with an empty item list.
    #[error("Expected join to be called with at least one item, got an empty list")]
    EmptyJoin,

    /// `bulk` called with no rows, or with a first row of zero columns.
    #[error("Expected bulk to be called with at least one row of at least one column")]
    EmptyBulk,

    /// A `bulk` row whose length disagrees with the first row's.
    #[error("Expected bulk row {index} to have a length of {expected}, but got {got}")]
    RaggedRow {
        index: usize,
        expected: usize,
        got: usize,
    },
}
