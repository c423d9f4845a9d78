//! Error types for sorted containers.
//!
//! Lookups and deletions never fail: a missing element is reported through
//! `Option`, `bool` or a zero count. The only errors are usage errors, raised
//! when a caller passes an argument that a sorted container cannot honour
//! (a per-call equality override or a search start index). These are
//! signalled before any mutation takes place.

/// Represents a usage error reported by a sorted container.
///
/// # Examples
///
/// ```rust
/// use sorted_array::error::SortedArrayError;
///
/// let error = SortedArrayError::UnsupportedEquality { method: "has" };
/// assert_eq!(
///     format!("{error}"),
///     "SortedArray::has does not support an equality override"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SortedArrayError {
    /// A per-call equality function was passed to a method that relies on the
    /// container's own ordering and equality.
    #[error("SortedArray::{method} does not support an equality override")]
    UnsupportedEquality {
        /// The name of the rejecting method.
        method: &'static str,
    },
    /// A start index was passed to a search that always covers the whole
    /// sequence.
    #[error("SortedArray::{method} does not support a start index")]
    UnsupportedStartIndex {
        /// The name of the rejecting method.
        method: &'static str,
    },
}
