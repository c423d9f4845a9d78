//! # sorted-array
//!
//! An always-sorted, contiguous sequence container with pluggable ordering,
//! tie-aware binary search and range change notification.
//!
//! ## Overview
//!
//! - **Ordering contracts** ([`ordering`]): comparator, equality and fallback
//!   strategies, with natural defaults and closure support.
//! - **Search engine** ([`search`]): four binary searches that differ in how
//!   they resolve runs of equal elements.
//! - **Sorted container** ([`sorted`]): [`SortedArray`], a multiset kept
//!   sorted under every insertion, deletion and range replacement.
//! - **Change notification** ([`observe`]): before/after events describing
//!   each structural change, at zero cost when nobody listens.
//!
//! Insertion and deletion shift the backing storage and cost O(n); lookups
//! cost O(log n). The container is not synchronised: share it across threads
//! only behind your own lock.
//!
//! ## Feature Flags
//!
//! - `serde`: `Serialize` for every [`SortedArray`] and `Deserialize` for the
//!   naturally ordered one.
//!
//! ## Example
//!
//! ```rust
//! use sorted_array::prelude::*;
//!
//! let mut array = SortedArray::from_values([1, 3, 3, 3, 5]);
//! assert_eq!(array.index_of(&3), Some(1));
//! assert_eq!(array.last_index_of(&3), Some(3));
//!
//! assert_eq!(array.delete_all(&3), 3);
//! assert_eq!(array.as_slice(), &[1, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use sorted_array::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::SortedArrayError;
    pub use crate::observe::{
        Observable, ObserverHandle, RangeChange, RangeChangeDispatcher, RangeChangeNotifier,
        RangeChangeObserver, Silent,
    };
    pub use crate::ordering::{
        Comparator, DefaultValue, Equivalence, NaturalEquality, NaturalOrder, NoDefault,
    };
    pub use crate::search::Location;
    pub use crate::sorted::{
        RangeMutable, Searchable, SortedArray, SortedArrayBuilder, SortedArrayIterator,
    };
}

pub mod error;
pub mod observe;
pub mod ordering;
pub mod search;
pub mod sorted;

pub use error::SortedArrayError;
pub use sorted::SortedArray;
