//! Sorted sequence containers.
//!
//! This module provides [`SortedArray`], a contiguous sequence that keeps its
//! elements sorted under a pluggable ordering, together with the capability
//! traits it shares with unordered sequences:
//!
//! - [`Searchable`]: membership and index lookups.
//! - [`RangeMutable`]: range replacement and bulk removal.
//!
//! The change notification capability lives in [`crate::observe`].
//!
//! Unordered slices implement [`Searchable`] and `Vec` implements
//! [`RangeMutable`] as well. They honour the per-call equality overrides and
//! start indices that a sorted container has to reject, because its own
//! ordering decides where elements live. `Vec` has inherent `swap`, `splice`
//! and `clear` methods, so call the trait versions with
//! `RangeMutable::swap(&mut vector, ..)`.
//!
//! # Examples
//!
//! ```rust
//! use sorted_array::sorted::Searchable;
//! use sorted_array::SortedArray;
//!
//! let unordered = vec![5, 3, 5];
//! let sorted = SortedArray::from_values(unordered.clone());
//!
//! assert_eq!(unordered.index_of_from(&5, 1), Ok(Some(2)));
//! assert!(sorted.index_of_from(&5, 1).is_err());
//! assert_eq!(Searchable::index_of(&sorted, &5), Some(1));
//! ```

mod array;
mod builder;
mod iter;

pub use array::SortedArray;
pub use builder::SortedArrayBuilder;
pub use iter::SortedArrayIterator;

use crate::error::SortedArrayError;

/// Lookups shared by sorted and unordered sequences.
pub trait Searchable<T> {
    /// Returns `true` if an element equal to `value` is present.
    fn has(&self, value: &T) -> bool;

    /// Like [`has`](Self::has), comparing with `equals` instead of the
    /// container's own equality.
    ///
    /// # Errors
    ///
    /// Returns [`SortedArrayError::UnsupportedEquality`] if the container
    /// cannot honour an equality override.
    fn has_with<F>(&self, value: &T, equals: F) -> Result<bool, SortedArrayError>
    where
        F: Fn(&T, &T) -> bool;

    /// Returns the first element that `equals` matches against `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SortedArrayError::UnsupportedEquality`] if the container
    /// cannot honour an equality override.
    fn get_with<F>(&self, value: &T, equals: F) -> Result<Option<&T>, SortedArrayError>
    where
        F: Fn(&T, &T) -> bool;

    /// Returns the index of the first element equal to `value`.
    fn index_of(&self, value: &T) -> Option<usize>;

    /// Returns the index of the first element equal to `value` at or after
    /// `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SortedArrayError::UnsupportedStartIndex`] if the container
    /// always searches the whole sequence.
    fn index_of_from(&self, value: &T, start: usize) -> Result<Option<usize>, SortedArrayError>;

    /// Returns the index of the last element equal to `value`.
    fn last_index_of(&self, value: &T) -> Option<usize>;

    /// Returns the index of the last element equal to `value` at or before
    /// `start`.
    ///
    /// # Errors
    ///
    /// Returns [`SortedArrayError::UnsupportedStartIndex`] if the container
    /// always searches the whole sequence.
    fn last_index_of_from(
        &self,
        value: &T,
        start: usize,
    ) -> Result<Option<usize>, SortedArrayError>;
}

/// Range replacement and bulk removal.
pub trait RangeMutable<T> {
    /// Removes `length` elements starting at `index` (`None` meaning "to the
    /// end", a negative index counting from the end), inserts `plus`, and
    /// returns the removed elements.
    fn swap(&mut self, index: isize, length: Option<usize>, plus: Vec<T>) -> Vec<T>;

    /// Removes `remove_count` elements starting at `index`, inserts
    /// `to_insert`, and returns the removed elements.
    fn splice(&mut self, index: isize, remove_count: usize, to_insert: Vec<T>) -> Vec<T> {
        self.swap(index, Some(remove_count), to_insert)
    }

    /// Removes every element.
    fn clear(&mut self);

    /// Removes the first element that `equals` matches against `value`.
    ///
    /// # Errors
    ///
    /// Returns [`SortedArrayError::UnsupportedEquality`] if the container
    /// cannot honour an equality override.
    fn delete_with<F>(&mut self, value: &T, equals: F) -> Result<bool, SortedArrayError>
    where
        F: Fn(&T, &T) -> bool;

    /// Removes every element that `equals` matches against `value`, wherever
    /// it sits, and returns how many were removed.
    fn delete_all_with<F>(&mut self, value: &T, equals: F) -> usize
    where
        F: Fn(&T, &T) -> bool;
}

impl<T: PartialEq> Searchable<T> for [T] {
    fn has(&self, value: &T) -> bool {
        self.contains(value)
    }

    fn has_with<F>(&self, value: &T, equals: F) -> Result<bool, SortedArrayError>
    where
        F: Fn(&T, &T) -> bool,
    {
        Ok(self.iter().any(|element| equals(value, element)))
    }

    fn get_with<F>(&self, value: &T, equals: F) -> Result<Option<&T>, SortedArrayError>
    where
        F: Fn(&T, &T) -> bool,
    {
        Ok(self.iter().find(|element| equals(value, element)))
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|element| element == value)
    }

    fn index_of_from(&self, value: &T, start: usize) -> Result<Option<usize>, SortedArrayError> {
        Ok(self
            .get(start..)
            .and_then(|tail| tail.iter().position(|element| element == value))
            .map(|offset| start + offset))
    }

    fn last_index_of(&self, value: &T) -> Option<usize> {
        self.iter().rposition(|element| element == value)
    }

    fn last_index_of_from(
        &self,
        value: &T,
        start: usize,
    ) -> Result<Option<usize>, SortedArrayError> {
        let end = start.saturating_add(1).min(self.len());
        Ok(self[..end].iter().rposition(|element| element == value))
    }
}

/// Resolves a possibly negative `index` and an optional `length` into a
/// `start..end` range clamped to `len`.
pub(crate) fn normalize_range(len: usize, index: isize, length: Option<usize>) -> (usize, usize) {
    let start = if index < 0 {
        len.saturating_sub(index.unsigned_abs())
    } else {
        index.unsigned_abs().min(len)
    };
    let end = length.map_or(len, |length| start.saturating_add(length).min(len));
    (start, end)
}

impl<T: PartialEq> RangeMutable<T> for Vec<T> {
    /// Replaces the range in place; `plus` keeps its own order.
    fn swap(&mut self, index: isize, length: Option<usize>, plus: Vec<T>) -> Vec<T> {
        let (start, end) = normalize_range(self.len(), index, length);
        Self::splice(self, start..end, plus).collect()
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn delete_with<F>(&mut self, value: &T, equals: F) -> Result<bool, SortedArrayError>
    where
        F: Fn(&T, &T) -> bool,
    {
        Ok(self
            .iter()
            .position(|element| equals(value, element))
            .map(|index| self.remove(index))
            .is_some())
    }

    fn delete_all_with<F>(&mut self, value: &T, equals: F) -> usize
    where
        F: Fn(&T, &T) -> bool,
    {
        let before = self.len();
        self.retain(|element| !equals(value, element));
        before - self.len()
    }
}
