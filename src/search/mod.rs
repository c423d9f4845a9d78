//! Binary search over sorted slices.
//!
//! Four entry points share one midpoint sequence and differ only in how they
//! resolve ties:
//!
//! | Function                   | Result                                             |
//! |----------------------------|----------------------------------------------------|
//! | [`locate`]                 | Some compare-equal element, or the gap to fill     |
//! | [`locate_first`]           | First element equal to the value                   |
//! | [`locate_last`]            | Last element equal to the value                    |
//! | [`locate_insertion_index`] | Position after the whole compare-equal run         |
//!
//! [`locate`] lands on whichever compare-equal element the midpoint sequence
//! reaches first. The other three walk linearly from there, so their cost is
//! O(log n + k) where k is the length of the compare-equal run.
//!
//! # Examples
//!
//! ```rust
//! use sorted_array::ordering::{NaturalEquality, NaturalOrder};
//! use sorted_array::search::{self, Location};
//!
//! let sequence = [1, 3, 3, 3, 5];
//! assert_eq!(search::locate(&sequence, &3, &NaturalOrder), Location::Found(2));
//! assert_eq!(search::locate(&sequence, &4, &NaturalOrder), Location::InsertBefore(4));
//! assert_eq!(search::locate_first(&sequence, &3, &NaturalOrder, &NaturalEquality), Some(1));
//! assert_eq!(search::locate_last(&sequence, &3, &NaturalOrder, &NaturalEquality), Some(3));
//! assert_eq!(search::locate_insertion_index(&sequence, &3, &NaturalOrder), 4);
//! ```

use std::cmp::Ordering;

use crate::ordering::{Comparator, Equivalence};

/// The outcome of a binary search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Location {
    /// An element comparing equal to the value sits at this index.
    Found(usize),
    /// No element compares equal; inserting at this index keeps the
    /// sequence sorted.
    InsertBefore(usize),
}

impl Location {
    /// Returns the index of the matching element, if one was found.
    #[inline]
    #[must_use]
    pub const fn found(self) -> Option<usize> {
        match self {
            Self::Found(index) => Some(index),
            Self::InsertBefore(_) => None,
        }
    }

    /// Returns the index carried by either outcome.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Found(index) | Self::InsertBefore(index) => index,
        }
    }
}

/// Searches `sequence` for an element comparing equal to `value`.
///
/// The search keeps an inclusive window `[first, last]` and always inspects
/// its floor midpoint. On a tie the inspected element is returned immediately,
/// which is not necessarily the first or last of its run.
///
/// # Complexity
///
/// O(log n)
pub fn locate<T, C>(sequence: &[T], value: &T, comparator: &C) -> Location
where
    C: Comparator<T> + ?Sized,
{
    let mut first = 0;
    // Exclusive bound; the inclusive `last` of the window is `end - 1`.
    let mut end = sequence.len();
    while first < end {
        let middle = first + (end - 1 - first) / 2;
        match comparator.compare(value, &sequence[middle]) {
            Ordering::Greater => first = middle + 1,
            Ordering::Less => end = middle,
            Ordering::Equal => return Location::Found(middle),
        }
    }
    Location::InsertBefore(first)
}

/// Returns the index of the first element that `equivalence` considers equal
/// to `value`, or `None`.
///
/// Only elements reachable from the landing point through a contiguous
/// run of equal elements are considered. If the landing point itself is not
/// equal (the comparator and the equivalence disagree there), the value is
/// reported as absent.
pub fn locate_first<T, C, E>(
    sequence: &[T],
    value: &T,
    comparator: &C,
    equivalence: &E,
) -> Option<usize>
where
    C: Comparator<T> + ?Sized,
    E: Equivalence<T> + ?Sized,
{
    let mut index = locate(sequence, value, comparator).found()?;
    while index > 0 && equivalence.equals(value, &sequence[index - 1]) {
        index -= 1;
    }
    equivalence
        .equals(value, &sequence[index])
        .then_some(index)
}

/// Returns the index of the last element that `equivalence` considers equal
/// to `value`, or `None`.
///
/// Mirror image of [`locate_first`].
pub fn locate_last<T, C, E>(
    sequence: &[T],
    value: &T,
    comparator: &C,
    equivalence: &E,
) -> Option<usize>
where
    C: Comparator<T> + ?Sized,
    E: Equivalence<T> + ?Sized,
{
    let mut index = locate(sequence, value, comparator).found()?;
    while index + 1 < sequence.len() && equivalence.equals(value, &sequence[index + 1]) {
        index += 1;
    }
    equivalence
        .equals(value, &sequence[index])
        .then_some(index)
}

/// Returns the index at which `value` must be inserted to keep `sequence`
/// sorted.
///
/// When compare-equal elements already exist, the returned index lies after
/// the last of them, so equal keys keep their insertion order.
pub fn locate_insertion_index<T, C>(sequence: &[T], value: &T, comparator: &C) -> usize
where
    C: Comparator<T> + ?Sized,
{
    match locate(sequence, value, comparator) {
        Location::InsertBefore(index) => index,
        Location::Found(mut index) => {
            while index + 1 < sequence.len()
                && comparator.compare(value, &sequence[index + 1]) == Ordering::Equal
            {
                index += 1;
            }
            index + 1
        }
    }
}
