//! Stepped iteration over a sorted container.

use std::fmt;
use std::iter::FusedIterator;

/// An iterator over a window of a [`SortedArray`](super::SortedArray),
/// created by [`SortedArray::iterate`](super::SortedArray::iterate).
///
/// Yields the elements at `start`, `start + step`, ... below `stop`. The
/// iterator is cheap to clone, and a clone restarts from the clone point.
///
/// # Examples
///
/// ```rust
/// use sorted_array::SortedArray;
///
/// let array = SortedArray::from_values([5, 1, 4, 2, 3]);
/// let iterator = array.iterate(1, 5, 2);
///
/// let first_pass: Vec<&i32> = iterator.clone().collect();
/// let second_pass: Vec<&i32> = iterator.collect();
/// assert_eq!(first_pass, vec![&2, &4]);
/// assert_eq!(first_pass, second_pass);
/// ```
pub struct SortedArrayIterator<'a, T> {
    elements: &'a [T],
    position: usize,
    stop: usize,
    step: usize,
}

impl<'a, T> SortedArrayIterator<'a, T> {
    pub(super) fn new(elements: &'a [T], start: usize, stop: usize, step: usize) -> Self {
        Self {
            elements,
            position: start,
            stop: stop.min(elements.len()),
            step: step.max(1),
        }
    }
}

impl<'a, T> Iterator for SortedArrayIterator<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        if self.position >= self.stop {
            return None;
        }
        let element = &self.elements[self.position];
        self.position = self.position.saturating_add(self.step);
        Some(element)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = if self.position >= self.stop {
            0
        } else {
            (self.stop - self.position - 1) / self.step + 1
        };
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for SortedArrayIterator<'_, T> {}

impl<T> FusedIterator for SortedArrayIterator<'_, T> {}

impl<T> Clone for SortedArrayIterator<'_, T> {
    fn clone(&self) -> Self {
        Self {
            elements: self.elements,
            position: self.position,
            stop: self.stop,
            step: self.step,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for SortedArrayIterator<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_list()
            .entries(self.clone())
            .finish()
    }
}
