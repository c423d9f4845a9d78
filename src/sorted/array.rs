//! The [`SortedArray`] container.

use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Index;

use super::builder::SortedArrayBuilder;
use super::iter::SortedArrayIterator;
use super::{RangeMutable, Searchable, normalize_range};
use crate::error::SortedArrayError;
use crate::observe::{
    Observable, ObserverHandle, RangeChangeDispatcher, RangeChangeNotifier, RangeChangeObserver,
    Silent,
};
use crate::ordering::{
    Comparator, DefaultValue, Equivalence, NaturalEquality, NaturalOrder, NoDefault,
};
use crate::search;

/// A contiguous sequence that is sorted at all times.
///
/// Elements are positioned by a [`Comparator`] and told apart inside a run of
/// compare-equal elements by an [`Equivalence`]. Duplicates are allowed: a new
/// element always lands after every element it compares equal to, so equal
/// keys keep their insertion order.
///
/// # Type Parameters
///
/// * `T` - The element type.
/// * `C` - The ordering strategy. Defaults to [`NaturalOrder`].
/// * `E` - The equality strategy. Defaults to [`NaturalEquality`].
/// * `D` - The fallback producer used by [`get`](Self::get). Defaults to
///   [`NoDefault`].
/// * `N` - The change notifier. Defaults to [`Silent`]; use
///   [`SortedArrayBuilder::observable`] for a [`RangeChangeDispatcher`].
///
/// # Complexity
///
/// | Operation                  | Cost                |
/// |----------------------------|---------------------|
/// | `has`, `get`, `index_of`   | O(log n + k)        |
/// | `add`, `delete`            | O(n)                |
/// | `delete_all`, `swap`       | O(n + m log n)      |
/// | `min`, `max`, `len`        | O(1)                |
///
/// where k is the length of the compare-equal run being walked.
///
/// # Examples
///
/// ```rust
/// use sorted_array::SortedArray;
///
/// let mut array = SortedArray::new();
/// array.add(5);
/// array.add(3);
/// array.add(5);
///
/// assert_eq!(array.as_slice(), &[3, 5, 5]);
/// assert_eq!(array.len(), 3);
/// ```
#[derive(Clone)]
pub struct SortedArray<T, C = NaturalOrder, E = NaturalEquality, D = NoDefault, N = Silent> {
    storage: Vec<T>,
    comparator: C,
    equivalence: E,
    default_value: D,
    notifier: N,
}

impl<T> SortedArray<T> {
    /// Returns a builder for configuring a new container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let array = SortedArray::builder()
    ///     .values(["pear", "fig", "banana"])
    ///     .compare_by(|left, right| left.len().cmp(&right.len()))
    ///     .build();
    /// assert_eq!(array.as_slice(), &["fig", "pear", "banana"]);
    /// ```
    #[inline]
    #[must_use]
    pub const fn builder() -> SortedArrayBuilder<T> {
        SortedArrayBuilder::new()
    }
}

impl<T: Ord> SortedArray<T> {
    /// Creates an empty container ordered by [`Ord`].
    #[inline]
    #[must_use]
    pub const fn new() -> Self {
        Self {
            storage: Vec::new(),
            comparator: NaturalOrder,
            equivalence: NaturalEquality,
            default_value: NoDefault,
            notifier: Silent,
        }
    }

    /// Creates a container holding `values`, inserted one at a time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let array = SortedArray::from_values(vec![3, 1, 2]);
    /// assert_eq!(array.as_slice(), &[1, 2, 3]);
    /// ```
    #[must_use]
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let mut array = Self::new();
        array.add_each(values);
        array
    }
}

// =============================================================================
// Unconstrained accessors
// =============================================================================

impl<T, C, E, D, N> SortedArray<T, C, E, D, N> {
    /// Returns the number of elements.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the container holds no elements.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Returns the elements as a sorted slice.
    #[inline]
    #[must_use]
    pub const fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Returns an iterator over the elements in sorted order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.storage.iter()
    }

    /// Returns an iterator over `[start, stop)` visiting every `step`-th
    /// element.
    ///
    /// `stop` is clamped to the length and a `step` of zero is treated as one.
    /// The iterator borrows the container, so it always observes the contents
    /// as they were when it was created. Clone it to restart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let array = SortedArray::from_values(0..10);
    /// let evens: Vec<i32> = array.iterate(0, 100, 2).copied().collect();
    /// assert_eq!(evens, vec![0, 2, 4, 6, 8]);
    /// ```
    #[inline]
    pub fn iterate(&self, start: usize, stop: usize, step: usize) -> SortedArrayIterator<'_, T> {
        SortedArrayIterator::new(&self.storage, start, stop, step)
    }

    /// Returns the elements in `[start, end)`, clamped to the container.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let array = SortedArray::from_values([1, 2, 3, 4]);
    /// assert_eq!(array.slice(1, 3), &[2, 3]);
    /// assert_eq!(array.slice(2, 99), &[3, 4]);
    /// assert!(array.slice(3, 1).is_empty());
    /// ```
    #[must_use]
    pub fn slice(&self, start: usize, end: usize) -> &[T] {
        let end = end.min(self.storage.len());
        let start = start.min(end);
        &self.storage[start..end]
    }

    /// Returns the smallest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn min(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Returns the largest element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn max(&self) -> Option<&T> {
        self.storage.last()
    }

    /// Returns any element, or `None` if empty.
    #[inline]
    #[must_use]
    pub fn one(&self) -> Option<&T> {
        self.storage.first()
    }

    /// Folds the elements front to back. The callback also receives each
    /// element's index.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let array = SortedArray::from_values([3, 1, 2]);
    /// let digits = array.reduce(0, |basis, value, _| basis * 10 + value);
    /// assert_eq!(digits, 123);
    /// ```
    pub fn reduce<B, F>(&self, basis: B, mut function: F) -> B
    where
        F: FnMut(B, &T, usize) -> B,
    {
        self.storage
            .iter()
            .enumerate()
            .fold(basis, |accumulator, (index, value)| {
                function(accumulator, value, index)
            })
    }

    /// Folds the elements back to front. The callback also receives each
    /// element's index.
    pub fn reduce_right<B, F>(&self, basis: B, mut function: F) -> B
    where
        F: FnMut(B, &T, usize) -> B,
    {
        self.storage
            .iter()
            .enumerate()
            .rev()
            .fold(basis, |accumulator, (index, value)| {
                function(accumulator, value, index)
            })
    }

    /// Compares the contents with `other` element by element.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let array = SortedArray::from_values([2, 1]);
    /// assert!(array.sequence_equals(&[1, 2], |left, right| left == right));
    /// assert!(!array.sequence_equals(&[1], |left, right| left == right));
    /// ```
    pub fn sequence_equals<F>(&self, other: &[T], equals: F) -> bool
    where
        F: Fn(&T, &T) -> bool,
    {
        self.storage.len() == other.len()
            && self
                .storage
                .iter()
                .zip(other)
                .all(|(left, right)| equals(left, right))
    }

    /// Compares the contents with `other` lexicographically. A proper prefix
    /// orders before the longer sequence.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    /// use std::cmp::Ordering;
    ///
    /// let array = SortedArray::from_values([1, 2, 3]);
    /// assert_eq!(array.sequence_compare(&[1, 2, 4], |l, r| l.cmp(r)), Ordering::Less);
    /// assert_eq!(array.sequence_compare(&[1, 2], |l, r| l.cmp(r)), Ordering::Greater);
    /// ```
    pub fn sequence_compare<F>(&self, other: &[T], compare: F) -> Ordering
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.storage
            .iter()
            .zip(other)
            .map(|(left, right)| compare(left, right))
            .find(|ordering| *ordering != Ordering::Equal)
            .unwrap_or_else(|| self.storage.len().cmp(&other.len()))
    }

    /// Returns a copy of the elements in sorted order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.storage.clone()
    }

    /// Consumes the container and returns its elements in sorted order.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        self.storage
    }
}

// =============================================================================
// Search and mutation
// =============================================================================

impl<T, C, E, D, N> SortedArray<T, C, E, D, N>
where
    C: Comparator<T>,
    E: Equivalence<T>,
    N: RangeChangeNotifier<T>,
{
    pub(super) fn from_parts<I>(
        values: I,
        comparator: C,
        equivalence: E,
        default_value: D,
        notifier: N,
    ) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let values = values.into_iter();
        let mut array = Self {
            storage: Vec::with_capacity(values.size_hint().0),
            comparator,
            equivalence,
            default_value,
            notifier,
        };
        array.add_each(values);
        array
    }

    /// Creates an empty container sharing this one's ordering, equality and
    /// fallback strategies, then fills it with `values`.
    ///
    /// Observers are not carried over.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let descending = SortedArray::builder()
    ///     .values([1, 2])
    ///     .compare_by(|left: &i32, right: &i32| right.cmp(left))
    ///     .build();
    /// let clone = descending.construct_clone([5, 9, 7]);
    /// assert_eq!(clone.as_slice(), &[9, 7, 5]);
    /// ```
    #[must_use]
    pub fn construct_clone<I>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        C: Clone,
        E: Clone,
        D: Clone,
        N: Default,
    {
        Self::from_parts(
            values,
            self.comparator.clone(),
            self.equivalence.clone(),
            self.default_value.clone(),
            N::default(),
        )
    }

    /// Returns `true` if an element equal to `value` is present.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let array = SortedArray::from_values([1, 3, 5]);
    /// assert!(array.has(&3));
    /// assert!(!array.has(&4));
    /// ```
    #[must_use]
    pub fn has(&self, value: &T) -> bool {
        search::locate(&self.storage, value, &self.comparator)
            .found()
            .is_some_and(|index| self.equivalence.equals(&self.storage[index], value))
    }

    /// Returns the first element equal to `value`, without falling back to a
    /// default.
    #[must_use]
    pub fn find(&self, value: &T) -> Option<&T> {
        self.index_of(value).map(|index| &self.storage[index])
    }

    /// Returns the index of the first element equal to `value`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let array = SortedArray::from_values([1, 3, 3, 3, 5]);
    /// assert_eq!(array.index_of(&3), Some(1));
    /// assert_eq!(array.last_index_of(&3), Some(3));
    /// assert_eq!(array.index_of(&4), None);
    /// ```
    #[must_use]
    pub fn index_of(&self, value: &T) -> Option<usize> {
        search::locate_first(&self.storage, value, &self.comparator, &self.equivalence)
    }

    /// Returns the index of the last element equal to `value`.
    #[must_use]
    pub fn last_index_of(&self, value: &T) -> Option<usize> {
        search::locate_last(&self.storage, value, &self.comparator, &self.equivalence)
    }

    /// Same as [`index_of`](Self::index_of).
    #[must_use]
    pub fn find_value(&self, value: &T) -> Option<usize> {
        self.index_of(value)
    }

    /// Same as [`last_index_of`](Self::last_index_of).
    #[must_use]
    pub fn find_last_value(&self, value: &T) -> Option<usize> {
        self.last_index_of(value)
    }

    /// Inserts `value` after every element it compares equal to.
    ///
    /// Always succeeds and returns `true`; duplicates are kept.
    pub fn add(&mut self, value: T) -> bool {
        let index = search::locate_insertion_index(&self.storage, &value, &self.comparator);
        let dispatches = self.notifier.dispatches_range_changes();
        if dispatches {
            self.notifier
                .dispatch_before_range_change(std::slice::from_ref(&value), &[], index);
        }
        self.storage.insert(index, value);
        if dispatches {
            self.notifier
                .dispatch_range_change(&self.storage[index..=index], &[], index);
        }
        true
    }

    /// Inserts every value, each at its own sorted position.
    pub fn add_each<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in values {
            self.add(value);
        }
    }

    /// Inserts every value at its sorted position. Equivalent to
    /// [`add_each`](Self::add_each); the name carries no positional meaning.
    pub fn push<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.add_each(values);
    }

    /// Inserts every value at its sorted position. Equivalent to
    /// [`add_each`](Self::add_each); the name carries no positional meaning.
    pub fn unshift<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.add_each(values);
    }

    /// Removes the first element equal to `value`.
    ///
    /// Returns `false`, without touching the container, if there is none.
    pub fn delete(&mut self, value: &T) -> bool {
        let Some(index) = self.index_of(value) else {
            return false;
        };
        let dispatches = self.notifier.dispatches_range_changes();
        if dispatches {
            self.notifier
                .dispatch_before_range_change(&[], std::slice::from_ref(value), index);
        }
        self.storage.remove(index);
        if dispatches {
            self.notifier
                .dispatch_range_change(&[], std::slice::from_ref(value), index);
        }
        true
    }

    /// Removes the whole run of elements equal to `value` and returns how
    /// many were removed.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let mut array = SortedArray::from_values([1, 3, 3, 3, 5]);
    /// assert_eq!(array.delete_all(&3), 3);
    /// assert_eq!(array.as_slice(), &[1, 5]);
    /// assert_eq!(array.delete_all(&3), 0);
    /// ```
    pub fn delete_all(&mut self, value: &T) -> usize {
        let Some(start) = self.index_of(value) else {
            return 0;
        };
        let end = self.run_end(start, |element| self.equivalence.equals(value, element));
        let removed = self.remove_range(start, end).len();
        tracing::trace!(index = start, removed, "sorted array delete_all");
        removed
    }

    /// Removes and returns the largest element.
    pub fn pop(&mut self) -> Option<T> {
        let index = self.storage.len().checked_sub(1)?;
        Some(self.remove_at(index))
    }

    /// Removes and returns the smallest element.
    pub fn shift(&mut self) -> Option<T> {
        if self.storage.is_empty() {
            None
        } else {
            Some(self.remove_at(0))
        }
    }

    /// Removes `length` elements starting at `index` and then adds `plus`,
    /// each value at its own sorted position. Returns the removed elements.
    ///
    /// A negative `index` counts from the end; out-of-range positions are
    /// clamped. A `length` of `None` removes everything from `index` on.
    ///
    /// When observed, the removal is reported as one change whose before
    /// event announces `plus` and whose after event carries no additions;
    /// every value of `plus` is then reported by its own insertion.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let mut array = SortedArray::from_values([10, 20, 30]);
    /// let removed = array.swap(1, Some(1), [15, 25]);
    /// assert_eq!(removed, vec![20]);
    /// assert_eq!(array.as_slice(), &[10, 15, 25, 30]);
    /// ```
    pub fn swap<I>(&mut self, index: isize, length: Option<usize>, plus: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        let plus: Vec<T> = plus.into_iter().collect();
        let (start, end) = normalize_range(self.storage.len(), index, length);
        let dispatches = self.notifier.dispatches_range_changes();
        if dispatches {
            self.notifier
                .dispatch_before_range_change(&plus, &self.storage[start..end], start);
        }
        let minus: Vec<T> = self.storage.drain(start..end).collect();
        if dispatches {
            self.notifier.dispatch_range_change(&[], &minus, start);
        }
        tracing::trace!(
            index = start,
            removed = minus.len(),
            added = plus.len(),
            "sorted array swap"
        );
        self.add_each(plus);
        minus
    }

    /// Removes `remove_count` elements starting at `index` and then adds
    /// `to_insert`. See [`swap`](Self::swap).
    pub fn splice<I>(&mut self, index: isize, remove_count: usize, to_insert: I) -> Vec<T>
    where
        I: IntoIterator<Item = T>,
    {
        self.swap(index, Some(remove_count), to_insert)
    }

    /// Removes every element.
    pub fn clear(&mut self) {
        let removed = self.storage.len();
        if self.notifier.dispatches_range_changes() {
            self.notifier
                .dispatch_before_range_change(&[], &self.storage, 0);
            let minus = std::mem::take(&mut self.storage);
            self.notifier.dispatch_range_change(&[], &minus, 0);
        } else {
            self.storage.clear();
        }
        tracing::trace!(removed, "sorted array clear");
    }

    fn run_end<P>(&self, start: usize, matches: P) -> usize
    where
        P: Fn(&T) -> bool,
    {
        start
            + self.storage[start..]
                .iter()
                .take_while(|element| matches(element))
                .count()
    }

    fn remove_at(&mut self, index: usize) -> T {
        let dispatches = self.notifier.dispatches_range_changes();
        if dispatches {
            self.notifier
                .dispatch_before_range_change(&[], &self.storage[index..=index], index);
        }
        let value = self.storage.remove(index);
        if dispatches {
            self.notifier
                .dispatch_range_change(&[], std::slice::from_ref(&value), index);
        }
        value
    }

    fn remove_range(&mut self, start: usize, end: usize) -> Vec<T> {
        let dispatches = self.notifier.dispatches_range_changes();
        if dispatches {
            self.notifier
                .dispatch_before_range_change(&[], &self.storage[start..end], start);
        }
        let minus: Vec<T> = self.storage.drain(start..end).collect();
        if dispatches {
            self.notifier.dispatch_range_change(&[], &minus, start);
        }
        minus
    }
}

impl<T, C, E, D, N> SortedArray<T, C, E, D, N>
where
    T: Clone,
    C: Comparator<T>,
    E: Equivalence<T>,
    D: DefaultValue<T>,
    N: RangeChangeNotifier<T>,
{
    /// Returns the first element equal to `value`, or the configured fallback
    /// for `value` if there is none.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sorted_array::SortedArray;
    ///
    /// let array = SortedArray::builder()
    ///     .values([1, 3, 3, 3, 5])
    ///     .default_by(|_: &i32| Some(-1))
    ///     .build();
    /// assert_eq!(array.get(&3).as_deref(), Some(&3));
    /// assert_eq!(array.get(&9).as_deref(), Some(&-1));
    /// ```
    #[must_use]
    pub fn get(&self, value: &T) -> Option<Cow<'_, T>> {
        self.find(value).map_or_else(
            || self.default_value.default_for(value).map(Cow::Owned),
            |found| Some(Cow::Borrowed(found)),
        )
    }
}

// =============================================================================
// Capability traits
// =============================================================================

impl<T, C, E, D, N> Searchable<T> for SortedArray<T, C, E, D, N>
where
    C: Comparator<T>,
    E: Equivalence<T>,
    N: RangeChangeNotifier<T>,
{
    fn has(&self, value: &T) -> bool {
        Self::has(self, value)
    }

    fn has_with<F>(&self, _value: &T, _equals: F) -> Result<bool, SortedArrayError>
    where
        F: Fn(&T, &T) -> bool,
    {
        Err(SortedArrayError::UnsupportedEquality { method: "has" })
    }

    fn get_with<F>(&self, _value: &T, _equals: F) -> Result<Option<&T>, SortedArrayError>
    where
        F: Fn(&T, &T) -> bool,
    {
        Err(SortedArrayError::UnsupportedEquality { method: "get" })
    }

    fn index_of(&self, value: &T) -> Option<usize> {
        Self::index_of(self, value)
    }

    fn index_of_from(&self, _value: &T, _start: usize) -> Result<Option<usize>, SortedArrayError> {
        Err(SortedArrayError::UnsupportedStartIndex { method: "index_of" })
    }

    fn last_index_of(&self, value: &T) -> Option<usize> {
        Self::last_index_of(self, value)
    }

    fn last_index_of_from(
        &self,
        _value: &T,
        _start: usize,
    ) -> Result<Option<usize>, SortedArrayError> {
        Err(SortedArrayError::UnsupportedStartIndex {
            method: "last_index_of",
        })
    }
}

impl<T, C, E, D, N> RangeMutable<T> for SortedArray<T, C, E, D, N>
where
    C: Comparator<T>,
    E: Equivalence<T>,
    N: RangeChangeNotifier<T>,
{
    fn swap(&mut self, index: isize, length: Option<usize>, plus: Vec<T>) -> Vec<T> {
        Self::swap(self, index, length, plus)
    }

    fn clear(&mut self) {
        Self::clear(self);
    }

    fn delete_with<F>(&mut self, _value: &T, _equals: F) -> Result<bool, SortedArrayError>
    where
        F: Fn(&T, &T) -> bool,
    {
        Err(SortedArrayError::UnsupportedEquality { method: "delete" })
    }

    /// Removes every element that `equals` matches, scanning the whole
    /// storage without assuming the matches are contiguous.
    ///
    /// When observed, each contiguous run of matches is reported as one
    /// change.
    fn delete_all_with<F>(&mut self, value: &T, equals: F) -> usize
    where
        F: Fn(&T, &T) -> bool,
    {
        let before = self.storage.len();
        if self.notifier.dispatches_range_changes() {
            let mut index = 0;
            while index < self.storage.len() {
                if equals(value, &self.storage[index]) {
                    let end = self.run_end(index, |element| equals(value, element));
                    self.remove_range(index, end);
                } else {
                    index += 1;
                }
            }
        } else {
            self.storage.retain(|element| !equals(value, element));
        }
        let removed = before - self.storage.len();
        tracing::trace!(removed, "sorted array delete_all_with");
        removed
    }
}

impl<T, C, E, D> Observable<T> for SortedArray<T, C, E, D, RangeChangeDispatcher<T>> {
    fn add_range_change_observer<O>(&mut self, observer: O) -> ObserverHandle
    where
        O: RangeChangeObserver<T> + 'static,
    {
        self.notifier.add_observer(observer)
    }

    fn remove_range_change_observer(&mut self, handle: ObserverHandle) -> bool {
        self.notifier.remove_observer(handle)
    }

    fn dispatches_range_changes(&self) -> bool {
        !self.notifier.is_empty()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<T, C, E, D, N> Default for SortedArray<T, C, E, D, N>
where
    C: Default,
    E: Default,
    D: Default,
    N: Default,
{
    fn default() -> Self {
        Self {
            storage: Vec::new(),
            comparator: C::default(),
            equivalence: E::default(),
            default_value: D::default(),
            notifier: N::default(),
        }
    }
}

impl<T: Ord> FromIterator<T> for SortedArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_values(iter)
    }
}

impl<T, C, E, D, N> Extend<T> for SortedArray<T, C, E, D, N>
where
    C: Comparator<T>,
    E: Equivalence<T>,
    N: RangeChangeNotifier<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.add_each(iter);
    }
}

impl<T, C, E, D, N> IntoIterator for SortedArray<T, C, E, D, N> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.into_iter()
    }
}

impl<'a, T, C, E, D, N> IntoIterator for &'a SortedArray<T, C, E, D, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.storage.iter()
    }
}

impl<T, C, E, D, N> Index<usize> for SortedArray<T, C, E, D, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.storage[index]
    }
}

impl<T: PartialEq, C, E, D, N> PartialEq for SortedArray<T, C, E, D, N> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<T: Eq, C, E, D, N> Eq for SortedArray<T, C, E, D, N> {}

impl<T: Hash, C, E, D, N> Hash for SortedArray<T, C, E, D, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.storage.hash(state);
    }
}

impl<T: fmt::Debug, C, E, D, N> fmt::Debug for SortedArray<T, C, E, D, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_list().entries(self.storage.iter()).finish()
    }
}

impl<T: fmt::Display, C, E, D, N> fmt::Display for SortedArray<T, C, E, D, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "[")?;
        let mut first = true;
        for element in &self.storage {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{element}")?;
        }
        write!(formatter, "]")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<T: serde::Serialize, C, E, D, N> serde::Serialize for SortedArray<T, C, E, D, N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for element in &self.storage {
            seq.serialize_element(element)?;
        }
        seq.end()
    }
}

#[cfg(feature = "serde")]
struct SortedArrayVisitor<T> {
    marker: std::marker::PhantomData<T>,
}

#[cfg(feature = "serde")]
impl<T> SortedArrayVisitor<T> {
    const fn new() -> Self {
        Self {
            marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::de::Visitor<'de> for SortedArrayVisitor<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    type Value = SortedArray<T>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a sequence")
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut array = SortedArray::new();
        while let Some(element) = seq.next_element()? {
            array.add(element);
        }
        Ok(array)
    }
}

#[cfg(feature = "serde")]
impl<'de, T> serde::Deserialize<'de> for SortedArray<T>
where
    T: serde::Deserialize<'de> + Ord,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_seq(SortedArrayVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
