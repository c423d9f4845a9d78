//! Construction-time configuration for [`SortedArray`].

use std::cmp::Ordering;
use std::fmt;

use super::array::SortedArray;
use crate::observe::{RangeChangeDispatcher, RangeChangeNotifier, Silent};
use crate::ordering::{
    Comparator, DefaultValue, Equivalence, NaturalEquality, NaturalOrder, NoDefault,
};

/// A builder for [`SortedArray`].
///
/// Every strategy starts at its default ([`NaturalOrder`],
/// [`NaturalEquality`], [`NoDefault`], [`Silent`]) and can be replaced
/// independently. Replacing a strategy changes the builder's type, so the
/// resulting container carries its configuration in its type and pays nothing
/// for the strategies it does not use.
///
/// Initial values are buffered and inserted one at a time by
/// [`build`](Self::build), after the ordering is known.
///
/// # Examples
///
/// ```rust
/// use sorted_array::observe::Observable;
/// use sorted_array::SortedArray;
///
/// let array = SortedArray::builder()
///     .values([(2, "b"), (1, "a"), (2, "c")])
///     .compare_by(|left, right| left.0.cmp(&right.0))
///     .default_by(|key| Some((key.0, "missing")))
///     .observable()
///     .build();
///
/// assert_eq!(array.as_slice(), &[(1, "a"), (2, "b"), (2, "c")]);
/// assert_eq!(array.get(&(7, "?")).as_deref(), Some(&(7, "missing")));
/// assert!(!array.dispatches_range_changes());
/// ```
pub struct SortedArrayBuilder<T, C = NaturalOrder, E = NaturalEquality, D = NoDefault, N = Silent>
{
    values: Vec<T>,
    comparator: C,
    equivalence: E,
    default_value: D,
    notifier: N,
}

impl<T> SortedArrayBuilder<T> {
    /// Creates a builder with every strategy at its default.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            values: Vec::new(),
            comparator: NaturalOrder,
            equivalence: NaturalEquality,
            default_value: NoDefault,
            notifier: Silent,
        }
    }
}

impl<T> Default for SortedArrayBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, C, E, D, N> SortedArrayBuilder<T, C, E, D, N> {
    /// Adds initial values. May be called more than once.
    #[must_use]
    pub fn values<I>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        self.values.extend(values);
        self
    }

    /// Replaces the ordering strategy.
    #[must_use]
    pub fn comparator<C2>(self, comparator: C2) -> SortedArrayBuilder<T, C2, E, D, N>
    where
        C2: Comparator<T>,
    {
        SortedArrayBuilder {
            values: self.values,
            comparator,
            equivalence: self.equivalence,
            default_value: self.default_value,
            notifier: self.notifier,
        }
    }

    /// Orders elements with a comparison closure.
    #[must_use]
    pub fn compare_by<F>(self, compare: F) -> SortedArrayBuilder<T, F, E, D, N>
    where
        F: Fn(&T, &T) -> Ordering,
    {
        self.comparator(compare)
    }

    /// Replaces the equality strategy.
    #[must_use]
    pub fn equivalence<E2>(self, equivalence: E2) -> SortedArrayBuilder<T, C, E2, D, N>
    where
        E2: Equivalence<T>,
    {
        SortedArrayBuilder {
            values: self.values,
            comparator: self.comparator,
            equivalence,
            default_value: self.default_value,
            notifier: self.notifier,
        }
    }

    /// Tells duplicates apart with an equality closure.
    #[must_use]
    pub fn equals_by<F>(self, equals: F) -> SortedArrayBuilder<T, C, F, D, N>
    where
        F: Fn(&T, &T) -> bool,
    {
        self.equivalence(equals)
    }

    /// Replaces the fallback strategy used by [`SortedArray::get`].
    #[must_use]
    pub fn default_value<D2>(self, default_value: D2) -> SortedArrayBuilder<T, C, E, D2, N>
    where
        D2: DefaultValue<T>,
    {
        SortedArrayBuilder {
            values: self.values,
            comparator: self.comparator,
            equivalence: self.equivalence,
            default_value,
            notifier: self.notifier,
        }
    }

    /// Produces fallback values with a closure.
    #[must_use]
    pub fn default_by<F>(self, default_for: F) -> SortedArrayBuilder<T, C, E, F, N>
    where
        F: Fn(&T) -> Option<T>,
    {
        self.default_value(default_for)
    }

    /// Replaces the change notifier.
    #[must_use]
    pub fn notifier<N2>(self, notifier: N2) -> SortedArrayBuilder<T, C, E, D, N2>
    where
        N2: RangeChangeNotifier<T>,
    {
        SortedArrayBuilder {
            values: self.values,
            comparator: self.comparator,
            equivalence: self.equivalence,
            default_value: self.default_value,
            notifier,
        }
    }

    /// Makes the container observable through
    /// [`Observable`](crate::observe::Observable).
    #[must_use]
    pub fn observable(self) -> SortedArrayBuilder<T, C, E, D, RangeChangeDispatcher<T>> {
        self.notifier(RangeChangeDispatcher::new())
    }

    /// Builds the container, inserting the buffered values one at a time.
    ///
    /// Observers can only be registered on the finished container, so the
    /// initial insertions are never reported.
    #[must_use]
    pub fn build(self) -> SortedArray<T, C, E, D, N>
    where
        C: Comparator<T>,
        E: Equivalence<T>,
        N: RangeChangeNotifier<T>,
    {
        SortedArray::from_parts(
            self.values,
            self.comparator,
            self.equivalence,
            self.default_value,
            self.notifier,
        )
    }
}

impl<T: fmt::Debug, C, E, D, N> fmt::Debug for SortedArrayBuilder<T, C, E, D, N> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SortedArrayBuilder")
            .field("values", &self.values)
            .finish_non_exhaustive()
    }
}
