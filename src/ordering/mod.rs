//! Ordering and equality contracts for sorted containers.
//!
//! A sorted container is parameterised by three strategies:
//!
//! - [`Comparator`]: a three-way comparison that positions elements.
//! - [`Equivalence`]: an equality that discriminates elements inside a run of
//!   compare-equal elements.
//! - [`DefaultValue`]: a fallback producer used by lookups that find nothing.
//!
//! Each strategy has a default ([`NaturalOrder`], [`NaturalEquality`],
//! [`NoDefault`]) and a blanket implementation for closures, so any
//! `Fn(&T, &T) -> Ordering`, `Fn(&T, &T) -> bool` or `Fn(&T) -> Option<T>`
//! can be plugged in directly.
//!
//! # Consistency
//!
//! The equivalence does not have to be the inverse of `compare == Equal`.
//! Searches only ever apply it to elements that already compare equal to the
//! searched value, so it only needs to be meaningful within a compare-equal run.
//!
//! # Examples
//!
//! ```rust
//! use sorted_array::ordering::{Comparator, Equivalence, NaturalEquality, NaturalOrder};
//! use std::cmp::Ordering;
//!
//! assert_eq!(NaturalOrder.compare(&1, &2), Ordering::Less);
//! assert!(NaturalEquality.equals(&"a", &"a"));
//!
//! let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
//! assert_eq!(by_length.compare(&"abc", &"de"), Ordering::Greater);
//! ```

use std::cmp::Ordering;

/// A three-way comparison used to keep a sequence sorted.
///
/// Implementations must describe a total preorder: the relation has to be
/// transitive and every pair of elements has to be comparable.
pub trait Comparator<T: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &T, right: &T) -> Ordering;
}

impl<T: ?Sized, F> Comparator<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        self(left, right)
    }
}

/// The natural ordering given by [`Ord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> Comparator<T> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &T, right: &T) -> Ordering {
        left.cmp(right)
    }
}

/// An equality predicate used to tell duplicates apart.
pub trait Equivalence<T: ?Sized> {
    /// Returns `true` if `left` and `right` are the same element.
    fn equals(&self, left: &T, right: &T) -> bool;
}

impl<T: ?Sized, F> Equivalence<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        self(left, right)
    }
}

/// Structural equality given by [`PartialEq`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NaturalEquality;

impl<T: PartialEq + ?Sized> Equivalence<T> for NaturalEquality {
    #[inline]
    fn equals(&self, left: &T, right: &T) -> bool {
        left == right
    }
}

/// Produces a fallback value for a lookup that found no element.
pub trait DefaultValue<T> {
    /// Returns the fallback for `key`, or `None` if there is none.
    fn default_for(&self, key: &T) -> Option<T>;
}

impl<T, F> DefaultValue<T> for F
where
    F: Fn(&T) -> Option<T>,
{
    #[inline]
    fn default_for(&self, key: &T) -> Option<T> {
        self(key)
    }
}

/// Never produces a fallback value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NoDefault;

impl<T> DefaultValue<T> for NoDefault {
    #[inline]
    fn default_for(&self, _key: &T) -> Option<T> {
        None
    }
}
