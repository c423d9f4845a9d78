//! Range change notification.
//!
//! Every structural mutation of a sorted container is described by a
//! [`RangeChange`]: the elements added, the elements removed, and the index at
//! which the change happens. When notification is enabled the container
//! reports each change twice, once before the storage is touched and once
//! after.
//!
//! Notification is a construction-time choice expressed by the container's
//! [`RangeChangeNotifier`] type parameter:
//!
//! - [`Silent`] reports nothing. Its `dispatches_range_changes` is a constant
//!   `false`, so no event is ever assembled.
//! - [`RangeChangeDispatcher`] forwards events to the registered
//!   [`RangeChangeObserver`]s, in registration order.
//!
//! # Reentrancy
//!
//! Events are delivered synchronously while the container is mutably
//! borrowed. Observers therefore cannot reach back into the container they
//! observe; the slices they receive are read-only and do not outlive the
//! callback. Clone what needs to be kept.
//!
//! # Examples
//!
//! ```rust
//! use sorted_array::observe::{Observable, RangeChange, RangeChangeObserver};
//! use sorted_array::SortedArray;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! struct Log(Rc<RefCell<Vec<(Vec<i32>, usize)>>>);
//!
//! impl RangeChangeObserver<i32> for Log {
//!     fn range_change(&mut self, change: &RangeChange<'_, i32>) {
//!         self.0.borrow_mut().push((change.added.to_vec(), change.index));
//!     }
//! }
//!
//! let log = Rc::new(RefCell::new(Vec::new()));
//! let mut array = SortedArray::builder().observable().values([1, 2, 3, 5]).build();
//! array.add_range_change_observer(Log(Rc::clone(&log)));
//!
//! array.add(4);
//! assert_eq!(*log.borrow(), vec![(vec![4], 3)]);
//! ```

use std::fmt;

/// A single structural change to a sequence.
#[derive(Debug, PartialEq, Eq)]
pub struct RangeChange<'a, T> {
    /// Elements inserted at `index`.
    pub added: &'a [T],
    /// Elements removed from `index`.
    pub removed: &'a [T],
    /// Position of the change.
    pub index: usize,
}

impl<T> Clone for RangeChange<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RangeChange<'_, T> {}

impl<'a, T> RangeChange<'a, T> {
    /// Creates a change description.
    #[inline]
    #[must_use]
    pub const fn new(added: &'a [T], removed: &'a [T], index: usize) -> Self {
        Self {
            added,
            removed,
            index,
        }
    }
}

/// Receives range changes from an observed container.
///
/// Only [`range_change`](Self::range_change) is required; observers that care
/// about the pre-mutation state also override
/// [`before_range_change`](Self::before_range_change).
pub trait RangeChangeObserver<T> {
    /// Called before the container's storage is modified.
    fn before_range_change(&mut self, change: &RangeChange<'_, T>) {
        let _ = change;
    }

    /// Called after the container's storage has been modified.
    fn range_change(&mut self, change: &RangeChange<'_, T>);
}

impl<T, F> RangeChangeObserver<T> for F
where
    F: FnMut(&RangeChange<'_, T>),
{
    fn range_change(&mut self, change: &RangeChange<'_, T>) {
        self(change);
    }
}

/// The dispatch strategy a container uses to report its changes.
pub trait RangeChangeNotifier<T> {
    /// Returns `true` if events should be assembled and dispatched.
    fn dispatches_range_changes(&self) -> bool;

    /// Reports a change that is about to happen.
    fn dispatch_before_range_change(&mut self, added: &[T], removed: &[T], index: usize);

    /// Reports a change that has just happened.
    fn dispatch_range_change(&mut self, added: &[T], removed: &[T], index: usize);
}

/// A notifier that never reports anything.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Silent;

impl<T> RangeChangeNotifier<T> for Silent {
    #[inline]
    fn dispatches_range_changes(&self) -> bool {
        false
    }

    #[inline]
    fn dispatch_before_range_change(&mut self, _added: &[T], _removed: &[T], _index: usize) {}

    #[inline]
    fn dispatch_range_change(&mut self, _added: &[T], _removed: &[T], _index: usize) {}
}

/// Identifies a registered observer so it can be removed later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObserverHandle(u64);

/// A notifier that forwards every change to its registered observers.
///
/// With no observers registered it reports `dispatches_range_changes() ==
/// false`, and containers skip event assembly entirely.
pub struct RangeChangeDispatcher<T> {
    observers: Vec<(ObserverHandle, Box<dyn RangeChangeObserver<T>>)>,
    next_handle: u64,
}

impl<T> RangeChangeDispatcher<T> {
    /// Creates a dispatcher with no observers.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            observers: Vec::new(),
            next_handle: 0,
        }
    }

    /// Registers an observer and returns its handle.
    pub fn add_observer<O>(&mut self, observer: O) -> ObserverHandle
    where
        O: RangeChangeObserver<T> + 'static,
    {
        let handle = ObserverHandle(self.next_handle);
        self.next_handle += 1;
        self.observers.push((handle, Box::new(observer)));
        tracing::debug!(
            handle = handle.0,
            observers = self.observers.len(),
            "range change observer added"
        );
        handle
    }

    /// Unregisters an observer. Returns `false` if the handle is unknown.
    pub fn remove_observer(&mut self, handle: ObserverHandle) -> bool {
        let Some(position) = self
            .observers
            .iter()
            .position(|(registered, _)| *registered == handle)
        else {
            return false;
        };
        self.observers.remove(position);
        tracing::debug!(
            handle = handle.0,
            observers = self.observers.len(),
            "range change observer removed"
        );
        true
    }

    /// Returns the number of registered observers.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns `true` if no observer is registered.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }
}

impl<T> Default for RangeChangeDispatcher<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for RangeChangeDispatcher<T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RangeChangeDispatcher")
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl<T> RangeChangeNotifier<T> for RangeChangeDispatcher<T> {
    #[inline]
    fn dispatches_range_changes(&self) -> bool {
        !self.observers.is_empty()
    }

    fn dispatch_before_range_change(&mut self, added: &[T], removed: &[T], index: usize) {
        let change = RangeChange::new(added, removed, index);
        for (_, observer) in &mut self.observers {
            observer.before_range_change(&change);
        }
    }

    fn dispatch_range_change(&mut self, added: &[T], removed: &[T], index: usize) {
        let change = RangeChange::new(added, removed, index);
        for (_, observer) in &mut self.observers {
            observer.range_change(&change);
        }
    }
}

/// A container whose structural changes can be observed.
pub trait Observable<T> {
    /// Registers an observer and returns its handle.
    fn add_range_change_observer<O>(&mut self, observer: O) -> ObserverHandle
    where
        O: RangeChangeObserver<T> + 'static;

    /// Unregisters an observer. Returns `false` if the handle is unknown.
    fn remove_range_change_observer(&mut self, handle: ObserverHandle) -> bool;

    /// Returns `true` if at least one observer is registered.
    fn dispatches_range_changes(&self) -> bool;
}
