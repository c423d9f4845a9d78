//! Scenario tests for `SortedArray`.

use std::borrow::Cow;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::rc::Rc;

use rstest::{fixture, rstest};
use sorted_array::prelude::*;

// =============================================================================
// Helpers
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Before,
    After,
}

/// An owned copy of a delivered range change.
///
/// Fields are only compared as a whole.
#[allow(dead_code)]
#[derive(Debug, Clone, PartialEq, Eq)]
struct RecordedChange<T> {
    phase: Phase,
    added: Vec<T>,
    removed: Vec<T>,
    index: usize,
}

impl<T> RecordedChange<T> {
    const fn before(added: Vec<T>, removed: Vec<T>, index: usize) -> Self {
        Self {
            phase: Phase::Before,
            added,
            removed,
            index,
        }
    }

    const fn after(added: Vec<T>, removed: Vec<T>, index: usize) -> Self {
        Self {
            phase: Phase::After,
            added,
            removed,
            index,
        }
    }
}

type ChangeLog<T> = Rc<RefCell<Vec<RecordedChange<T>>>>;

/// Observer that copies every event it receives into a shared log.
struct Recorder<T> {
    log: ChangeLog<T>,
}

impl<T> Recorder<T> {
    fn new() -> (Self, ChangeLog<T>) {
        let log: ChangeLog<T> = Rc::new(RefCell::new(Vec::new()));
        (
            Self {
                log: Rc::clone(&log),
            },
            log,
        )
    }
}

impl<T: Clone> RangeChangeObserver<T> for Recorder<T> {
    fn before_range_change(&mut self, change: &RangeChange<'_, T>) {
        self.log.borrow_mut().push(RecordedChange::before(
            change.added.to_vec(),
            change.removed.to_vec(),
            change.index,
        ));
    }

    fn range_change(&mut self, change: &RangeChange<'_, T>) {
        self.log.borrow_mut().push(RecordedChange::after(
            change.added.to_vec(),
            change.removed.to_vec(),
            change.index,
        ));
    }
}

/// Routes `tracing` output through the test harness, filtered by `RUST_LOG`.
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

#[fixture]
fn one_three_five() -> SortedArray<i32> {
    SortedArray::from_values([1, 3, 3, 3, 5])
}

// =============================================================================
// Basic scenarios
// =============================================================================

#[rstest]
fn test_add_into_empty_keeps_duplicates() {
    let mut array = SortedArray::new();
    array.add(5);
    array.add(3);
    array.add(5);

    assert_eq!(array.as_slice(), &[3, 5, 5]);
    assert_eq!(array.len(), 3);
}

#[rstest]
fn test_index_of_and_last_index_of(one_three_five: SortedArray<i32>) {
    assert_eq!(one_three_five.index_of(&3), Some(1));
    assert_eq!(one_three_five.last_index_of(&3), Some(3));
    assert_eq!(one_three_five.index_of(&2), None);
    assert_eq!(one_three_five.last_index_of(&6), None);
}

#[rstest]
fn test_delete_all_removes_whole_run(mut one_three_five: SortedArray<i32>) {
    assert_eq!(one_three_five.delete_all(&3), 3);
    assert_eq!(one_three_five.as_slice(), &[1, 5]);
    assert_eq!(one_three_five.len(), 2);
}

#[rstest]
fn test_get_uses_default_provider() {
    let array = SortedArray::builder()
        .values([1, 3, 3, 3, 5])
        .default_by(|_: &i32| Some(-1))
        .build();

    assert_eq!(array.get(&9), Some(Cow::Owned(-1)));
    assert_eq!(array.get(&5).as_deref(), Some(&5));
}

#[rstest]
fn test_swap_replaces_range() {
    let mut array = SortedArray::from_values([10, 20, 30]);

    let removed = array.swap(1, Some(1), vec![15, 25]);

    assert_eq!(removed, vec![20]);
    assert_eq!(array.as_slice(), &[10, 15, 25, 30]);
}

#[rstest]
fn test_add_then_delete_restores_contents(one_three_five: SortedArray<i32>) {
    let mut array = one_three_five.clone();
    array.add(4);
    assert_eq!(array.as_slice(), &[1, 3, 3, 3, 4, 5]);
    assert!(array.delete(&4));
    assert_eq!(array, one_three_five);
}

#[rstest]
fn test_reverse_order_pop_and_shift() {
    let mut array = SortedArray::builder()
        .values([2, 9, 4])
        .compare_by(|left, right| right.cmp(left))
        .build();

    assert_eq!(array.as_slice(), &[9, 4, 2]);
    assert_eq!(array.shift(), Some(9));
    assert_eq!(array.pop(), Some(2));
    assert_eq!(array.as_slice(), &[4]);
}

#[rstest]
fn test_string_elements() {
    let mut array = SortedArray::from_values(["pear".to_string(), "apple".to_string()]);
    array.add("fig".to_string());

    assert_eq!(array.as_slice(), &["apple", "fig", "pear"]);
    assert!(array.has(&"fig".to_string()));
    assert_eq!(array.to_string(), "[apple, fig, pear]");
}

// =============================================================================
// Custom equality inside compare-equal runs
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct Task {
    priority: u8,
    name: &'static str,
}

const fn task(priority: u8, name: &'static str) -> Task {
    Task { priority, name }
}

fn by_priority(left: &Task, right: &Task) -> Ordering {
    left.priority.cmp(&right.priority)
}

#[rstest]
fn test_equal_priorities_keep_insertion_order() {
    let array = SortedArray::builder()
        .values([
            task(2, "write"),
            task(1, "plan"),
            task(2, "review"),
            task(3, "ship"),
            task(2, "test"),
        ])
        .comparator(by_priority)
        .build();

    let names: Vec<&str> = array.iter().map(|task| task.name).collect();
    assert_eq!(names, vec!["plan", "write", "review", "test", "ship"]);
}

#[rstest]
fn test_lookups_discriminate_within_run() {
    let array = SortedArray::builder()
        .values([task(2, "write"), task(2, "review"), task(2, "review")])
        .comparator(by_priority)
        .build();

    assert_eq!(array.index_of(&task(2, "review")), Some(1));
    assert_eq!(array.last_index_of(&task(2, "review")), Some(2));
    assert_eq!(array.find(&task(2, "write")), Some(&task(2, "write")));
}

#[rstest]
fn test_delete_all_only_removes_equal_elements() {
    let mut array = SortedArray::builder()
        .values([task(1, "plan"), task(2, "review"), task(2, "review"), task(2, "write")])
        .comparator(by_priority)
        .build();

    assert_eq!(array.delete_all(&task(2, "review")), 2);
    assert_eq!(array.as_slice(), &[task(1, "plan"), task(2, "write")]);
}

// =============================================================================
// Usage errors
// =============================================================================

#[rstest]
fn test_equality_overrides_are_rejected(mut one_three_five: SortedArray<i32>) {
    let equals = |left: &i32, right: &i32| left == right;

    assert_eq!(
        one_three_five.has_with(&3, equals),
        Err(SortedArrayError::UnsupportedEquality { method: "has" })
    );
    assert_eq!(
        one_three_five.get_with(&3, equals),
        Err(SortedArrayError::UnsupportedEquality { method: "get" })
    );
    assert_eq!(
        one_three_five.delete_with(&3, equals),
        Err(SortedArrayError::UnsupportedEquality { method: "delete" })
    );
    assert_eq!(one_three_five.len(), 5);
}

#[rstest]
fn test_start_indices_are_rejected(one_three_five: SortedArray<i32>) {
    assert_eq!(
        one_three_five.index_of_from(&3, 2),
        Err(SortedArrayError::UnsupportedStartIndex { method: "index_of" })
    );
    assert_eq!(
        one_three_five.last_index_of_from(&3, 2),
        Err(SortedArrayError::UnsupportedStartIndex {
            method: "last_index_of"
        })
    );
}

#[rstest]
fn test_delete_all_with_override_scans_linearly(mut one_three_five: SortedArray<i32>) {
    let odd = |_: &i32, element: &i32| element % 2 != 0;
    assert_eq!(one_three_five.delete_all_with(&0, odd), 5);
    assert!(one_three_five.is_empty());
}

// =============================================================================
// Change notification
// =============================================================================

fn observed(values: &[i32]) -> (
    SortedArray<i32, NaturalOrder, NaturalEquality, NoDefault, RangeChangeDispatcher<i32>>,
    ChangeLog<i32>,
) {
    init_tracing();
    let mut array = SortedArray::builder()
        .values(values.iter().copied())
        .observable()
        .build();
    let (recorder, log) = Recorder::new();
    array.add_range_change_observer(recorder);
    (array, log)
}

#[rstest]
fn test_add_reports_before_and_after() {
    let (mut array, log) = observed(&[1, 2, 3, 5]);

    array.add(4);

    assert_eq!(
        *log.borrow(),
        vec![
            RecordedChange::before(vec![4], vec![], 3),
            RecordedChange::after(vec![4], vec![], 3),
        ]
    );
}

#[rstest]
fn test_initial_values_are_not_reported() {
    let (array, log) = observed(&[3, 1, 2]);
    assert_eq!(array.as_slice(), &[1, 2, 3]);
    assert!(log.borrow().is_empty());
}

#[rstest]
fn test_delete_reports_removed_value() {
    let (mut array, log) = observed(&[1, 3, 5]);

    assert!(array.delete(&3));
    assert!(!array.delete(&4));

    assert_eq!(
        *log.borrow(),
        vec![
            RecordedChange::before(vec![], vec![3], 1),
            RecordedChange::after(vec![], vec![3], 1),
        ]
    );
}

#[rstest]
fn test_delete_all_reports_one_change_for_run() {
    let (mut array, log) = observed(&[1, 3, 3, 5]);

    assert_eq!(array.delete_all(&3), 2);

    assert_eq!(
        *log.borrow(),
        vec![
            RecordedChange::before(vec![], vec![3, 3], 1),
            RecordedChange::after(vec![], vec![3, 3], 1),
        ]
    );
}

#[rstest]
fn test_swap_reports_removal_then_each_insertion() {
    let (mut array, log) = observed(&[10, 20, 30]);

    assert_eq!(array.swap(1, Some(1), vec![15, 25]), vec![20]);

    assert_eq!(
        *log.borrow(),
        vec![
            RecordedChange::before(vec![15, 25], vec![20], 1),
            RecordedChange::after(vec![], vec![20], 1),
            RecordedChange::before(vec![15], vec![], 1),
            RecordedChange::after(vec![15], vec![], 1),
            RecordedChange::before(vec![25], vec![], 2),
            RecordedChange::after(vec![25], vec![], 2),
        ]
    );
}

#[rstest]
fn test_clear_reports_previous_contents() {
    let (mut array, log) = observed(&[1, 2]);

    array.clear();

    assert!(array.is_empty());
    assert_eq!(
        *log.borrow(),
        vec![
            RecordedChange::before(vec![], vec![1, 2], 0),
            RecordedChange::after(vec![], vec![1, 2], 0),
        ]
    );
}

#[rstest]
fn test_pop_and_shift_report_removals() {
    let (mut array, log) = observed(&[1, 2, 3]);

    assert_eq!(array.pop(), Some(3));
    assert_eq!(array.shift(), Some(1));

    assert_eq!(
        *log.borrow(),
        vec![
            RecordedChange::before(vec![], vec![3], 2),
            RecordedChange::after(vec![], vec![3], 2),
            RecordedChange::before(vec![], vec![1], 0),
            RecordedChange::after(vec![], vec![1], 0),
        ]
    );
}

#[rstest]
fn test_delete_all_with_reports_each_contiguous_run() {
    let (mut array, log) = observed(&[1, 2, 3, 5, 6]);
    let odd = |_: &i32, element: &i32| element % 2 != 0;

    assert_eq!(array.delete_all_with(&0, odd), 3);

    assert_eq!(array.as_slice(), &[2, 6]);
    assert_eq!(
        *log.borrow(),
        vec![
            RecordedChange::before(vec![], vec![1], 0),
            RecordedChange::after(vec![], vec![1], 0),
            RecordedChange::before(vec![], vec![3, 5], 1),
            RecordedChange::after(vec![], vec![3, 5], 1),
        ]
    );
}

#[rstest]
fn test_removed_observer_stops_receiving() {
    let mut array = SortedArray::builder().values([1]).observable().build();
    let (recorder, log) = Recorder::new();
    let handle = array.add_range_change_observer(recorder);
    assert!(array.dispatches_range_changes());

    array.add(2);
    assert!(array.remove_range_change_observer(handle));
    assert!(!array.dispatches_range_changes());
    array.add(3);

    assert_eq!(log.borrow().len(), 2);
    assert_eq!(array.as_slice(), &[1, 2, 3]);
}

#[rstest]
fn test_multiple_observers_see_same_events() {
    let (mut array, first) = observed(&[]);
    let (recorder, second) = Recorder::new();
    array.add_range_change_observer(recorder);

    array.add(7);

    assert_eq!(*first.borrow(), *second.borrow());
    assert_eq!(second.borrow().len(), 2);
}

#[rstest]
fn test_construct_clone_does_not_copy_observers() {
    let (array, log) = observed(&[2, 1]);

    let mut clone = array.construct_clone([5, 4]);
    clone.add(3);

    assert_eq!(clone.as_slice(), &[3, 4, 5]);
    assert!(!clone.dispatches_range_changes());
    assert!(log.borrow().is_empty());
}

// =============================================================================
// Iteration and folds
// =============================================================================

#[rstest]
fn test_iterate_is_restartable(one_three_five: SortedArray<i32>) {
    let iterator = one_three_five.iterate(1, 4, 1);
    assert_eq!(iterator.clone().count(), 3);
    assert_eq!(iterator.copied().collect::<Vec<_>>(), vec![3, 3, 3]);
}

#[rstest]
fn test_iteration_is_front_to_back(one_three_five: SortedArray<i32>) {
    let collected: Vec<i32> = one_three_five.iter().copied().collect();
    assert_eq!(collected, vec![1, 3, 3, 3, 5]);
    let borrowed: Vec<&i32> = (&one_three_five).into_iter().collect();
    assert_eq!(borrowed.len(), 5);
    let owned: Vec<i32> = one_three_five.into_iter().filter(|value| *value > 1).collect();
    assert_eq!(owned, vec![3, 3, 3, 5]);
}

#[rstest]
fn test_reduce(one_three_five: SortedArray<i32>) {
    assert_eq!(one_three_five.reduce(0, |sum, value, _| sum + value), 15);
    assert_eq!(
        one_three_five.reduce_right(String::new(), |mut text, value, _| {
            text.push_str(&value.to_string());
            text
        }),
        "53331"
    );
}

#[rstest]
fn test_sequence_equals_and_compare(one_three_five: SortedArray<i32>) {
    assert!(one_three_five.sequence_equals(&[1, 3, 3, 3, 5], |left, right| left == right));
    assert!(!one_three_five.sequence_equals(&[1, 3, 3, 5], |left, right| left == right));
    assert_eq!(
        one_three_five.sequence_compare(&[1, 3, 4], |left, right| left.cmp(right)),
        Ordering::Less
    );
    assert_eq!(
        one_three_five.sequence_compare(&[1, 3, 3, 3, 5], |left, right| left.cmp(right)),
        Ordering::Equal
    );
}
