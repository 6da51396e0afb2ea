//! Integration tests for `LazySequence`.
//!
//! Covers construction, every deferred stage, every consumer and the
//! single-pass cursor semantics shared by all of them.

#![cfg(feature = "sequence")]

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use funcflow::SequenceError;
use funcflow::sequence::{LazySequence, SequentialPool, lazy, sequence_fn};
use rstest::{fixture, rstest};

#[fixture]
fn one_to_five() -> Vec<i32> {
    vec![1, 2, 3, 4, 5]
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_to_list_round_trips_source(one_to_five: Vec<i32>) {
    assert_eq!(lazy(one_to_five.clone()).to_list(), one_to_five);
}

#[rstest]
fn test_new_accepts_any_iterable() {
    let from_range = LazySequence::new(0..3).to_list();
    let from_array = LazySequence::new([0, 1, 2]).to_list();
    let from_chars = LazySequence::new("abc".chars()).to_list();

    assert_eq!(from_range, vec![0, 1, 2]);
    assert_eq!(from_array, vec![0, 1, 2]);
    assert_eq!(from_chars, vec!['a', 'b', 'c']);
}

#[rstest]
fn test_from_fn_stops_at_none() {
    let mut state = 1;
    let powers = LazySequence::from_fn(move || {
        let current = state;
        state *= 2;
        (current <= 16).then_some(current)
    });
    assert_eq!(powers.to_list(), vec![1, 2, 4, 8, 16]);
}

#[rstest]
fn test_sequence_fn_wraps_generator_function() {
    let odd_below = sequence_fn(|limit: u32| (0..limit).filter(|value| value % 2 == 1));
    assert_eq!(odd_below(8).reduce(0, |sum, value| sum + value), 16);
    assert_eq!(odd_below(4).to_list(), vec![1, 3]);
}

// =============================================================================
// Single-pass semantics
// =============================================================================

#[rstest]
fn test_second_loop_yields_nothing(one_to_five: Vec<i32>) {
    let mut sequence = lazy(one_to_five);

    let mut first_pass = Vec::new();
    for value in &mut sequence {
        first_pass.push(value);
    }
    let second_pass: Vec<i32> = (&mut sequence).collect();

    assert_eq!(first_pass, vec![1, 2, 3, 4, 5]);
    assert!(second_pass.is_empty());
}

#[rstest]
fn test_next_steps_one_element_at_a_time() {
    let mut sequence = lazy(vec!['a', 'b']);
    assert_eq!(sequence.next(), Some('a'));
    assert_eq!(sequence.next(), Some('b'));
    assert_eq!(sequence.next(), None);
    assert_eq!(sequence.next(), None);
}

#[rstest]
fn test_head_twice_after_exhaustion_fails_both_times() {
    let mut sequence = lazy(vec![1]);
    assert_eq!(sequence.head(), Ok(1));
    assert_eq!(sequence.head(), Err(SequenceError::EmptySequence));
    assert_eq!(sequence.head(), Err(SequenceError::EmptySequence));
}

#[rstest]
fn test_partial_consumption_then_collect(one_to_five: Vec<i32>) {
    let mut sequence = lazy(one_to_five);
    assert_eq!(sequence.head(), Ok(1));
    assert_eq!(sequence.at(1), Ok(3));
    assert_eq!(sequence.to_list(), vec![4, 5]);
}

#[rstest]
fn test_at_past_end_is_empty_sequence() {
    let mut sequence = lazy(vec![1, 2]);
    assert_eq!(sequence.at(5), Err(SequenceError::EmptySequence));
    assert_eq!(sequence.head(), Err(SequenceError::EmptySequence));
}

#[rstest]
fn test_elements_are_pulled_on_demand() {
    let log = RefCell::new(Vec::new());
    let mut sequence = lazy(1..=3)
        .tap(|value| log.borrow_mut().push(format!("source {value}")))
        .map(|value| value * 10)
        .tap(|value| log.borrow_mut().push(format!("mapped {value}")));

    assert!(log.borrow().is_empty());
    assert_eq!(sequence.head(), Ok(10));
    assert_eq!(*log.borrow(), vec!["source 1", "mapped 10"]);
}

// =============================================================================
// Stages
// =============================================================================

#[rstest]
fn test_map_filter_chain() {
    let result = lazy(1..=10)
        .filter(|value| value % 2 == 0)
        .map(|value| value * value)
        .to_list();
    assert_eq!(result, vec![4, 16, 36, 64, 100]);
}

#[rstest]
fn test_map_errors_surface_at_the_failing_element() {
    let mut parsed = lazy(["1", "two", "3"]).map(|text| text.parse::<i32>());
    assert_eq!(parsed.head(), Ok(Ok(1)));
    assert!(parsed.head().unwrap().is_err());
    assert_eq!(parsed.head(), Ok(Ok(3)));
}

#[rstest]
fn test_indexed_map_counts_its_own_pulls() {
    let result = lazy(vec![10, 11, 12, 13])
        .filter(|value| value % 2 == 1)
        .indexed_map(|index, value| (index, value))
        .to_list();
    assert_eq!(result, vec![(0, 11), (1, 13)]);
}

#[rstest]
fn test_indexed_filter() {
    let result = lazy(vec![1, 3, 4, 2, 1])
        .indexed_filter(|index, value| value % 2 == 0 && index % 2 == 0)
        .to_list();
    assert_eq!(result, vec![4]);
}

#[rstest]
fn test_star_map_over_pairs() {
    let result = lazy((0..5).map(|index| (index, index)))
        .star_map(|x: i32, y: i32| x + y)
        .to_list();
    assert_eq!(result, vec![0, 2, 4, 6, 8]);
}

#[rstest]
fn test_star_filter_over_pairs() {
    let result = lazy((0..10).map(|index| (index, index)))
        .star_filter(|x: &i32, _y: &i32| x % 2 == 1)
        .to_list();
    assert_eq!(result, vec![(1, 1), (3, 3), (5, 5), (7, 7), (9, 9)]);
}

#[rstest]
fn test_star_map_three_fields() {
    let result = lazy(vec![("a", 1, true), ("b", 2, false)])
        .star_map(|name: &str, count: i32, flag: bool| format!("{name}{count}{flag}"))
        .to_list();
    assert_eq!(result, vec!["a1true", "b2false"]);
}

#[rstest]
fn test_try_star_map_reports_wrong_arity_per_element() {
    let result = lazy(vec![vec![1, 2], vec![3], vec![4, 5]])
        .try_star_map(|a: i32, b: i32| a * b)
        .to_list();
    assert_eq!(result[0], Ok(2));
    assert_eq!(
        result[1],
        Err(SequenceError::TypeMismatch {
            expected: "2 elements".to_owned(),
            found: "1 elements".to_owned(),
        })
    );
    assert_eq!(result[2], Ok(20));
}

#[rstest]
fn test_tap_sees_every_element_once() {
    let seen = Cell::new(0);
    let total = lazy(1..=4)
        .tap(|_| seen.set(seen.get() + 1))
        .reduce(0, |sum, value| sum + value);
    assert_eq!(total, 10);
    assert_eq!(seen.get(), 4);
}

#[rstest]
fn test_indexed_tap() {
    let mut positions = Vec::new();
    let values = lazy(vec!['x', 'y'])
        .indexed_tap(|index, value| positions.push((index, *value)))
        .to_list();
    assert_eq!(values, vec!['x', 'y']);
    assert_eq!(positions, vec![(0, 'x'), (1, 'y')]);
}

#[rstest]
fn test_cast_is_identity() {
    let values = lazy(vec![1u8, 2]).cast::<u8>().to_list();
    assert_eq!(values, vec![1, 2]);
}

// =============================================================================
// Slicing
// =============================================================================

#[rstest]
fn test_slice_then_reduce(one_to_five: Vec<i32>) {
    let total = lazy(one_to_five)
        .slice(2, None)
        .unwrap()
        .reduce(0, |sum, value| sum + value);
    assert_eq!(total, 12);
}

#[rstest]
fn test_range_forms(one_to_five: Vec<i32>) {
    assert_eq!(lazy(one_to_five.clone()).range(..2).unwrap().to_list(), vec![1, 2]);
    assert_eq!(lazy(one_to_five.clone()).range(2..).unwrap().to_list(), vec![3, 4, 5]);
    assert_eq!(lazy(one_to_five.clone()).range(1..3).unwrap().to_list(), vec![2, 3]);
    assert_eq!(lazy(one_to_five.clone()).range(1..=3).unwrap().to_list(), vec![2, 3, 4]);
    assert_eq!(lazy(one_to_five).range(..).unwrap().to_list(), vec![1, 2, 3, 4, 5]);
}

#[rstest]
fn test_slice_continues_from_cursor_position(one_to_five: Vec<i32>) {
    let mut sequence = lazy(one_to_five);
    assert_eq!(sequence.head(), Ok(1));
    assert_eq!(sequence.slice(1, None).unwrap().to_list(), vec![3, 4, 5]);
}

#[rstest]
#[case(2, 2)]
#[case(4, 1)]
fn test_invalid_slice(#[case] start: usize, #[case] stop: usize) {
    assert_eq!(
        lazy(0..10).slice(start, Some(stop)).err(),
        Some(SequenceError::InvalidSlice { start, stop })
    );
}

#[rstest]
#[case(2)]
#[case(0)]
fn test_stepped_slice_is_not_supported(#[case] step: usize) {
    assert!(matches!(
        lazy(0..10).stepped(..4, step),
        Err(SequenceError::NotSupported { .. })
    ));
}

// =============================================================================
// Consumers
// =============================================================================

#[rstest]
fn test_reduce_sums(one_to_five: Vec<i32>) {
    assert_eq!(lazy(one_to_five).reduce(0, |sum, value| sum + value), 15);
}

#[rstest]
fn test_fold_left_matches_reduce(one_to_five: Vec<i32>) {
    let concat = |text: String, value: i32| format!("{text}{value}");
    assert_eq!(
        lazy(one_to_five.clone()).fold_left(String::new(), concat),
        lazy(one_to_five).reduce(String::new(), concat)
    );
}

#[rstest]
fn test_reduce_first_on_exhausted_sequence() {
    let mut sequence = lazy(vec![1, 2]);
    sequence.exhaust();
    assert_eq!(
        sequence.reduce_first(|left, right| left.max(right)),
        Err(SequenceError::EmptySequence)
    );
}

#[rstest]
fn test_to_set_uses_value_equality() {
    let set = lazy(vec![3, 1, 3, 2, 1]).to_set();
    assert_eq!(set, HashSet::from([1, 2, 3]));
}

#[rstest]
fn test_freeze_materializes_remaining_elements(one_to_five: Vec<i32>) {
    let mut sequence = lazy(one_to_five);
    sequence.head().unwrap();
    let frozen = sequence.freeze();
    assert_eq!(frozen.to_list(), vec![2, 3, 4, 5]);
    assert_eq!(frozen.to_list(), vec![2, 3, 4, 5]);
}

#[rstest]
fn test_try_to_list_stops_at_first_error() {
    let pulled = Cell::new(0);
    let result = lazy(vec![Ok(1), Err("bad"), Ok(3)])
        .tap(|_| pulled.set(pulled.get() + 1))
        .try_to_list();
    assert_eq!(result, Err("bad"));
    assert_eq!(pulled.get(), 2);
}

#[rstest]
fn test_try_exhaust_returns_first_error() {
    let mut sequence = lazy(vec![
        Ok::<i32, String>(1),
        Err("first".to_owned()),
        Err("second".to_owned()),
    ]);
    assert_eq!(sequence.try_exhaust(), Err("first".to_owned()));
    assert_eq!(sequence.try_exhaust(), Err("second".to_owned()));
    assert_eq!(sequence.try_exhaust(), Ok(()));
}

#[rstest]
fn test_parallel_map_with_sequential_pool_is_map(one_to_five: Vec<i32>) {
    let parallel = lazy(one_to_five.clone())
        .parallel_map(&SequentialPool, |value: i32| value * 3)
        .to_list();
    let sequential = lazy(one_to_five).map(|value| value * 3).to_list();
    assert_eq!(parallel, sequential);
}

#[rstest]
fn test_debug_is_opaque() {
    assert_eq!(format!("{:?}", lazy(0..3)), "LazySequence { .. }");
}
