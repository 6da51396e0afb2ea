//! Unit tests for function composition utilities.
//!
//! Tests for identity, the spread traits and the compose! macro.

#![cfg(feature = "compose")]

use funcflow::compose;
use funcflow::compose::{Callable, StarFn, StarPredicate, Unpack, identity};
use funcflow::{SequenceError, SequenceResult};
use rstest::rstest;

// =============================================================================
// identity function tests
// =============================================================================

#[test]
fn test_identity_returns_same_integer() {
    assert_eq!(identity(42), 42);
    assert_eq!(identity(-100), -100);
}

#[test]
fn test_identity_returns_same_vector() {
    assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
}

#[test]
fn test_identity_preserves_ownership() {
    let owned = String::from("owned string");
    let result = identity(owned);
    assert_eq!(result, "owned string");
}

// =============================================================================
// compose! macro tests
// =============================================================================

fn add(a: i32, b: i32) -> i32 {
    a + b
}

fn multiply_2(a: i32, b: i32) -> (i32, i32) {
    (a * 2, b * 2)
}

fn pass(a: i32, b: i32) -> (i32, i32) {
    (a, b)
}

#[test]
fn test_compose_spreads_pair_into_binary_function() {
    let composed = compose!(add, multiply_2);
    assert_eq!(composed((1, 2)), 6);
}

#[test]
fn test_compose_three_functions_right_to_left() {
    let composed = compose!(add, multiply_2, pass);
    assert_eq!(composed((1, 2)), 6);
}

#[test]
fn test_compose_single_function_is_itself() {
    let composed = compose!(add);
    assert_eq!(composed(2, 3), 5);
}

#[test]
fn test_compose_applies_rightmost_first() {
    let add_one = |x: i32| x + 1;
    let double = |x: i32| x * 2;

    assert_eq!(compose!(add_one, double)(5), 11);
    assert_eq!(compose!(double, add_one)(5), 12);
}

#[test]
fn test_compose_unary_function_receives_tuple_whole() {
    let swap = |pair: (i32, &'static str)| (pair.1, pair.0);
    let describe = |name: &'static str, count: i32| format!("{name}={count}");

    let composed = compose!(describe, swap);
    assert_eq!(composed((3, "apples")), "apples=3");
}

#[test]
fn test_compose_unpacks_single_element_tuple() {
    let increment = |x: i32| x + 1;
    let wrap = |x: i32| (x,);
    assert_eq!(compose!(increment, wrap)(1), 2);
}

#[test]
fn test_compose_single_element_tuple_through_three_steps() {
    let wrap = |x: i32| (x,);
    let halve = |x: i32| (x / 2,);
    let describe = |x: i32| format!("half={x}");
    assert_eq!(compose!(describe, halve, wrap)(10), "half=5");
}

#[test]
fn test_compose_nullary_innermost_takes_unit() {
    let seed = || (2, 3);
    let composed = compose!(add, seed);
    assert_eq!(composed(()), 5);
}

#[test]
fn test_compose_type_changing_pipeline() {
    let parse = |text: &str| text.len();
    let split = |length: usize| (length, length % 2 == 0);
    let render = |length: usize, even: bool| format!("{length}:{even}");

    let composed = compose!(render, split, parse);
    assert_eq!(composed("four"), "4:true");
    assert_eq!(composed("odd"), "3:false");
}

#[test]
fn test_compose_is_reusable() {
    let composed = compose!(add, multiply_2);
    assert_eq!(composed((1, 1)), 4);
    assert_eq!(composed((0, 5)), 10);
}

#[test]
fn test_compose_with_captured_environment() {
    let offset = 100;
    let shift = move |a: i32, b: i32| (a + offset, b + offset);
    let composed = compose!(add, shift);
    assert_eq!(composed((1, 2)), 203);
}

#[test]
fn test_compose_six_argument_spread() {
    let spread_six = |value: i32| (value, value, value, value, value, value);
    let sum_six = |a: i32, b: i32, c: i32, d: i32, e: i32, f: i32| a + b + c + d + e + f;
    assert_eq!(compose!(sum_six, spread_six)(2), 12);
}

// =============================================================================
// spread trait tests
// =============================================================================

#[rstest]
#[case((1, 2), 3)]
#[case((-4, 4), 0)]
fn test_star_fn_binary(#[case] arguments: (i32, i32), #[case] expected: i32) {
    let mut add_closure = |a: i32, b: i32| a + b;
    assert_eq!(add_closure.call_spread(arguments), expected);
}

#[rstest]
fn test_star_predicate_ternary() {
    let mut ascending = |a: &i32, b: &i32, c: &i32| a < b && b < c;
    assert!(ascending.test_spread(&(1, 2, 3)));
    assert!(!ascending.test_spread(&(3, 2, 1)));
}

#[rstest]
#[case(vec![1, 2, 3], Ok((1, 2, 3)))]
#[case(vec![1, 2], Err(SequenceError::TypeMismatch {
    expected: "3 elements".to_owned(),
    found: "2 elements".to_owned(),
}))]
fn test_unpack_vec_triple(
    #[case] input: Vec<i32>,
    #[case] expected: SequenceResult<(i32, i32, i32)>,
) {
    let unpacked: SequenceResult<(i32, i32, i32)> = input.unpack();
    assert_eq!(unpacked, expected);
}

#[rstest]
fn test_callable_function_pointer() {
    assert_eq!(add.call_with((20, 22)), 42);
}
