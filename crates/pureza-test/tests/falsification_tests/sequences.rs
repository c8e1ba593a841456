//! Falsification Tests: Category B - Sequence Transformations (F011-F018)
//!
//! The claims under attack: map preserves order and length, filter never
//! invents or reorders elements, fold honors its initial accumulator, and
//! none of them touch the input.

use pureza_core::error::CoreError;
use pureza_core::hof::{calculate, filter, fold, fold_first, map};
use pureza_test::{perfect_squares, small_numbers};

/// F011: map of sqrt over perfect squares gives the exact roots
#[test]
fn f011_map_square_roots() {
    let roots = map(|n: &f64| n.sqrt(), &perfect_squares());
    assert_eq!(
        roots,
        vec![1.0, 2.0, 3.0],
        "F011 FALSIFIED: roots of [1,4,9] must be [1,2,3]"
    );
}

/// F012: map preserves length and leaves the input alone
///
/// # Falsification Attempt
/// Transform a sequence, then use the original; any mutation or length
/// drift fails.
#[test]
fn f012_map_preserves_length_and_input() {
    let numbers = small_numbers();
    let doubled = map(|n: &i64| n * 2, &numbers);
    assert_eq!(
        doubled.len(),
        numbers.len(),
        "F012 FALSIFIED: map changed the length"
    );
    assert_eq!(
        numbers,
        small_numbers(),
        "F012 FALSIFIED: map mutated its input"
    );
}

/// F013: filter keeps exactly the matching elements, in order
#[test]
fn f013_filter_greater_than_four() {
    let filtered = filter(|n: &i64| *n > 4, &[1, 4, 9]);
    assert_eq!(filtered, vec![9], "F013 FALSIFIED: only 9 exceeds 4");
}

/// F014: filter output never exceeds the input length
///
/// # Falsification Attempt
/// A predicate that accepts everything must reproduce the input; one that
/// accepts nothing must produce the empty sequence.
#[test]
fn f014_filter_bounds() {
    let numbers = small_numbers();
    let all = filter(|_| true, &numbers);
    let none = filter(|_| false, &numbers);
    assert_eq!(all, numbers, "F014 FALSIFIED: accept-all changed the data");
    assert!(none.is_empty(), "F014 FALSIFIED: accept-none kept elements");
}

/// F015: fold sums left-to-right from the initial value
#[test]
fn f015_fold_sum() {
    let sum = fold(|acc, n| acc + n, &small_numbers(), 0);
    assert_eq!(sum, 10, "F015 FALSIFIED: 1+2+3+4 must be 10");
}

/// F016: fold over an empty sequence returns the initial value unchanged
#[test]
fn f016_fold_empty_is_identity() {
    let out = fold(|acc, n: &i64| acc + n, &[], 42);
    assert_eq!(out, 42, "F016 FALSIFIED: empty fold must return the seed");
}

/// F017: a seedless fold refuses the empty sequence
///
/// # Falsification Attempt
/// fold_first over nothing has no seed; anything but EmptySequence (a
/// panic, a default) falsifies the claim.
#[test]
fn f017_fold_first_empty_is_error() {
    let err = fold_first(|acc, n: &i64| acc + n, &[]).unwrap_err();
    assert_eq!(
        err,
        CoreError::EmptySequence,
        "F017 FALSIFIED: empty seedless fold must be a typed error"
    );
}

/// F018: calculate dispatches whichever operation it is handed
#[test]
fn f018_calculate_dispatches() {
    let sum = |x: i64, y: i64| x + y;
    let mult = |x: i64, y: i64| x * y;
    assert_eq!(
        calculate(sum, 10, 2),
        12,
        "F018 FALSIFIED: sum dispatch broken"
    );
    assert_eq!(
        calculate(mult, 10, 2),
        20,
        "F018 FALSIFIED: mult dispatch broken"
    );
}
