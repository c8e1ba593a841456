// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # pureza-test
//!
//! Testing infrastructure for the Pureza teaching library.
//!
//! This crate provides:
//! - **Fixtures**: the canonical workshop data every suite shares
//! - **Purity assertions**: referential-transparency checks
//! - **Falsification tests**: Popperian tests for the curriculum's claims
//!
//! The falsification suite lives under `tests/`; this library carries the
//! pieces it shares with unit tests elsewhere in the workspace.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;

pub use fixtures::{perfect_squares, small_numbers, workshop_roster, zoo};

/// Asserts that `f` is referentially transparent on `input`: two calls with
/// the same argument must produce the same result.
///
/// Catches the obvious impurity (hidden mutable state feeding the output).
/// It cannot prove purity, only fail to falsify it.
///
/// # Panics
/// Panics when the two calls disagree.
pub fn assert_referentially_transparent<T, U, F>(f: F, input: T)
where
    T: Clone,
    U: PartialEq + std::fmt::Debug,
    F: Fn(T) -> U,
{
    let first = f(input.clone());
    let second = f(input);
    assert_eq!(
        first, second,
        "same input produced different outputs: not referentially transparent"
    );
}
