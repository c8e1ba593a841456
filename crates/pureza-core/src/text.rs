//! String transforms shaped for composition.
//!
//! Every transform takes and returns an owned `String` (or a `Vec` of them)
//! so plain fn items chain through [`compose`](crate::compose::compose) and
//! [`pipe`](crate::compose::pipe) without adapter closures.

/// Reverses a string character by character.
#[must_use]
pub fn reverse(s: String) -> String {
    s.chars().rev().collect()
}

/// Uppercases a string.
#[must_use]
pub fn uppercase(s: String) -> String {
    s.to_uppercase()
}

/// Appends "!!!".
#[must_use]
pub fn emphasize(s: String) -> String {
    s + "!!!"
}

/// Splits a string into whitespace-separated words.
#[must_use]
pub fn words(s: String) -> Vec<String> {
    s.split_whitespace().map(str::to_string).collect()
}

/// Length of a sequence, as a composable function value.
#[must_use]
pub fn count<T>(xs: Vec<T>) -> usize {
    xs.len()
}
