//! Sequence transformations and higher-order dispatch.
//!
//! The three classics — [`map`], [`filter`], [`fold`] — plus [`fold_first`]
//! (a fold seeded from the first element) and [`calculate`] (dispatch of a
//! binary operation passed as a value).
//!
//! All of them take the function first and the sequence second, read the
//! input through a shared slice, and build a fresh `Vec` or accumulator.
//! The input is never mutated.

use crate::error::{CoreError, Result};

/// Applies `f` to every element of `xs`, producing a new sequence.
///
/// Preserves order and length.
///
/// # Example
///
/// ```rust
/// let roots = pureza_core::hof::map(|n: &f64| n.sqrt(), &[1.0, 4.0, 9.0]);
/// assert_eq!(roots, vec![1.0, 2.0, 3.0]);
/// ```
#[must_use]
pub fn map<T, U, F>(f: F, xs: &[T]) -> Vec<U>
where
    F: Fn(&T) -> U,
{
    xs.iter().map(f).collect()
}

/// Keeps, in original order, exactly the elements of `xs` satisfying `p`.
///
/// The output length never exceeds the input length.
#[must_use]
pub fn filter<T, P>(p: P, xs: &[T]) -> Vec<T>
where
    T: Clone,
    P: Fn(&T) -> bool,
{
    xs.iter().filter(|x| p(x)).cloned().collect()
}

/// Folds `xs` left-to-right into a single value, starting from `init`.
///
/// An empty sequence returns `init` unchanged.
///
/// # Example
///
/// ```rust
/// let sum = pureza_core::hof::fold(|acc, n| acc + n, &[1, 2, 3, 4], 0);
/// assert_eq!(sum, 10);
/// ```
#[must_use]
pub fn fold<T, A, F>(f: F, xs: &[T], init: A) -> A
where
    F: Fn(A, &T) -> A,
{
    xs.iter().fold(init, f)
}

/// Folds `xs` left-to-right, seeding the accumulator from the first element.
///
/// # Errors
/// Returns [`CoreError::EmptySequence`] when `xs` is empty, since there is
/// no element to seed from.
pub fn fold_first<T, F>(f: F, xs: &[T]) -> Result<T>
where
    T: Clone,
    F: Fn(T, &T) -> T,
{
    let (first, rest) = xs.split_first().ok_or(CoreError::EmptySequence)?;
    Ok(rest.iter().fold(first.clone(), f))
}

/// Applies a binary operation passed in as a value.
///
/// The operation is an ordinary argument; callers choose the arithmetic at
/// the call site.
///
/// # Example
///
/// ```rust
/// use pureza_core::hof::calculate;
///
/// assert_eq!(calculate(|x, y| x + y, 10, 2), 12);
/// assert_eq!(calculate(|x, y| x * y, 10, 2), 20);
/// ```
pub fn calculate<A, B, R, F>(op: F, x: A, y: B) -> R
where
    F: Fn(A, B) -> R,
{
    op(x, y)
}
