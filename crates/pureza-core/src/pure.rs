//! Reference pure functions and one deliberately impure counterpart.
//!
//! A pure function depends only on its arguments and produces no observable
//! side effect; calling it twice with the same input must give the same
//! output. Each function here makes its inputs explicit where a tempting
//! shortcut would read or mutate ambient state instead:
//!
//! - [`days_in_month`] takes the year and month as arguments. The shortcut
//!   reads the wall clock, so its answer changes with the date it runs on
//!   and cannot be asserted deterministically.
//! - [`increment`] returns the successor of its argument. [`ImpureCounter`]
//!   is the hidden-state version it replaces, kept as the contrast.
//! - [`double`] computes from its argument where the shortcut would mutate
//!   a captured variable.
//! - [`evens`] shows [`fold`](crate::hof::fold) subsuming filter: selection
//!   expressed as accumulation.

use crate::error::{CoreError, Result};
use crate::hof::fold;

/// Days per month in a non-leap year, January first.
const MONTH_LENGTHS: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Returns the number of days in the given month of the given year.
///
/// Pure: the year and month are arguments, never read from the clock.
/// `month` is one-based (January = 1).
///
/// # Errors
/// Returns [`CoreError::InvalidMonth`] when `month` is outside `1..=12`.
///
/// # Example
///
/// ```rust
/// assert_eq!(pureza_core::pure::days_in_month(2016, 3).unwrap(), 31);
/// assert_eq!(pureza_core::pure::days_in_month(2016, 2).unwrap(), 29);
/// ```
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    if !(1..=12).contains(&month) {
        return Err(CoreError::InvalidMonth(month));
    }
    if month == 2 && is_leap_year(year) {
        return Ok(29);
    }
    Ok(MONTH_LENGTHS[(month - 1) as usize])
}

/// Gregorian leap year rule.
#[must_use]
pub const fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Pure successor: `increment(n) = n + 1`.
#[must_use]
pub const fn increment(counter: u64) -> u64 {
    counter + 1
}

/// Pure doubling: `double(n) = n * 2`.
#[must_use]
pub const fn double(x: i64) -> i64 {
    x * 2
}

/// Collects the even elements of `xs`, selection expressed as a fold.
///
/// Equivalent to `filter(|n| n % 2 == 0, xs)`; the point is that fold can
/// express filter, not that it should.
#[must_use]
pub fn evens(xs: &[i64]) -> Vec<i64> {
    fold(
        |mut acc: Vec<i64>, n: &i64| {
            if n % 2 == 0 {
                acc.push(*n);
            }
            acc
        },
        xs,
        Vec::new(),
    )
}

/// The impure counterpart of [`increment`]: a counter whose value lives in
/// hidden mutable state.
///
/// Two calls with "the same input" (no input at all) return different
/// values. Every mutation is traced, because hidden state is exactly the
/// kind of effect worth observing.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ImpureCounter {
    count: u64,
}

impl ImpureCounter {
    /// Creates a counter starting at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { count: 0 }
    }

    /// Increments the hidden state and returns the new value.
    pub fn increment(&mut self) -> u64 {
        self.count += 1;
        tracing::debug!(count = self.count, "counter mutated");
        self.count
    }

    /// Returns the current hidden value.
    #[must_use]
    pub const fn value(&self) -> u64 {
        self.count
    }
}
