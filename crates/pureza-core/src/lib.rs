// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # pureza-core
//!
//! Generic higher-order operations for the Pureza teaching library.
//!
//! This crate provides the reusable half of the curriculum:
//!
//! - [`hof`] — map, filter, fold, and higher-order dispatch
//! - [`compose`] — function composition and pipelines
//! - [`curry`] — currying binary and ternary functions into chains
//! - [`pure`] — reference pure functions and an impure counterpart
//! - [`text`] — string transforms that chain as plain fn items
//!
//! Every operation here is total over its accepted inputs, allocates a fresh
//! output, and never mutates its arguments. The single partial operation,
//! [`hof::fold_first`], reports the empty-input case through [`CoreError`]
//! instead of panicking.
//!
//! ## Example
//!
//! ```rust
//! use pureza_core::{compose::compose, hof, text};
//!
//! let doubled = hof::map(|n: &i64| n * 2, &[1, 2, 3]);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let shout = compose(text::reverse, text::uppercase);
//! assert_eq!(shout("hello".into()), "OLLEH");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod compose;
pub mod curry;
pub mod error;
pub mod hof;
pub mod pure;
pub mod text;

pub use compose::{compose, identity, pipe};
pub use curry::{add, curry2, curry3, greet, volume};
pub use error::{CoreError, Result};
pub use hof::{calculate, filter, fold, fold_first, map};
pub use pure::{ImpureCounter, days_in_month, double, evens, increment};
