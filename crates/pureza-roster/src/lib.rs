// Allow unwrap/expect in tests for clear failure messages
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

//! # pureza-roster
//!
//! The record domain for the Pureza teaching library: the data the generic
//! combinators in pureza-core get exercised on.
//!
//! This crate provides:
//!
//! - [`Student`], [`Animal`], [`Profile`] — immutable records, plus the
//!   [`Named`] trait unifying everything with a name
//! - [`GradePolicy`] — validated grading configuration, loadable from TOML
//! - [`report`] — the grading pipelines (projections, filters, totals)
//!   built from pureza-core's map/filter/fold
//!
//! Records are plain owned data. Pipelines borrow their input and build
//! fresh output; nothing here mutates a roster.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod policy;
pub mod record;
pub mod report;

pub use error::{Result, RosterError};
pub use policy::GradePolicy;
pub use record::{Animal, Named, Profile, Student, profile};
pub use report::{approved, approved_names, combined_names, grade_total, grades, names};
