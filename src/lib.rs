//! Pureza: Functional Programming Teaching Library
//!
//! Part of the PAIML training curriculum.
//!
//! # Quick Start
//!
//! ```rust
//! use pureza::prelude::*;
//!
//! let roster = vec![Student::new("Anna", 6), Student::new("Maria", 9)];
//! assert_eq!(grade_total(&roster).unwrap(), 15);
//!
//! let shout = compose(reverse, uppercase);
//! assert_eq!(shout("hello".into()), "OLLEH");
//! ```

pub use pureza_core as core;
pub use pureza_roster as roster;

/// Prelude module for common imports.
pub mod prelude {
    pub use pureza_core::{
        CoreError, ImpureCounter, add, calculate, compose, curry2, curry3, days_in_month, double,
        evens, filter, fold, fold_first, greet, identity, increment, map, pipe, volume,
    };
    pub use pureza_core::text::{count, emphasize, reverse, uppercase, words};
    pub use pureza_roster::{
        Animal, GradePolicy, Named, Profile, RosterError, Student, approved, approved_names,
        combined_names, grade_total, grades, names, profile,
    };
}
