//! Grading pipelines built from pureza-core combinators.
//!
//! Every report borrows the roster and produces fresh output; the roster is
//! never mutated. The pipelines are deliberately thin wrappers so each one
//! reads as its combinator recipe: project with map, select with filter,
//! total with fold.

use pureza_core::hof::{filter, fold, fold_first, map};

use crate::error::{Result, RosterError};
use crate::policy::GradePolicy;
use crate::record::{Named, Student};

/// Projects every student to their grade.
#[must_use]
pub fn grades(students: &[Student]) -> Vec<u32> {
    map(|s| s.grade, students)
}

/// Projects every record to its name.
///
/// Generic over [`Named`], so one definition covers students and animals.
#[must_use]
pub fn names<T: Named>(items: &[T]) -> Vec<String> {
    map(|item| item.name().to_string(), items)
}

/// Students meeting the policy's passing grade, in roster order.
#[must_use]
pub fn approved(policy: &GradePolicy, students: &[Student]) -> Vec<Student> {
    filter(|s| policy.passes(s), students)
}

/// Names of the students meeting the passing grade: filter, then map.
#[must_use]
pub fn approved_names(policy: &GradePolicy, students: &[Student]) -> Vec<String> {
    names(&approved(policy, students))
}

/// Sum of all grades: map to grades, then fold from the first.
///
/// # Errors
/// Returns [`RosterError::EmptyRoster`] when there are no students, since a
/// seedless fold has nothing to start from.
pub fn grade_total(students: &[Student]) -> Result<u32> {
    fold_first(|acc, g| acc + g, &grades(students)).map_err(|_| RosterError::EmptyRoster)
}

/// All names run together into one string, via fold.
#[must_use]
pub fn combined_names(students: &[Student]) -> String {
    fold(|acc, s: &Student| acc + &s.name, students, String::new())
}
