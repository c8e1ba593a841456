//! Falsification Tests: Category E - Roster Pipelines (F041-F049)
//!
//! The claims under attack: the grading pipelines compute the workshop's
//! literal expectations, honor the configured policy, and never mutate the
//! roster.

use pureza_core::hof::filter;
use pureza_roster::{
    GradePolicy, RosterError, Student, approved, approved_names, combined_names, grade_total,
    grades, names,
};
use pureza_test::{workshop_roster, zoo};

/// F041: grade projection preserves roster order
#[test]
fn f041_grades_projection() {
    assert_eq!(
        grades(&workshop_roster()),
        vec![6, 4, 9],
        "F041 FALSIFIED: grades must be [6, 4, 9]"
    );
}

/// F042: one generic name projection serves students and animals
#[test]
fn f042_names_is_generic_over_named() {
    assert_eq!(
        names(&workshop_roster()),
        vec!["Anna", "John", "Maria"],
        "F042 FALSIFIED: student names wrong"
    );
    assert_eq!(
        names(&zoo()),
        vec!["Panda", "Elephant", "Dog"],
        "F042 FALSIFIED: animal names wrong"
    );
}

/// F043: the default policy approves grade >= 6
#[test]
fn f043_approved_is_inclusive() {
    let passed = approved(&GradePolicy::default(), &workshop_roster());
    assert_eq!(
        passed,
        vec![Student::new("Anna", 6), Student::new("Maria", 9)],
        "F043 FALSIFIED: Anna (exactly 6) and Maria must pass"
    );
}

/// F044: a strict predicate passed as a value keeps only Maria
///
/// # Falsification Attempt
/// Hand the policy's strict comparison to the generic filter; only the
/// grade-9 student survives.
#[test]
fn f044_exceeds_filter_as_value() {
    let policy = GradePolicy::default();
    let above = filter(|s| policy.exceeds(s), &workshop_roster());
    assert_eq!(
        above,
        vec![Student::new("Maria", 9)],
        "F044 FALSIFIED: only Maria exceeds 6"
    );
}

/// F045: approved names is filter-then-map
#[test]
fn f045_approved_names_chain() {
    assert_eq!(
        approved_names(&GradePolicy::default(), &workshop_roster()),
        vec!["Anna", "Maria"],
        "F045 FALSIFIED: approved names must be [Anna, Maria]"
    );
}

/// F046: the grade total is 19
#[test]
fn f046_grade_total() {
    assert_eq!(
        grade_total(&workshop_roster()).unwrap(),
        19,
        "F046 FALSIFIED: 6+4+9 must be 19"
    );
}

/// F047: totalling an empty roster is a typed error
#[test]
fn f047_grade_total_empty_roster() {
    let err = grade_total(&[]).unwrap_err();
    assert!(
        matches!(err, RosterError::EmptyRoster),
        "F047 FALSIFIED: empty roster must report EmptyRoster, got {err}"
    );
}

/// F048: names fold together in roster order
#[test]
fn f048_combined_names() {
    assert_eq!(
        combined_names(&workshop_roster()),
        "AnnaJohnMaria",
        "F048 FALSIFIED: fold must concatenate in order"
    );
}

/// F049: policy configuration round-trips through TOML with validation
///
/// # Falsification Attempt
/// A parsed policy must behave exactly like the constructed one, and an
/// off-scale policy must be rejected at load time, not at use time.
#[test]
fn f049_policy_from_toml() {
    let parsed = GradePolicy::from_toml_str("passing_grade = 7").unwrap();
    assert_eq!(
        approved_names(&parsed, &workshop_roster()),
        vec!["Maria"],
        "F049 FALSIFIED: parsed policy must raise the bar to 7"
    );

    let err = GradePolicy::from_toml_str("passing_grade = 42").unwrap_err();
    assert!(
        matches!(err, RosterError::Config(_)),
        "F049 FALSIFIED: off-scale policy must fail validation"
    );
}
